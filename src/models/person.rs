//! The Person record mirrored between the relational store and the cache.

/// Canonical record as stored in the `people` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: i64,
    pub name: String,
}

impl Person {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Cache key for this record: the identifier in decimal form.
    pub fn cache_key(&self) -> String {
        self.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_is_decimal_id() {
        assert_eq!(Person::new(7, "Alice").cache_key(), "7");
        assert_eq!(Person::new(-12, "Bob").cache_key(), "-12");
    }
}
