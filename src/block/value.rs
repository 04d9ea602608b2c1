//! Block value type

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids;

/// A block type id with an optional data variant.
///
/// `data: None` is a wildcard: it matches every variant of the type in
/// fuzzy comparisons, while `Some(0)` only matches variant 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub id: u16,
    pub data: Option<u8>,
}

impl Block {
    /// Empty cell
    pub const AIR: Block = Block::new(ids::AIR);

    /// Block with data variant 0
    pub const fn new(id: u16) -> Self {
        Self { id, data: Some(0) }
    }

    pub const fn with_data(id: u16, data: u8) -> Self {
        Self { id, data: Some(data) }
    }

    /// Block matching any data variant of `id`
    pub const fn any(id: u16) -> Self {
        Self { id, data: None }
    }

    /// Data variant, with the wildcard read as 0
    pub fn data_value(&self) -> u8 {
        self.data.unwrap_or(0)
    }

    pub fn is_air(&self) -> bool {
        self.id == ids::AIR
    }

    /// Fuzzy equality: same type, and data equal or either side a wildcard.
    pub fn matches(&self, other: &Block) -> bool {
        self.id == other.id
            && (self.data.is_none() || other.data.is_none() || self.data == other.data)
    }

    /// Concrete form used when storing into a world.
    pub fn normalized(self) -> Self {
        Self::with_data(self.id, self.data_value())
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::AIR
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data {
            Some(data) => write!(f, "{}:{}", self.id, data),
            None => write!(f, "{}:*", self.id),
        }
    }
}

/// A value with an occurrence count, ordered by count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Countable<T> {
    pub id: T,
    pub amount: usize,
}

impl<T> Countable<T> {
    pub fn new(id: T, amount: usize) -> Self {
        Self { id, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_matching() {
        let any_log = Block::any(ids::LOG);
        assert!(any_log.matches(&Block::with_data(ids::LOG, 2)));
        assert!(Block::with_data(ids::LOG, 2).matches(&any_log));
        assert!(!Block::new(ids::LOG).matches(&Block::with_data(ids::LOG, 2)));
        assert!(!any_log.matches(&Block::new(ids::STONE)));
    }

    #[test]
    fn test_normalized() {
        assert_eq!(Block::any(ids::DIRT).normalized(), Block::new(ids::DIRT));
        assert_eq!(Block::with_data(ids::DIRT, 2).normalized().data, Some(2));
        assert!(Block::default().is_air());
    }

    #[test]
    fn test_display() {
        assert_eq!(Block::with_data(35, 14).to_string(), "35:14");
        assert_eq!(Block::any(35).to_string(), "35:*");
    }
}
