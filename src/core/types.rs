// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Position of a character in the traditional Gurmukhi alphabet.
pub type Rank = u32;

/// A unique identifier for a content page, as assigned by the host CMS.
pub type PageId = u64;

/// Collation key for a piece of Gurmukhi text: one rank per character, in
/// input order. Keys compare lexicographically, so ordering a collection by
/// its keys orders it the way a Punjabi dictionary would.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SortKey(pub Vec<Rank>);

impl SortKey {
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}
