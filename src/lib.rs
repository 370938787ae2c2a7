// src/lib.rs

pub mod c_api;
pub mod core;
pub mod counter;
pub mod listing;
pub mod persistence;

pub use crate::core::alphabet::{EMPTY_KEY_RANK, UNMAPPED_RANK};
pub use crate::core::collate::{
    contains_gurmukhi, first_significant_letter, normalize, sort_items, sort_key, sort_texts,
};
pub use crate::core::types::{PageId, Rank, SortKey};
pub use crate::counter::ViewCounter;
pub use crate::listing::{ListingEntry, SortMode};
