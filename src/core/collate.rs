// src/core/collate.rs
//
// Collation over the alphabet table. Every function here is total: malformed
// or foreign-script input degrades to sentinel ranks instead of failing, so a
// bad record can push itself to the end of a listing but never break it.

use crate::core::alphabet::{rank, rank_or_unmapped, is_gurmukhi_block, EMPTY_KEY_RANK};
use crate::core::types::SortKey;

/// Builds the collation key for a piece of text.
///
/// Leading and trailing whitespace is trimmed first; internal characters are
/// ranked one by one. Empty or whitespace-only input yields the singleton
/// maximal key, so blank entries always land at the end of an ascending sort.
pub fn sort_key(text: &str) -> SortKey {
    let text = text.trim();
    if text.is_empty() {
        return SortKey(vec![EMPTY_KEY_RANK]);
    }
    SortKey(text.chars().map(rank_or_unmapped).collect())
}

/// Sorts items ascending by the collation key of their extracted text.
///
/// The sort is stable: items with equal keys keep their input order. For a
/// descending listing, reverse the returned sequence; equal-key ties then
/// appear in reverse of their input order, which is the intended mirror of
/// the ascending listing and not something to correct here.
pub fn sort_items<T, F>(items: Vec<T>, key_fn: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut items = items;
    items.sort_by_cached_key(|item| sort_key(key_fn(item)));
    items
}

/// `sort_items` for collections that are already plain text.
pub fn sort_texts<S: AsRef<str>>(items: Vec<S>) -> Vec<S> {
    sort_items(items, |s| s.as_ref())
}

/// Normalizes Gurmukhi text for comparison: drops zero-width space,
/// non-joiner and joiner, collapses whitespace runs to a single space, and
/// trims both ends. Does not touch ranking.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}'))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First character of the normalized text that appears in the alphabet
/// table, for letter-group navigation. `None` when the text has no ranked
/// character at all (all-Latin, symbols, empty).
pub fn first_significant_letter(text: &str) -> Option<char> {
    normalize(text).chars().find(|&c| rank(c).is_some())
}

/// Whether any character of the text falls in the Gurmukhi Unicode block.
pub fn contains_gurmukhi(text: &str) -> bool {
    text.chars().any(is_gurmukhi_block)
}
