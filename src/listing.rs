// src/listing.rs
//
// Ordering policy for index-page listings. The host CMS hands over the
// entries it already filtered and paginates whatever comes back; this module
// only decides the order and the letter grouping.

use crate::core::alphabet::{rank, UNMAPPED_RANK};
use crate::core::collate::{first_significant_letter, normalize, sort_items};
use crate::core::types::Rank;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// What a listing needs to know about an entry in order to place it.
pub trait ListingEntry {
    /// The Gurmukhi display string the entry is collated by.
    fn gurmukhi_text(&self) -> &str;
    /// Total recorded page views.
    fn view_count(&self) -> u64;
    /// When the entry was first published.
    fn published_at(&self) -> DateTime<Utc>;
}

/// The four listing orders an index page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending Gurmukhi dictionary order.
    AlphaAsc,
    /// The ascending order reversed. Entries with identical headwords come
    /// out in reverse of their ascending relative order; listings have
    /// always shown them that way, so it stays.
    AlphaDesc,
    /// Most viewed first.
    Popular,
    /// Most recently published first.
    Recent,
}

impl SortMode {
    /// Parses the `sort` query token. Unknown or missing tokens fall back to
    /// the alphabetical default.
    pub fn from_query(token: Option<&str>) -> Self {
        match token {
            Some("alpha_desc") => SortMode::AlphaDesc,
            Some("popular") => SortMode::Popular,
            Some("recent") => SortMode::Recent,
            _ => SortMode::AlphaAsc,
        }
    }
}

/// Orders a listing according to the chosen mode. Stable in every mode, so
/// entries that compare equal keep their input order (except under
/// `AlphaDesc`, which is defined as the reversed ascending listing).
pub fn order_listing<T: ListingEntry>(entries: Vec<T>, mode: SortMode) -> Vec<T> {
    match mode {
        SortMode::AlphaAsc => sort_items(entries, |e| e.gurmukhi_text()),
        SortMode::AlphaDesc => {
            let mut ordered = sort_items(entries, |e| e.gurmukhi_text());
            ordered.reverse();
            ordered
        }
        SortMode::Popular => {
            let mut entries = entries;
            entries.sort_by_key(|e| Reverse(e.view_count()));
            entries
        }
        SortMode::Recent => {
            let mut entries = entries;
            entries.sort_by_key(|e| Reverse(e.published_at()));
            entries
        }
    }
}

/// Keeps only the entries whose normalized text starts with the given
/// letter, as the index pages' letter filter does.
pub fn filter_by_letter<T: ListingEntry>(entries: Vec<T>, letter: char) -> Vec<T> {
    entries
        .into_iter()
        .filter(|e| normalize(e.gurmukhi_text()).starts_with(letter))
        .collect()
}

/// Buckets entries by their first significant letter for jump-to-letter
/// navigation. Groups come back in alphabet order, entries inside each group
/// in collation order, and entries with no ranked letter at all in a final
/// `None` bucket.
pub fn letter_groups<T: ListingEntry>(entries: Vec<T>) -> Vec<(Option<char>, Vec<T>)> {
    let ordered = sort_items(entries, |e| e.gurmukhi_text());

    let mut buckets: HashMap<Option<char>, Vec<T>> = HashMap::new();
    let mut seen: Vec<Option<char>> = Vec::new();
    for entry in ordered {
        let letter = first_significant_letter(entry.gurmukhi_text());
        if !buckets.contains_key(&letter) {
            seen.push(letter);
        }
        buckets.entry(letter).or_default().push(entry);
    }

    seen.sort_by_key(|letter| match letter {
        Some(c) => rank(*c).unwrap_or(UNMAPPED_RANK),
        None => Rank::MAX,
    });

    seen.into_iter()
        .map(|letter| {
            let group = buckets.remove(&letter).unwrap_or_default();
            (letter, group)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        headword: &'static str,
        views: u64,
        published: DateTime<Utc>,
    }

    impl ListingEntry for Entry {
        fn gurmukhi_text(&self) -> &str {
            self.headword
        }
        fn view_count(&self) -> u64 {
            self.views
        }
        fn published_at(&self) -> DateTime<Utc> {
            self.published
        }
    }

    fn entry(headword: &'static str, views: u64, day: u32) -> Entry {
        Entry {
            headword,
            views,
            published: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        }
    }

    fn headwords(entries: &[Entry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.headword).collect()
    }

    #[test]
    fn query_token_parsing_defaults_to_alphabetical() {
        assert_eq!(SortMode::from_query(Some("alpha_desc")), SortMode::AlphaDesc);
        assert_eq!(SortMode::from_query(Some("popular")), SortMode::Popular);
        assert_eq!(SortMode::from_query(Some("recent")), SortMode::Recent);
        assert_eq!(SortMode::from_query(Some("bogus")), SortMode::AlphaAsc);
        assert_eq!(SortMode::from_query(None), SortMode::AlphaAsc);
    }

    #[test]
    fn alphabetical_listing_uses_dictionary_order() {
        let entries = vec![entry("ਕਲਮ", 5, 1), entry("ਅੱਖਰ", 1, 2), entry("\u{0A36}ੇਰ", 9, 3)];
        let ordered = order_listing(entries, SortMode::AlphaAsc);
        assert_eq!(headwords(&ordered), vec!["ਅੱਖਰ", "ਕਲਮ", "\u{0A36}ੇਰ"]);
    }

    #[test]
    fn descending_is_the_reversed_ascending_listing() {
        let entries = vec![entry("ਕਲਮ", 1, 1), entry("ਕਲਮ", 2, 2), entry("ਅੱਖਰ", 3, 3)];
        let ordered = order_listing(entries, SortMode::AlphaDesc);
        // the duplicate headwords flip relative to their input order
        assert_eq!(
            ordered.iter().map(|e| (e.headword, e.views)).collect::<Vec<_>>(),
            vec![("ਕਲਮ", 2), ("ਕਲਮ", 1), ("ਅੱਖਰ", 3)]
        );
    }

    #[test]
    fn popular_and_recent_orders() {
        let entries = vec![entry("ਕਲਮ", 5, 3), entry("ਅੱਖਰ", 12, 1), entry("ਦਰਿਆ", 2, 2)];
        let popular = order_listing(entries.clone(), SortMode::Popular);
        assert_eq!(headwords(&popular), vec!["ਅੱਖਰ", "ਕਲਮ", "ਦਰਿਆ"]);
        let recent = order_listing(entries, SortMode::Recent);
        assert_eq!(headwords(&recent), vec!["ਕਲਮ", "ਦਰਿਆ", "ਅੱਖਰ"]);
    }

    #[test]
    fn letter_filter_matches_the_normalized_prefix() {
        let entries = vec![entry("ਕਲਮ", 0, 1), entry("  ਕਵਿਤਾ", 0, 2), entry("ਅੱਖਰ", 0, 3)];
        let filtered = filter_by_letter(entries, 'ਕ');
        assert_eq!(headwords(&filtered), vec!["ਕਲਮ", "  ਕਵਿਤਾ"]);
    }

    #[test]
    fn letter_groups_follow_the_alphabet_with_unranked_last() {
        let entries = vec![
            entry("ਕਲਮ", 0, 1),
            entry("apple", 0, 2),
            entry("ਅੱਖਰ", 0, 3),
            entry("ਕਵਿਤਾ", 0, 4),
        ];
        let groups = letter_groups(entries);
        let letters: Vec<Option<char>> = groups.iter().map(|(l, _)| *l).collect();
        assert_eq!(letters, vec![Some('ਅ'), Some('ਕ'), None]);
        assert_eq!(headwords(&groups[1].1), vec!["ਕਲਮ", "ਕਵਿਤਾ"]);
        assert_eq!(headwords(&groups[2].1), vec!["apple"]);
    }
}
