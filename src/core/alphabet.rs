// src/core/alphabet.rs
//
// The traditional Gurmukhi alphabet order. Unicode code-point order does not
// match how Punjabi dictionaries arrange entries, so every character gets an
// explicit rank here and sorting goes through the ranks instead.

use crate::core::types::Rank;

/// Rank given to any character outside the table (Latin letters, ASCII
/// punctuation, stray symbols). Larger than every defined rank so unknown
/// characters sort after all recognized Gurmukhi.
pub const UNMAPPED_RANK: Rank = 9999;

/// Singleton rank for empty or whitespace-only input. Larger than
/// `UNMAPPED_RANK` so blank entries sort after everything else.
pub const EMPTY_KEY_RANK: Rank = 999_999;

/// Looks up the alphabet rank of a single character.
///
/// Bands: independent vowel carriers 1-5, consonants 6-41 (the six nukta
/// consonants take 36-41), dependent vowel signs 100-108, other diacritics
/// 200-203, Gurmukhi digits 300-309, danda punctuation 400-401.
pub fn rank(c: char) -> Option<Rank> {
    match c {
        // Independent vowel carriers
        'ੳ' => Some(1),
        'ਅ' => Some(2),
        'ੲ' => Some(3),
        'ਸ' => Some(4),
        'ਹ' => Some(5),

        // Consonants (vyanjan)
        'ਕ' => Some(6),
        'ਖ' => Some(7),
        'ਗ' => Some(8),
        'ਘ' => Some(9),
        'ਙ' => Some(10),
        'ਚ' => Some(11),
        'ਛ' => Some(12),
        'ਜ' => Some(13),
        'ਝ' => Some(14),
        'ਞ' => Some(15),
        'ਟ' => Some(16),
        'ਠ' => Some(17),
        'ਡ' => Some(18),
        'ਢ' => Some(19),
        'ਣ' => Some(20),
        'ਤ' => Some(21),
        'ਥ' => Some(22),
        'ਦ' => Some(23),
        'ਧ' => Some(24),
        'ਨ' => Some(25),
        'ਪ' => Some(26),
        'ਫ' => Some(27),
        'ਬ' => Some(28),
        'ਭ' => Some(29),
        'ਮ' => Some(30),
        'ਯ' => Some(31),
        'ਰ' => Some(32),
        'ਲ' => Some(33),
        'ਵ' => Some(34),
        'ੜ' => Some(35),

        // Nukta consonants (precomposed forms)
        '\u{0A36}' => Some(36), // ਸ਼
        '\u{0A59}' => Some(37), // ਖ਼
        '\u{0A5A}' => Some(38), // ਗ਼
        '\u{0A5B}' => Some(39), // ਜ਼
        '\u{0A5E}' => Some(40), // ਫ਼
        '\u{0A33}' => Some(41), // ਲ਼

        // Dependent vowel signs (laga matra)
        '\u{0A3E}' => Some(100), // kanna
        '\u{0A3F}' => Some(101), // sihari
        '\u{0A40}' => Some(102), // bihari
        '\u{0A41}' => Some(103), // aunkar
        '\u{0A42}' => Some(104), // dulainkar
        '\u{0A47}' => Some(105), // lavan
        '\u{0A48}' => Some(106), // dulavan
        '\u{0A4B}' => Some(107), // hora
        '\u{0A4C}' => Some(108), // kanaura

        // Other diacritics
        '\u{0A3C}' => Some(200), // nukta
        '\u{0A70}' => Some(201), // tippi
        '\u{0A71}' => Some(202), // addak
        '\u{0A51}' => Some(203), // udaat

        // Digits
        '੦' => Some(300),
        '੧' => Some(301),
        '੨' => Some(302),
        '੩' => Some(303),
        '੪' => Some(304),
        '੫' => Some(305),
        '੬' => Some(306),
        '੭' => Some(307),
        '੮' => Some(308),
        '੯' => Some(309),

        // Punctuation
        '।' => Some(400), // danda
        '॥' => Some(401), // double danda

        _ => None,
    }
}

/// Rank for collation: defined rank if the character is in the alphabet,
/// otherwise the unmapped sentinel. Total over all of Unicode.
pub fn rank_or_unmapped(c: char) -> Rank {
    rank(c).unwrap_or(UNMAPPED_RANK)
}

/// Whether a character's code point lies in the Gurmukhi Unicode block
/// (U+0A00 through U+0A7F).
pub fn is_gurmukhi_block(c: char) -> bool {
    ('\u{0A00}'..='\u{0A7F}').contains(&c)
}
