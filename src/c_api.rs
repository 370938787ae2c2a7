// src/c_api.rs
//
// C ABI surface so the host CMS process can collate without round-tripping
// through this crate's Rust API. All entry points are null-safe and fenced
// with catch_unwind; strings cross the boundary as UTF-8 C strings.

use crate::core::collate::{contains_gurmukhi, first_significant_letter, normalize, sort_key};
use libc::c_char;
use std::cmp::Ordering;
use std::ffi::{CStr, CString};
use std::panic::catch_unwind;
use std::ptr;

unsafe fn str_from_ptr<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        return "";
    }
    CStr::from_ptr(ptr).to_str().unwrap_or("")
}

fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Compares two strings under Gurmukhi dictionary order.
/// Returns -1, 0 or 1; null pointers compare as empty strings.
#[no_mangle]
pub extern "C" fn gurmukhi_compare(a: *const c_char, b: *const c_char) -> libc::c_int {
    let (a, b) = unsafe { (str_from_ptr(a), str_from_ptr(b)) };
    let result = catch_unwind(|| match sort_key(a).cmp(&sort_key(b)) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    });
    result.unwrap_or_else(|_| {
        eprintln!("[collate] panic in gurmukhi_compare");
        0
    })
}

/// Whether the text contains any character from the Gurmukhi Unicode block.
/// Returns 1 or 0.
#[no_mangle]
pub extern "C" fn gurmukhi_contains(text: *const c_char) -> libc::c_int {
    let text = unsafe { str_from_ptr(text) };
    let result = catch_unwind(|| contains_gurmukhi(text) as libc::c_int);
    result.unwrap_or(0)
}

/// First alphabet letter of the text, as a newly allocated string, or an
/// empty string when there is none. Free with `gurmukhi_free_string`.
#[no_mangle]
pub extern "C" fn gurmukhi_first_letter(text: *const c_char) -> *mut c_char {
    let text = unsafe { str_from_ptr(text) };
    let result = catch_unwind(|| {
        first_significant_letter(text)
            .map(String::from)
            .unwrap_or_default()
    });
    match result {
        Ok(letter) => into_c_string(letter),
        Err(_) => {
            eprintln!("[collate] panic in gurmukhi_first_letter");
            ptr::null_mut()
        }
    }
}

/// Normalized copy of the text. Free with `gurmukhi_free_string`.
#[no_mangle]
pub extern "C" fn gurmukhi_normalize(text: *const c_char) -> *mut c_char {
    let text = unsafe { str_from_ptr(text) };
    match catch_unwind(|| normalize(text)) {
        Ok(normalized) => into_c_string(normalized),
        Err(_) => {
            eprintln!("[collate] panic in gurmukhi_normalize");
            ptr::null_mut()
        }
    }
}

/// Releases a string handed out by this API.
#[no_mangle]
pub extern "C" fn gurmukhi_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    #[test]
    fn compare_follows_dictionary_order() {
        let a = c("ਅੱਖਰ");
        let b = c("ਕਲਮ");
        assert_eq!(gurmukhi_compare(a.as_ptr(), b.as_ptr()), -1);
        assert_eq!(gurmukhi_compare(b.as_ptr(), a.as_ptr()), 1);
        assert_eq!(gurmukhi_compare(a.as_ptr(), a.as_ptr()), 0);
    }

    #[test]
    fn null_pointers_act_as_empty_strings() {
        let word = c("ਕਲਮ");
        // empty sorts last, so a real word compares less than null
        assert_eq!(gurmukhi_compare(word.as_ptr(), std::ptr::null()), -1);
        assert_eq!(gurmukhi_compare(std::ptr::null(), std::ptr::null()), 0);
        assert_eq!(gurmukhi_contains(std::ptr::null()), 0);
    }

    #[test]
    fn first_letter_round_trips_through_the_boundary() {
        let text = c("  ਪੰਜਾਬੀ");
        let out = gurmukhi_first_letter(text.as_ptr());
        assert!(!out.is_null());
        let letter = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
        gurmukhi_free_string(out);
        assert_eq!(letter, "ਪ");

        let latin = c("abc");
        let out = gurmukhi_first_letter(latin.as_ptr());
        let letter = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
        gurmukhi_free_string(out);
        assert_eq!(letter, "");
    }

    #[test]
    fn normalize_collapses_across_the_boundary() {
        let text = c("  ਦੋ   ਸ਼ਬਦ ");
        let out = gurmukhi_normalize(text.as_ptr());
        let normalized = unsafe { CStr::from_ptr(out) }.to_str().unwrap().to_string();
        gurmukhi_free_string(out);
        assert_eq!(normalized, "ਦੋ ਸ਼ਬਦ");
    }
}
