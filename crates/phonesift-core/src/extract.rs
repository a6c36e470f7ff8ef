use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Minimum length for a cleaned candidate; a leading `+` counts.
pub const MIN_NUMBER_LEN: usize = 10;

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:\+?[\s-]*(?:\d{1,3})?[\s-]*)?(?:\(\s*\d{3}\s*\)|\d{3})[\s-]*\d{3}[\s-]*\d{4}|\(\d{3}\)\s*\d{3}[\s-]*\d{4}|\d{3}[\s.-]\d{3}[\s.-]\d{4}|\d{10}",
    )
    .unwrap()
});

// Candidates keep only their digits plus a leading `+`, drop out below
// MIN_NUMBER_LEN, and deduplicate by exact string in first-seen order.
pub fn extract_numbers(text: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut numbers = Vec::new();

    for found in PHONE_RE.find_iter(text) {
        let candidate = clean_candidate(found.as_str());
        if candidate.len() < MIN_NUMBER_LEN {
            continue;
        }
        if seen.insert(candidate.clone()) {
            numbers.push(candidate);
        }
    }

    numbers
}

fn clean_candidate(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    if raw.starts_with('+') {
        out.push('+');
    }
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            out.push(ch);
        }
    }
    out
}
