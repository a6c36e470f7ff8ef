use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_GAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d)\s+(\d)").unwrap());

// Invisible characters become spaces, dash variants fold to a plain
// hyphen, whitespace between two digits is removed. The digit-gap pass is
// a single global substitution, not reapplied to newly adjacent digits: a
// run like `5  5  5` keeps its second gap.
pub fn normalize_description(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\u{00A0}' | '\u{200B}'..='\u{200D}' | '\u{FEFF}' => cleaned.push(' '),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => cleaned.push('-'),
            _ => cleaned.push(ch),
        }
    }

    DIGIT_GAP_RE.replace_all(&cleaned, "${1}${2}").into_owned()
}
