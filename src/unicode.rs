//! Character-level Unicode classification for Chinese text.

/// Check the common CJK Unified Ideographs range (U+4E00..U+9FA5).
///
/// This is deliberately narrower than the full block: extension areas and the
/// codepoints assigned after Unicode 3.0 (U+9FA6..) never appear in the phrase
/// dictionary, and the transliteration source has no readings for them.
pub fn is_chinese(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// Check if a string is non-empty and consists only of Chinese characters.
pub fn is_chinese_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_chinese)
}

/// Lowercase hex dump of a string's UTF-8 bytes, two digits per byte.
pub fn hex_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for b in s.bytes() {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
