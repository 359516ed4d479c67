//! Transliteration driver.
//!
//! Iterates the input character by character, fetches candidate readings for
//! Chinese characters, resolves polyphones against the phrase dictionary, and
//! assembles the output. Anything without a reading passes through unchanged.

mod disambig;


use tracing::error;

use crate::dict::{default_dict, PhraseDict};
use crate::lookup::{CandidateSource, HanziReadings, LookupError, OutputFormat};
use crate::unicode::is_chinese;

use disambig::choose_reading;

/// Full pinyin of `text` using the embedded dictionary and default format.
///
/// All or nothing: a lookup failure is logged and yields an empty string
/// rather than partial output.
pub fn full_form(text: &str) -> String {
    full_form_with(default_dict(), &HanziReadings, &OutputFormat::default(), text)
        .unwrap_or_else(|e| {
            error!("pinyin conversion failed: {e}");
            String::new()
        })
}

/// First letter of each character's pinyin, same contract as [`full_form`].
pub fn initials_form(text: &str) -> String {
    initials_form_with(default_dict(), &HanziReadings, &OutputFormat::default(), text)
        .unwrap_or_else(|e| {
            error!("pinyin initials conversion failed: {e}");
            String::new()
        })
}

/// First letter of a single character's first-ranked reading.
///
/// Without surrounding context a polyphone cannot be disambiguated; callers
/// that have the containing word should use [`initials_form`] on it instead.
/// `None` for characters with no readings.
pub fn initial_of(c: char) -> Option<char> {
    let cands = HanziReadings.candidates(c, &OutputFormat::default()).ok()?;
    cands.first()?.chars().next()
}

/// Full pinyin with an explicit dictionary, candidate source, and format.
pub fn full_form_with(
    dict: &PhraseDict,
    source: &dyn CandidateSource,
    format: &OutputFormat,
    text: &str,
) -> Result<String, LookupError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !is_chinese(c) {
            out.push(c);
            continue;
        }
        let candidates = source.candidates(c, format)?;
        if candidates.is_empty() {
            out.push(c);
        } else {
            out.push_str(&choose_reading(&chars, i, &candidates, dict));
        }
    }
    Ok(out)
}

/// Pinyin initials with an explicit dictionary, candidate source, and format.
///
/// Unlike [`full_form_with`] this asks the source about every character and
/// falls back on "no candidates" rather than pre-classifying, so the source
/// decides what is transliterable.
pub fn initials_form_with(
    dict: &PhraseDict,
    source: &dyn CandidateSource,
    format: &OutputFormat,
    text: &str,
) -> Result<String, LookupError> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    for (i, &c) in chars.iter().enumerate() {
        let candidates = source.candidates(c, format)?;
        if candidates.is_empty() {
            out.push(c);
            continue;
        }
        let chosen = choose_reading(&chars, i, &candidates, dict);
        if let Some(letter) = chosen.chars().next() {
            out.push(letter);
        }
    }
    Ok(out)
}
