//! Per-character candidate reading lookup.
//!
//! [`CandidateSource`] abstracts the external single-character pinyin source
//! so the disambiguator can be tested against a stub. The production
//! implementation, [`HanziReadings`], wraps the `pinyin` crate's heteronym
//! data and applies the requested output formatting.

use pinyin::ToPinyinMulti;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneStyle {
    /// No tone information, e.g. `zhong`.
    None,
    /// Combining tone marks, e.g. `zhōng`.
    Marks,
}

/// Output formatting applied to every candidate reading.
///
/// The default is the canonical form the phrase dictionary is keyed by:
/// lowercase, toneless, `v` in place of `ü`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub case: Case,
    pub tone: ToneStyle,
    /// Substitute `v` for `ü` (e.g. `lv` instead of `lü`).
    pub v_for_u_umlaut: bool,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self {
            case: Case::Lower,
            tone: ToneStyle::None,
            v_for_u_umlaut: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("unsupported format combination: tone marks together with v-for-\u{fc}")]
    UnsupportedFormat,
}

/// Source of candidate readings for a single character.
///
/// Returns candidates in the source's own priority order; an empty vector
/// means the character has no readings and should pass through unchanged.
pub trait CandidateSource {
    fn candidates(&self, c: char, format: &OutputFormat) -> Result<Vec<String>, LookupError>;
}

/// Candidate source backed by the `pinyin` crate's heteronym tables.
pub struct HanziReadings;

impl CandidateSource for HanziReadings {
    fn candidates(&self, c: char, format: &OutputFormat) -> Result<Vec<String>, LookupError> {
        // Tone marks sit on the ü itself (ǖǘǚǜ), so the v substitution cannot
        // be combined with them.
        if format.tone == ToneStyle::Marks && format.v_for_u_umlaut {
            return Err(LookupError::UnsupportedFormat);
        }
        let Some(multi) = c.to_pinyin_multi() else {
            return Ok(Vec::new());
        };
        let mut out = Vec::with_capacity(multi.count());
        for py in multi {
            let base = match format.tone {
                ToneStyle::None => py.plain(),
                ToneStyle::Marks => py.with_tone(),
            };
            let mut reading = if format.v_for_u_umlaut {
                base.replace('ü', "v")
            } else {
                base.to_string()
            };
            if format.case == Case::Upper {
                reading = reading.to_uppercase();
            }
            out.push(reading);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_is_canonical() {
        let cands = HanziReadings.candidates('中', &OutputFormat::default()).unwrap();
        assert!(!cands.is_empty());
        assert_eq!(cands[0], "zhong");
        assert!(cands.iter().all(|r| r.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn heteronyms_are_listed() {
        let cands = HanziReadings.candidates('长', &OutputFormat::default()).unwrap();
        assert!(cands.contains(&"chang".to_string()));
        assert!(cands.contains(&"zhang".to_string()));
    }

    #[test]
    fn non_chinese_has_no_candidates() {
        let fmt = OutputFormat::default();
        assert!(HanziReadings.candidates('a', &fmt).unwrap().is_empty());
        assert!(HanziReadings.candidates('1', &fmt).unwrap().is_empty());
        assert!(HanziReadings.candidates('あ', &fmt).unwrap().is_empty());
    }

    #[test]
    fn v_substitution() {
        let cands = HanziReadings.candidates('绿', &OutputFormat::default()).unwrap();
        assert!(cands.contains(&"lv".to_string()));

        let no_sub = OutputFormat {
            v_for_u_umlaut: false,
            ..OutputFormat::default()
        };
        let cands = HanziReadings.candidates('绿', &no_sub).unwrap();
        assert!(cands.contains(&"lü".to_string()));
    }

    #[test]
    fn uppercase_output() {
        let fmt = OutputFormat {
            case: Case::Upper,
            ..OutputFormat::default()
        };
        let cands = HanziReadings.candidates('中', &fmt).unwrap();
        assert_eq!(cands[0], "ZHONG");
    }

    #[test]
    fn tone_marks() {
        let fmt = OutputFormat {
            tone: ToneStyle::Marks,
            v_for_u_umlaut: false,
            ..OutputFormat::default()
        };
        let cands = HanziReadings.candidates('中', &fmt).unwrap();
        assert_eq!(cands[0], "zhōng");
    }

    #[test]
    fn tone_marks_with_v_is_rejected() {
        let fmt = OutputFormat {
            tone: ToneStyle::Marks,
            ..OutputFormat::default()
        };
        let err = HanziReadings.candidates('中', &fmt).unwrap_err();
        assert!(matches!(err, LookupError::UnsupportedFormat));
    }
}
