//! Chinese-to-pinyin transliteration with polyphone disambiguation.
//!
//! Converts strings containing Chinese characters into pinyin, either as full
//! syllables (`full_form`) or first letters only (`initials_form`). Polyphonic
//! characters (characters with more than one reading) are resolved by matching
//! substring windows around the character against a phrase dictionary that maps
//! each reading to the words in which it applies.

pub mod converter;
pub mod dict;
pub mod lookup;
pub mod unicode;

pub use converter::{full_form, initial_of, initials_form};
pub use dict::{default_dict, DictError, PhraseDict};
pub use lookup::{CandidateSource, Case, HanziReadings, LookupError, OutputFormat, ToneStyle};
pub use unicode::{hex_encode, is_chinese, is_chinese_text};
