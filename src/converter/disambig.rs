use tracing::debug;

use crate::dict::PhraseDict;

/// Pick the reading of `chars[i]` that is consistent with its surroundings.
///
/// A single candidate, or a first pair of textually identical candidates, is
/// treated as unambiguous and returned without consulting the dictionary.
/// Otherwise candidates are scanned in source priority order; for each one
/// with a phrase list, five windows around `i` are tested, forward spans
/// before backward spans since compound words usually continue after the
/// character:
///
/// 1. `[i, i+3)`  character plus next two
/// 2. `[i, i+2)`  character plus next one
/// 3. `[i-2, i+1)` previous two plus character
/// 4. `[i-1, i+1)` previous one plus character
/// 5. `[i-1, i+2)` previous one, character, next one
///
/// The first window found in a candidate's phrase list decides immediately. A
/// bare-character entry in the phrase list only records that candidate as the
/// default, used after the scan if no window matched anywhere; failing that,
/// the first candidate wins.
pub(crate) fn choose_reading(
    chars: &[char],
    i: usize,
    candidates: &[String],
    dict: &PhraseDict,
) -> String {
    let Some(first) = candidates.first() else {
        return String::new();
    };
    if candidates.len() == 1 || candidates[0] == candidates[1] {
        return first.clone();
    }

    let len = chars.len();
    let mut default_reading = None;
    for py in candidates {
        let words = dict.lookup(py);
        if words.is_empty() {
            continue;
        }
        let found = |start: usize, end: usize| {
            let s: String = chars[start..end].iter().collect();
            words.iter().any(|w| *w == s)
        };

        if i + 3 <= len && found(i, i + 3) {
            return py.clone();
        }
        if i + 2 <= len && found(i, i + 2) {
            return py.clone();
        }
        if i >= 2 && i + 1 <= len && found(i - 2, i + 1) {
            return py.clone();
        }
        if i >= 1 && i + 1 <= len && found(i - 1, i + 1) {
            return py.clone();
        }
        if i >= 1 && i + 2 <= len && found(i - 1, i + 2) {
            return py.clone();
        }
        // Later candidates overwrite an earlier default on purpose: the scan
        // continues looking for a window match, and the last bare-character
        // entry seen wins among defaults.
        if found(i, i + 1) {
            default_reading = Some(py);
        }
    }

    if let Some(py) = default_reading {
        debug!(reading = %py, "no window match, using default reading");
        return py.clone();
    }
    first.clone()
}
