use crate::core::tables::{REDUCTIONS, SUBTRACTIVE_TO_ADDITIVE};
use crate::domain::model::Symbol;
use crate::utils::error::{Result, RomanError};
use std::cmp::Reverse;

/// Checks that every character of `token` is one of the seven roman glyphs.
///
/// An empty token passes vacuously and contributes zero value downstream;
/// callers that want to refuse empty input do so at the config boundary.
pub fn check_numeral(token: &str) -> Result<()> {
    if token.chars().all(|c| Symbol::from_char(c).is_some()) {
        Ok(())
    } else {
        Err(RomanError::InvalidNumeral {
            token: token.to_string(),
        })
    }
}

/// Replaces subtractive form with its additive equivalent: "IX" -> "VIIII".
///
/// A single pass per pattern in table order; matching is literal substring
/// matching, so relaxed runs like "IIII" pass through untouched.
pub fn expand_subtractive(numeral: &str) -> String {
    let mut numeral = numeral.to_string();
    for (subtractive, additive) in SUBTRACTIVE_TO_ADDITIVE {
        if numeral.contains(subtractive) {
            numeral = numeral.replace(subtractive, additive);
        }
    }
    numeral
}

/// Concatenates expanded tokens and orders the symbols by descending weight.
///
/// Folding and compression patterns are defined over descending-weight runs,
/// so the combined sequence must be ordered before either applies. Tokens are
/// validated before they reach the combiner.
pub fn combine<S: AsRef<str>>(expanded: &[S]) -> String {
    let mut symbols: Vec<Symbol> = expanded
        .iter()
        .flat_map(|numeral| numeral.as_ref().chars())
        .filter_map(Symbol::from_char)
        .collect();
    symbols.sort_by_key(|symbol| Reverse(symbol.weight()));
    symbols.iter().map(|symbol| symbol.as_char()).collect()
}

/// Folds runs of symbols into higher symbols: "IIIII" -> "V".
///
/// Applies the reduction table repeatedly until a full pass changes nothing.
/// Each effective pass strictly shortens the sequence, so the loop halts.
pub fn fold_runs(number: &str) -> String {
    let mut number = number.to_string();
    loop {
        let before_fold = number.clone();
        for (run, reduction) in REDUCTIONS {
            if number.contains(run) {
                number = number.replace(run, reduction);
            }
        }
        if number == before_fold {
            return number;
        }
    }
}

/// Replaces additive runs with subtractive shorthand: "IIII" -> "IV".
///
/// Walks the same table as the expander in the same largest-first order so a
/// smaller expansion cannot mask a larger one ("DCCCC" becomes "CM", not "DCD").
pub fn compress_additive(number: &str) -> String {
    let mut number = number.to_string();
    for (subtractive, additive) in SUBTRACTIVE_TO_ADDITIVE {
        if number.contains(additive) {
            number = number.replace(additive, subtractive);
        }
    }
    number
}

/// Adds roman numerals using only symbol manipulation.
///
/// Pipeline: validate every token, expand subtractive pairs, concatenate and
/// order by weight, fold runs to fixpoint, compress back to tidy form. Fails
/// with `RomanError::InvalidNumeral` on the first token containing a
/// character outside I, V, X, L, C, D, M; no partial result is produced.
pub fn add<S: AsRef<str>>(numbers: &[S]) -> Result<String> {
    for number in numbers {
        check_numeral(number.as_ref())?;
    }

    let additive_forms: Vec<String> = numbers
        .iter()
        .map(|number| expand_subtractive(number.as_ref()))
        .collect();

    let ordered_sum = combine(&additive_forms);
    let reduced_sum = fold_runs(&ordered_sum);

    Ok(compress_additive(&reduced_sum))
}
