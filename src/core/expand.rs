use crate::domain::model::{Symbol, SYMBOL_ORDER};
use crate::utils::error::{Result, RomanError};

const NINE: &str = "IIIIIIIII";
const FOUR: &str = "IIII";

/// Rewrite subtractive pairs into additive form.
///
/// "IX" is replaced before "IV"; both are plain left-to-right substring
/// replacements, so pairs created by the first replacement are left alone.
/// Characters outside the alphabet pass through untouched and are reported
/// by [`parse_expanded`].
pub fn expand(numeral: &str) -> String {
    numeral.replace("IX", NINE).replace("IV", FOUR)
}

/// Turn an expanded numeral into symbols, rejecting anything outside I, V, X.
///
/// `original` is the caller's input and is only used for the error message.
pub fn parse_expanded(original: &str, expanded: &str) -> Result<Vec<Symbol>> {
    expanded
        .chars()
        .map(|c| {
            Symbol::try_from(c).map_err(|bad| {
                RomanError::invalid_input(
                    original,
                    format!(
                        "symbol {:?} is outside the supported alphabet {}",
                        bad,
                        SYMBOL_ORDER.iter().map(|s| s.as_char()).collect::<String>()
                    ),
                )
            })
        })
        .collect()
}

/// Sort into non-increasing value order (X, then V, then I).
pub fn order(mut symbols: Vec<Symbol>) -> Vec<Symbol> {
    symbols.sort_unstable_by(|a, b| b.cmp(a));
    symbols
}
