use serde::{Deserialize, Serialize};

/// A single Roman numeral symbol from the supported alphabet.
///
/// Ordering follows numeric value, so `Symbol::X > Symbol::V > Symbol::I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Symbol {
    I,
    V,
    X,
}

/// The supported alphabet in descending value order.
pub const SYMBOL_ORDER: [Symbol; 3] = [Symbol::X, Symbol::V, Symbol::I];

impl Symbol {
    pub fn value(self) -> u32 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        SYMBOL_ORDER
            .iter()
            .copied()
            .find(|symbol| symbol.as_char() == c)
            .ok_or(c)
    }
}

pub fn render(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.as_char()).collect()
}

/// Numeric value under the standard reading: a symbol followed by a larger
/// one is subtracted, everything else is added.
///
/// Only used to check results; the adder itself never converts to integers.
pub fn numeric_value(symbols: &[Symbol]) -> u32 {
    let mut total: i64 = 0;
    for (i, symbol) in symbols.iter().enumerate() {
        let value = i64::from(symbol.value());
        match symbols.get(i + 1) {
            Some(next) if next > symbol => total -= value,
            _ => total += value,
        }
    }
    total.max(0) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addition {
    pub augend: String,
    pub addend: String,
    pub sum: String,
}
