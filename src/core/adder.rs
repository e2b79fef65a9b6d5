use crate::config::Strategy;
use crate::core::canonical::{ConvergentCanonicalizer, SinglePassCanonicalizer};
use crate::core::expand::{expand, order, parse_expanded};
use crate::core::Canonicalize;
use crate::domain::model::{numeric_value, render, Addition, Symbol};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, RomanError};
use serde_json::Value;

/// Adds Roman numerals by rewriting symbols, never by converting to integers.
pub struct RomanAdder {
    canonicalizer: Box<dyn Canonicalize>,
    verify: bool,
}

impl RomanAdder {
    pub fn new(strategy: Strategy) -> Self {
        let canonicalizer: Box<dyn Canonicalize> = match strategy {
            Strategy::SinglePass => Box::new(SinglePassCanonicalizer),
            Strategy::Convergent => Box::new(ConvergentCanonicalizer),
        };
        Self {
            canonicalizer,
            verify: false,
        }
    }

    pub fn with_canonicalizer<C: Canonicalize + 'static>(canonicalizer: C) -> Self {
        Self {
            canonicalizer: Box::new(canonicalizer),
            verify: false,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.strategy()).with_verification(config.verify())
    }

    /// Log a warning whenever a sum's value disagrees with its operands.
    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn strategy_name(&self) -> &'static str {
        self.canonicalizer.name()
    }

    pub fn add(&self, augend: &str, addend: &str) -> Result<String> {
        let left = parse_expanded(augend, &expand(augend))?;
        let right = parse_expanded(addend, &expand(addend))?;
        tracing::debug!(
            augend,
            addend,
            expanded_len = left.len() + right.len(),
            "expanded operands"
        );

        let merged: Vec<Symbol> = left.iter().chain(right.iter()).copied().collect();
        let ordered = order(merged);
        tracing::debug!(ordered = %render(&ordered), "ordered sum");

        let canonical = self.canonicalizer.canonicalize(ordered);
        let sum = render(&canonical);
        tracing::debug!(sum = %sum, strategy = self.strategy_name(), "canonicalized");

        if self.verify {
            self.check(&left, &right, &canonical);
        }

        Ok(sum)
    }

    /// Add two loosely typed values, such as the elements of a JSON batch.
    ///
    /// Anything other than a JSON string is rejected as invalid input.
    pub fn add_values(&self, augend: &Value, addend: &Value) -> Result<String> {
        let augend = as_numeral(augend)?;
        let addend = as_numeral(addend)?;
        self.add(augend, addend)
    }

    pub fn addition(&self, augend: &str, addend: &str) -> Result<Addition> {
        let sum = self.add(augend, addend)?;
        Ok(Addition {
            augend: augend.to_string(),
            addend: addend.to_string(),
            sum,
        })
    }

    fn check(&self, left: &[Symbol], right: &[Symbol], canonical: &[Symbol]) {
        // expanded operands are purely additive, so their value is the plain symbol sum
        let expected: u32 = left.iter().chain(right.iter()).map(|s| s.value()).sum();
        let actual = numeric_value(canonical);
        if expected != actual {
            tracing::warn!(
                expected,
                actual,
                sum = %render(canonical),
                strategy = self.strategy_name(),
                "sum does not match the value of its operands"
            );
        }
    }
}

impl Default for RomanAdder {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

fn as_numeral(value: &Value) -> Result<&str> {
    value
        .as_str()
        .ok_or_else(|| RomanError::invalid_input(value.to_string(), "expected a string numeral"))
}

/// Add two numerals with the default (convergent) strategy.
pub fn add(augend: &str, addend: &str) -> Result<String> {
    RomanAdder::default().add(augend, addend)
}
