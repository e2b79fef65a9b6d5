use crate::core::expand::order;
use crate::core::rules::{
    apply_chain, ADDITIVE_RULES, SINGLE_PASS_CORRECTIONS, SINGLE_PASS_RULES, SUBTRACTIVE_RULES,
};
use crate::domain::model::{render, Symbol};
use crate::domain::ports::Canonicalize;

/// Runs the collapse chain once, followed by the whole-result corrections.
///
/// Matches the numeric sum for small totals but can leave a V in front of an
/// IX or X (e.g. V + XIX gives "XVIX"). Use [`ConvergentCanonicalizer`] when
/// the result must always be minimal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePassCanonicalizer;

impl Canonicalize for SinglePassCanonicalizer {
    fn canonicalize(&self, ordered: Vec<Symbol>) -> Vec<Symbol> {
        let collapsed = apply_chain(&SINGLE_PASS_RULES, ordered);
        SINGLE_PASS_CORRECTIONS
            .iter()
            .fold(collapsed, |symbols, fix| {
                if symbols.as_slice() == fix.pattern {
                    fix.replacement.to_vec()
                } else {
                    symbols
                }
            })
    }

    fn name(&self) -> &'static str {
        "single-pass"
    }
}

/// Carries I into V and V into X until nothing changes, then introduces the
/// subtractive pairs on the remaining tail.
///
/// Terminates because every additive rewrite shortens the sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvergentCanonicalizer;

impl ConvergentCanonicalizer {
    fn carry(&self, mut symbols: Vec<Symbol>) -> Vec<Symbol> {
        let mut passes = 0usize;
        loop {
            let next = order(apply_chain(&ADDITIVE_RULES, symbols.clone()));
            passes += 1;
            if next == symbols {
                tracing::trace!(passes, "additive form settled");
                return next;
            }
            symbols = next;
        }
    }
}

impl Canonicalize for ConvergentCanonicalizer {
    fn canonicalize(&self, ordered: Vec<Symbol>) -> Vec<Symbol> {
        let additive = self.carry(ordered);
        tracing::trace!(additive = %render(&additive), "carried");
        apply_chain(&SUBTRACTIVE_RULES, additive)
    }

    fn name(&self) -> &'static str {
        "convergent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Symbol::{I, V, X};

    fn run<C: Canonicalize>(c: &C, symbols: &[Symbol]) -> String {
        render(&c.canonicalize(symbols.to_vec()))
    }

    #[test]
    fn test_single_pass_chain() {
        let c = SinglePassCanonicalizer;
        assert_eq!(run(&c, &[I, I, I, I]), "IV");
        assert_eq!(run(&c, &[V, I, I, I, I]), "IX");
        assert_eq!(run(&c, &[X, I, I, I, I]), "XIV");
        assert_eq!(run(&c, &[I; 18]), "XVIII");
    }

    #[test]
    fn test_single_pass_exact_corrections() {
        let c = SinglePassCanonicalizer;
        // V + nine I: the nine collapse to IX first, leaving "VIX"
        assert_eq!(run(&c, &[V, I, I, I, I, I, I, I, I, I]), "XIV");
        // V + ten I
        assert_eq!(run(&c, &[V, I, I, I, I, I, I, I, I, I, I]), "XV");
    }

    #[test]
    fn test_single_pass_misses_prefixed_corrections() {
        // the fixups only fire on an exact match, so a leading X defeats them
        let mut input = vec![X, V];
        input.extend(vec![I; 9]);
        assert_eq!(run(&SinglePassCanonicalizer, &input), "XVIX");
        assert_eq!(run(&ConvergentCanonicalizer, &input), "XXIV");
    }

    #[test]
    fn test_convergent_carries_across_passes() {
        let c = ConvergentCanonicalizer;
        assert_eq!(run(&c, &[V, I, I, I, I, I]), "X");
        assert_eq!(run(&c, &[V, V, V]), "XV");
        assert_eq!(run(&c, &[I; 39]), "XXXIX");
        assert_eq!(run(&c, &[X, V, I, I, I, I]), "XIX");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(run(&ConvergentCanonicalizer, &[]), "");
        assert_eq!(run(&SinglePassCanonicalizer, &[]), "");
    }
}
