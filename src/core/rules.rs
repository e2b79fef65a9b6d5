use crate::domain::model::Symbol;
use crate::domain::model::Symbol::{I, V, X};

/// A literal rewrite over symbol sequences.
///
/// Applying a rule replaces every left-to-right, non-overlapping occurrence of
/// `pattern` with `replacement`. Text produced by a replacement is never
/// rescanned within the same application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteRule {
    pub pattern: &'static [Symbol],
    pub replacement: &'static [Symbol],
}

impl RewriteRule {
    pub const fn new(pattern: &'static [Symbol], replacement: &'static [Symbol]) -> Self {
        Self {
            pattern,
            replacement,
        }
    }

    pub fn apply(&self, input: &[Symbol]) -> Vec<Symbol> {
        let width = self.pattern.len();
        if width == 0 || input.len() < width {
            return input.to_vec();
        }

        let mut output = Vec::with_capacity(input.len());
        let mut i = 0;
        while i < input.len() {
            if input[i..].starts_with(self.pattern) {
                output.extend_from_slice(self.replacement);
                i += width;
            } else {
                output.push(input[i]);
                i += 1;
            }
        }
        output
    }
}

/// Apply each rule in turn, each over the output of the previous one.
pub fn apply_chain(rules: &[RewriteRule], input: Vec<Symbol>) -> Vec<Symbol> {
    rules
        .iter()
        .fold(input, |symbols, rule| rule.apply(&symbols))
}

/// Single-pass collapse chain, in priority order.
pub const SINGLE_PASS_RULES: [RewriteRule; 6] = [
    RewriteRule::new(&[I, I, I, I, I, I, I, I, I, I], &[X]),
    RewriteRule::new(&[I, I, I, I, I, I, I, I, I], &[I, X]),
    RewriteRule::new(&[I, I, I, I, I], &[V]),
    RewriteRule::new(&[V, V], &[X]),
    RewriteRule::new(&[I, I, I, I], &[I, V]),
    RewriteRule::new(&[V, I, V], &[I, X]),
];

/// Exact-match fixups applied after [`SINGLE_PASS_RULES`].
pub const SINGLE_PASS_CORRECTIONS: [RewriteRule; 2] = [
    RewriteRule::new(&[V, X], &[X, V]),
    RewriteRule::new(&[V, I, X], &[X, I, V]),
];

/// Additive collapse: carries I into V and V into X without subtractive forms.
pub const ADDITIVE_RULES: [RewriteRule; 2] = [
    RewriteRule::new(&[I, I, I, I, I], &[V]),
    RewriteRule::new(&[V, V], &[X]),
];

/// Subtractive rewrites for a fully carried additive tail.
pub const SUBTRACTIVE_RULES: [RewriteRule; 2] = [
    RewriteRule::new(&[V, I, I, I, I], &[I, X]),
    RewriteRule::new(&[I, I, I, I], &[I, V]),
];
