use crate::config::Strategy;
use crate::domain::model::Symbol;

/// Collapses an ordered, additive symbol sequence into Roman notation.
pub trait Canonicalize: Send + Sync {
    fn canonicalize(&self, ordered: Vec<Symbol>) -> Vec<Symbol>;

    fn name(&self) -> &'static str;
}

pub trait ConfigProvider: Send + Sync {
    fn strategy(&self) -> Strategy;
    fn verify(&self) -> bool;
}
