pub mod parsing;
pub mod receipt_rules;
pub mod rule_based;

pub use receipt_rules::get_receipt_scorer;
pub use rule_based::*;

use crate::model::ScorerResult;

/// Turns a model into the list of rules it triggered.
///
/// Scoring is pure: no I/O, no shared mutable state, so one scorer instance
/// serves every request concurrently.
pub trait Scorer<T>: Send + Sync {
    fn score(&self, model: &T) -> Vec<ScorerResult>;
}
