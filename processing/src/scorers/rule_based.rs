use crate::model::ScorerResult;
use crate::scorers::Scorer;

type Rule<T> = Box<dyn Fn(&T) -> Option<ScorerResult> + Send + Sync>;

/// Ordered list of independent rules. A rule returns `None` when it does
/// not apply to the model.
pub struct RuleBasedScorer<T> {
    rules: Vec<Rule<T>>,
}

impl<T> RuleBasedScorer<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: impl Fn(&T) -> Option<ScorerResult> + Send + Sync + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Sum of every triggered rule.
    pub fn total(&self, model: &T) -> i64 {
        self.rules
            .iter()
            .filter_map(|rule| rule(model))
            .map(|result| result.score)
            .sum()
    }
}

impl<T> Default for RuleBasedScorer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scorer<T> for RuleBasedScorer<T> {
    fn score(&self, model: &T) -> Vec<ScorerResult> {
        self.rules.iter().filter_map(|rule| rule(model)).collect()
    }
}
