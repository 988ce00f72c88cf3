//! Model identifiers and per-model pricing.

use std::borrow::Cow;
use std::fmt;

/// Price of a model, linear in the total number of tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub dollars_per_1k_tokens: f64,
}

impl Pricing {
    /// Cost in dollars for `total_tokens`. Non-positive counts cost nothing.
    pub fn cost(&self, total_tokens: i64) -> f64 {
        if total_tokens <= 0 {
            return 0.0;
        }
        total_tokens as f64 * self.dollars_per_1k_tokens / 1000.0
    }
}

/// Known models and their prices. New models are added here.
const PRICING_TABLE: &[(&str, Pricing)] = &[
    // $0.002 / 1K tokens
    (
        "gpt-3.5-turbo",
        Pricing {
            dollars_per_1k_tokens: 0.002,
        },
    ),
    (
        "gpt-3.5-turbo-0301",
        Pricing {
            dollars_per_1k_tokens: 0.002,
        },
    ),
];

/// Identifier of a remote chat model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model(Cow<'static, str>);

impl Model {
    /// The most capable GPT-3.5 model, optimized for chat.
    pub const GPT_3_5_TURBO: Model = Model(Cow::Borrowed("gpt-3.5-turbo"));

    pub fn new(id: impl Into<String>) -> Self {
        Model(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pricing rule for this model, if it is in the pricing table.
    pub fn pricing(&self) -> Option<Pricing> {
        PRICING_TABLE
            .iter()
            .find(|(id, _)| *id == self.as_str())
            .map(|(_, pricing)| *pricing)
    }

    /// Cost in dollars of a request that used `total_tokens`.
    ///
    /// Models without a pricing rule report zero cost.
    pub fn cost(&self, total_tokens: i64) -> f64 {
        self.pricing()
            .map(|p| p.cost(total_tokens))
            .unwrap_or(0.0)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
    }

    #[test]
    fn test_cost_reference_pricing() {
        assert_close(Model::GPT_3_5_TURBO.cost(1000), 0.002);
        assert_close(Model::GPT_3_5_TURBO.cost(100), 0.0002);
        assert_close(Model::GPT_3_5_TURBO.cost(1_000_000), 2.0);
    }

    #[test]
    fn test_cost_is_linear() {
        let one = Model::GPT_3_5_TURBO.cost(1000);
        let two = Model::GPT_3_5_TURBO.cost(2000);
        assert_close(two, 2.0 * one);
    }

    #[test]
    fn test_cost_non_positive_tokens_is_zero() {
        assert_eq!(Model::GPT_3_5_TURBO.cost(0), 0.0);
        assert_eq!(Model::GPT_3_5_TURBO.cost(-1), 0.0);
        assert_eq!(Model::GPT_3_5_TURBO.cost(i64::MIN), 0.0);
    }

    #[test]
    fn test_unknown_model_costs_nothing() {
        let model = Model::new("some-future-model");
        assert!(model.pricing().is_none());
        assert_eq!(model.cost(5000), 0.0);
    }

    #[test]
    fn test_owned_and_const_identifiers_compare_equal() {
        assert_eq!(Model::new("gpt-3.5-turbo"), Model::GPT_3_5_TURBO);
        assert_eq!(Model::GPT_3_5_TURBO.to_string(), "gpt-3.5-turbo");
    }
}
