mod rules;

use super::domain::{LoanNeedInput, LoanRecommendation};

pub use rules::{HOME_LOAN_THRESHOLD, SMALL_AMOUNT_THRESHOLD};

/// Maps a loan need onto the recommended product.
///
/// Total function: every valid input yields exactly one recommendation, with
/// no side effects and no failure modes. Identical inputs always produce
/// structurally identical outputs.
pub fn recommend(input: &LoanNeedInput) -> LoanRecommendation {
    rules::classify(input)
}
