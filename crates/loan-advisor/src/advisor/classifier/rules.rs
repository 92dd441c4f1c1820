use super::super::domain::{LoanNeedInput, LoanPurpose, LoanRecommendation, ReasonKey};

/// Home-purchase amounts above this route to a full home loan; anything at or
/// below it is treated as an improvement-scale need.
pub const HOME_LOAN_THRESHOLD: u64 = 1_000_000;

/// Dividing line between small and standard personal-scale amounts, shared by
/// the medical branch and the fallback branch.
pub const SMALL_AMOUNT_THRESHOLD: u64 = 50_000;

/// Ordered, first-match-wins decision table over the borrower's purpose, with
/// secondary branching on amount and collateral. Total over every input.
pub(crate) fn classify(input: &LoanNeedInput) -> LoanRecommendation {
    let LoanNeedInput {
        purpose,
        amount,
        has_collateral,
    } = *input;

    match purpose {
        LoanPurpose::Education => {
            LoanRecommendation::new("Education loan", ReasonKey::EducationFees)
        }
        LoanPurpose::HomePurchase => {
            if amount > HOME_LOAN_THRESHOLD {
                LoanRecommendation::new("Home loan", ReasonKey::BuyHouseHighAmount)
            } else {
                LoanRecommendation::new("Small home improvement loan", ReasonKey::SmallHome)
            }
        }
        LoanPurpose::HomeRent => {
            LoanRecommendation::new("Personal loan (Rent deposit)", ReasonKey::RentDeposit)
        }
        LoanPurpose::Business => {
            if has_collateral {
                LoanRecommendation::new(
                    "Secured business/MSME loan",
                    ReasonKey::BusinessWithCollateral,
                )
            } else {
                LoanRecommendation::new(
                    "Unsecured business loan",
                    ReasonKey::BusinessWithoutCollateral,
                )
            }
        }
        LoanPurpose::Vehicle => {
            LoanRecommendation::new("Vehicle / Two-wheeler loan", ReasonKey::VehiclePurchase)
        }
        LoanPurpose::Medical => {
            if amount <= SMALL_AMOUNT_THRESHOLD {
                LoanRecommendation::new("Emergency personal loan", ReasonKey::MedicalSmall)
            } else {
                LoanRecommendation::new("Medical / Personal loan", ReasonKey::MedicalLarge)
            }
        }
        LoanPurpose::DebtConsolidation => {
            LoanRecommendation::new("Debt-consolidation loan", ReasonKey::DebtConsolidation)
        }
        LoanPurpose::Other => {
            if amount < SMALL_AMOUNT_THRESHOLD {
                LoanRecommendation::new("Small personal loan", ReasonKey::SmallPersonal)
            } else {
                LoanRecommendation::new("Standard personal loan", ReasonKey::GeneralPersonal)
            }
        }
    }
}
