use super::common::need;
use crate::advisor::classifier::{recommend, HOME_LOAN_THRESHOLD, SMALL_AMOUNT_THRESHOLD};
use crate::advisor::domain::{LoanPurpose, ReasonKey};

#[test]
fn education_always_routes_to_education_loan() {
    for amount in [0, SMALL_AMOUNT_THRESHOLD, HOME_LOAN_THRESHOLD * 2] {
        let recommendation = recommend(&need(LoanPurpose::Education, amount, false));
        assert_eq!(recommendation.loan_type, "Education loan");
        assert_eq!(recommendation.reason_key, ReasonKey::EducationFees);
    }
}

#[test]
fn home_purchase_threshold_is_exclusive() {
    let at_threshold = recommend(&need(LoanPurpose::HomePurchase, 1_000_000, false));
    assert_eq!(at_threshold.loan_type, "Small home improvement loan");
    assert_eq!(at_threshold.reason_key, ReasonKey::SmallHome);

    let above_threshold = recommend(&need(LoanPurpose::HomePurchase, 1_000_001, false));
    assert_eq!(above_threshold.loan_type, "Home loan");
    assert_eq!(above_threshold.reason_key, ReasonKey::BuyHouseHighAmount);
}

#[test]
fn home_rent_maps_to_rent_deposit_personal_loan() {
    let recommendation = recommend(&need(LoanPurpose::HomeRent, 30_000, false));
    assert_eq!(recommendation.loan_type, "Personal loan (Rent deposit)");
    assert_eq!(recommendation.reason_key, ReasonKey::RentDeposit);
}

#[test]
fn business_branches_on_collateral() {
    let secured = recommend(&need(LoanPurpose::Business, 10_000, true));
    assert_eq!(secured.loan_type, "Secured business/MSME loan");
    assert_eq!(secured.reason_key, ReasonKey::BusinessWithCollateral);

    let unsecured = recommend(&need(LoanPurpose::Business, 10_000, false));
    assert_eq!(unsecured.loan_type, "Unsecured business loan");
    assert_eq!(unsecured.reason_key, ReasonKey::BusinessWithoutCollateral);
}

#[test]
fn vehicle_maps_to_vehicle_loan() {
    let recommendation = recommend(&need(LoanPurpose::Vehicle, 80_000, false));
    assert_eq!(recommendation.loan_type, "Vehicle / Two-wheeler loan");
    assert_eq!(recommendation.reason_key, ReasonKey::VehiclePurchase);
}

#[test]
fn medical_threshold_is_inclusive() {
    let at_threshold = recommend(&need(LoanPurpose::Medical, 50_000, false));
    assert_eq!(at_threshold.loan_type, "Emergency personal loan");
    assert_eq!(at_threshold.reason_key, ReasonKey::MedicalSmall);

    let above_threshold = recommend(&need(LoanPurpose::Medical, 50_001, false));
    assert_eq!(above_threshold.loan_type, "Medical / Personal loan");
    assert_eq!(above_threshold.reason_key, ReasonKey::MedicalLarge);
}

#[test]
fn debt_consolidation_maps_directly() {
    let recommendation = recommend(&need(LoanPurpose::DebtConsolidation, 200_000, false));
    assert_eq!(recommendation.loan_type, "Debt-consolidation loan");
    assert_eq!(recommendation.reason_key, ReasonKey::DebtConsolidation);
}

#[test]
fn fallback_threshold_routes_exact_amount_to_general_personal() {
    let below = recommend(&need(LoanPurpose::Other, 49_999, false));
    assert_eq!(below.loan_type, "Small personal loan");
    assert_eq!(below.reason_key, ReasonKey::SmallPersonal);

    let exact = recommend(&need(LoanPurpose::Other, 50_000, false));
    assert_eq!(exact.loan_type, "Standard personal loan");
    assert_eq!(exact.reason_key, ReasonKey::GeneralPersonal);
}

#[test]
fn subtype_stays_reserved_on_every_branch() {
    for purpose in LoanPurpose::ALL {
        for amount in [0, 50_000, 50_001, 1_000_000, 1_000_001] {
            for has_collateral in [false, true] {
                let recommendation = recommend(&need(purpose, amount, has_collateral));
                assert!(
                    recommendation.subtype.is_none(),
                    "subtype populated for {purpose:?}/{amount}/{has_collateral}"
                );
                assert!(!recommendation.loan_type.is_empty());
            }
        }
    }
}

#[test]
fn classification_is_deterministic() {
    let input = need(LoanPurpose::Business, 250_000, true);
    assert_eq!(recommend(&input), recommend(&input));
}

#[test]
fn unknown_purpose_strings_parse_to_fallback() {
    assert_eq!(LoanPurpose::parse("wedding"), LoanPurpose::Other);
    assert_eq!(LoanPurpose::parse(""), LoanPurpose::Other);
    assert_eq!(LoanPurpose::parse("  Home_Purchase "), LoanPurpose::HomePurchase);
}

#[test]
fn reason_keys_serialize_to_stable_identifiers() {
    let expected = [
        "education_fees",
        "buy_house_high_amount",
        "small_home",
        "rent_deposit",
        "business_with_collateral",
        "business_without_collateral",
        "vehicle_purchase",
        "medical_small",
        "medical_large",
        "debt_consolidation",
        "small_personal",
        "general_personal",
    ];

    for (key, expected) in ReasonKey::ALL.iter().zip(expected) {
        assert_eq!(key.as_str(), expected);
        let serialized = serde_json::to_string(key).expect("reason key serializes");
        assert_eq!(serialized, format!("\"{expected}\""));
    }
}
