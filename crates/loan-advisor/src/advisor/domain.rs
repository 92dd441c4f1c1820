use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Borrower's stated reason for requesting a loan. Drives the primary branch
/// of classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanPurpose {
    Education,
    HomePurchase,
    HomeRent,
    Business,
    Vehicle,
    Medical,
    DebtConsolidation,
    Other,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 8] = [
        LoanPurpose::Education,
        LoanPurpose::HomePurchase,
        LoanPurpose::HomeRent,
        LoanPurpose::Business,
        LoanPurpose::Vehicle,
        LoanPurpose::Medical,
        LoanPurpose::DebtConsolidation,
        LoanPurpose::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LoanPurpose::Education => "education",
            LoanPurpose::HomePurchase => "home_purchase",
            LoanPurpose::HomeRent => "home_rent",
            LoanPurpose::Business => "business",
            LoanPurpose::Vehicle => "vehicle",
            LoanPurpose::Medical => "medical",
            LoanPurpose::DebtConsolidation => "debt_consolidation",
            LoanPurpose::Other => "other",
        }
    }

    /// Maps a raw purpose string onto the enumeration. Anything outside the
    /// known set routes to `Other` rather than erroring, so untyped callers
    /// always land on the fallback branch.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "education" => LoanPurpose::Education,
            "home_purchase" => LoanPurpose::HomePurchase,
            "home_rent" => LoanPurpose::HomeRent,
            "business" => LoanPurpose::Business,
            "vehicle" => LoanPurpose::Vehicle,
            "medical" => LoanPurpose::Medical,
            "debt_consolidation" => LoanPurpose::DebtConsolidation,
            _ => LoanPurpose::Other,
        }
    }
}

impl Serialize for LoanPurpose {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoanPurpose {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(LoanPurpose::parse(&raw))
    }
}

/// Borrower-supplied loan need. Amount is currency-unit-less; interpretation
/// is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanNeedInput {
    pub purpose: LoanPurpose,
    pub amount: u64,
    pub has_collateral: bool,
}

/// Stable identifier naming which classification rule fired. Downstream
/// consumers match on these keys for localized explanation text, so the
/// serialized strings must stay byte-stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKey {
    EducationFees,
    BuyHouseHighAmount,
    SmallHome,
    RentDeposit,
    BusinessWithCollateral,
    BusinessWithoutCollateral,
    VehiclePurchase,
    MedicalSmall,
    MedicalLarge,
    DebtConsolidation,
    SmallPersonal,
    GeneralPersonal,
}

impl ReasonKey {
    pub const ALL: [ReasonKey; 12] = [
        ReasonKey::EducationFees,
        ReasonKey::BuyHouseHighAmount,
        ReasonKey::SmallHome,
        ReasonKey::RentDeposit,
        ReasonKey::BusinessWithCollateral,
        ReasonKey::BusinessWithoutCollateral,
        ReasonKey::VehiclePurchase,
        ReasonKey::MedicalSmall,
        ReasonKey::MedicalLarge,
        ReasonKey::DebtConsolidation,
        ReasonKey::SmallPersonal,
        ReasonKey::GeneralPersonal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ReasonKey::EducationFees => "education_fees",
            ReasonKey::BuyHouseHighAmount => "buy_house_high_amount",
            ReasonKey::SmallHome => "small_home",
            ReasonKey::RentDeposit => "rent_deposit",
            ReasonKey::BusinessWithCollateral => "business_with_collateral",
            ReasonKey::BusinessWithoutCollateral => "business_without_collateral",
            ReasonKey::VehiclePurchase => "vehicle_purchase",
            ReasonKey::MedicalSmall => "medical_small",
            ReasonKey::MedicalLarge => "medical_large",
            ReasonKey::DebtConsolidation => "debt_consolidation",
            ReasonKey::SmallPersonal => "small_personal",
            ReasonKey::GeneralPersonal => "general_personal",
        }
    }
}

/// Recommendation produced for a single loan need.
///
/// `subtype` is reserved for a secondary product label; no current rule
/// populates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRecommendation {
    pub loan_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    pub reason_key: ReasonKey,
}

impl LoanRecommendation {
    pub(crate) fn new(loan_type: &str, reason_key: ReasonKey) -> Self {
        Self {
            loan_type: loan_type.to_string(),
            subtype: None,
            reason_key,
        }
    }

    pub fn summary(&self) -> String {
        format!("{} ({})", self.loan_type, self.reason_key.as_str())
    }
}
