use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Annualized risk-free rate used for Sharpe-style ratio displays.
pub const RISK_FREE_RATE: f64 = 0.03;

/// The seven asset classes the planner knows about.
///
/// Declaration order is the canonical iteration order: reports, charts and
/// rebalancing lists all walk the table in this order.
#[derive(
    Serialize, Deserialize, Display, EnumIter, EnumString, Clone, Copy, Debug, Eq, PartialEq, Hash,
)]
pub enum AssetClass {
    Equity,
    Bonds,
    #[serde(rename = "Real Estate")]
    #[strum(serialize = "Real Estate")]
    RealEstate,
    Commodities,
    Crypto,
    Insurance,
    #[serde(rename = "Emergency Fund")]
    #[strum(serialize = "Emergency Fund")]
    EmergencyFund,
}

impl AssetClass {
    /// Long-run annualized expected return, as a fraction.
    pub fn expected_return(&self) -> f64 {
        match self {
            AssetClass::Equity => 0.12,
            AssetClass::Bonds => 0.06,
            AssetClass::RealEstate => 0.08,
            AssetClass::Commodities => 0.07,
            AssetClass::Crypto => 0.20,
            AssetClass::Insurance => 0.04,
            AssetClass::EmergencyFund => 0.03,
        }
    }

    /// Annualized standard deviation, as a fraction.
    pub fn risk(&self) -> f64 {
        match self {
            AssetClass::Equity => 0.20,
            AssetClass::Bonds => 0.05,
            AssetClass::RealEstate => 0.15,
            AssetClass::Commodities => 0.25,
            AssetClass::Crypto => 0.80,
            AssetClass::Insurance => 0.02,
            AssetClass::EmergencyFund => 0.01,
        }
    }

    /// Hex color used by chart-drawing consumers.
    pub fn color(&self) -> &'static str {
        match self {
            AssetClass::Equity => "#059669",
            AssetClass::Bonds => "#6B7280",
            AssetClass::RealEstate => "#9CA3AF",
            AssetClass::Commodities => "#D1D5DB",
            AssetClass::Crypto => "#4B5563",
            AssetClass::Insurance => "#374151",
            AssetClass::EmergencyFund => "#111827",
        }
    }
}
