use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::assets::{AssetClass, RISK_FREE_RATE};

/// Age-based target allocation, "Rule of 100".
///
/// Reproduces the planner's original heuristic exactly: the seven weights
/// are not normalized, and for some ages the emergency-fund slice goes
/// negative and the sum drifts off 100. Callers render what they get.
pub fn recommended_allocation(age: i32) -> HashMap<AssetClass, f64> {
    let equity = (100 - age).max(20) as f64;
    let bonds = age.min(60) as f64;
    let other = 100.0 - equity - bonds;

    HashMap::from([
        (AssetClass::Equity, equity),
        (AssetClass::Bonds, bonds),
        (AssetClass::RealEstate, other * 0.4),
        (AssetClass::Commodities, other * 0.2),
        (AssetClass::Crypto, (50 - age).clamp(0, 5) as f64),
        (AssetClass::Insurance, 5.0),
        (AssetClass::EmergencyFund, other * 0.4 - 5.0),
    ])
}

/// Expected return and risk of a percentage-weighted allocation.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct PortfolioMetrics {
    /// Weighted annual expected return, as a fraction.
    pub expected_return: f64,
    /// Annualized standard deviation, as a fraction. Quadrature of the
    /// weighted per-class sigmas: asset classes are treated as
    /// uncorrelated, not a covariance model.
    pub risk: f64,
}

impl PortfolioMetrics {
    /// Excess return per unit of risk, against [`RISK_FREE_RATE`].
    /// `None` when risk is zero; displays show "N/A".
    pub fn sharpe(&self) -> Option<f64> {
        if self.risk > 0.0 {
            Some((self.expected_return - RISK_FREE_RATE) / self.risk)
        } else {
            None
        }
    }
}

pub fn portfolio_metrics(weights: &HashMap<AssetClass, f64>) -> PortfolioMetrics {
    let mut expected_return = 0.0;
    let mut variance = 0.0;

    for (asset, pct) in weights.iter() {
        let weight = pct / 100.0;
        expected_return += weight * asset.expected_return();
        variance += weight * weight * asset.risk() * asset.risk();
    }

    PortfolioMetrics {
        expected_return,
        risk: variance.sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_bounds_over_practical_ages() {
        for age in 18..=100 {
            let allocation = recommended_allocation(age);
            assert!(allocation[&AssetClass::Equity] >= 20.0, "age {}", age);
            assert!(allocation[&AssetClass::Bonds] <= 60.0, "age {}", age);
            assert_eq!(allocation[&AssetClass::Insurance], 5.0);
            let crypto = allocation[&AssetClass::Crypto];
            assert!((0.0..=5.0).contains(&crypto), "age {}", age);
        }
    }

    #[test]
    fn test_allocation_age_30() {
        let allocation = recommended_allocation(30);
        assert_eq!(allocation[&AssetClass::Equity], 70.0);
        assert_eq!(allocation[&AssetClass::Bonds], 30.0);
        assert_eq!(allocation[&AssetClass::RealEstate], 0.0);
        assert_eq!(allocation[&AssetClass::Commodities], 0.0);
        assert_eq!(allocation[&AssetClass::Crypto], 5.0);
        assert_eq!(allocation[&AssetClass::Insurance], 5.0);
        // known quirk of the heuristic, kept as-is
        assert_eq!(allocation[&AssetClass::EmergencyFund], -5.0);
    }

    #[test]
    fn test_allocation_age_45() {
        let allocation = recommended_allocation(45);
        assert_eq!(allocation[&AssetClass::Equity], 55.0);
        assert_eq!(allocation[&AssetClass::Bonds], 45.0);
        assert_eq!(allocation[&AssetClass::Crypto], 5.0);
    }

    #[test]
    fn test_metrics_empty_allocation() {
        let metrics = portfolio_metrics(&HashMap::new());
        assert_eq!(metrics.expected_return, 0.0);
        assert_eq!(metrics.risk, 0.0);
        assert_eq!(metrics.sharpe(), None);
    }

    #[test]
    fn test_metrics_single_full_weight_asset() {
        let weights = HashMap::from([(AssetClass::Equity, 100.0)]);
        let metrics = portfolio_metrics(&weights);
        assert_eq!(metrics.expected_return, 0.12);
        assert!((metrics.risk - 0.20).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_two_assets() {
        let weights = HashMap::from([(AssetClass::Equity, 50.0), (AssetClass::Bonds, 50.0)]);
        let metrics = portfolio_metrics(&weights);
        assert!((metrics.expected_return - 0.09).abs() < 1e-12);
        // sqrt(0.5^2 * 0.2^2 + 0.5^2 * 0.05^2)
        let expected_risk = (0.25_f64 * 0.04 + 0.25 * 0.0025).sqrt();
        assert!((metrics.risk - expected_risk).abs() < 1e-12);
    }

    #[test]
    fn test_sharpe_ratio() {
        let metrics = PortfolioMetrics {
            expected_return: 0.12,
            risk: 0.20,
        };
        let sharpe = metrics.sharpe().unwrap();
        assert!((sharpe - 0.45).abs() < 1e-12);

        let riskless = PortfolioMetrics {
            expected_return: 0.05,
            risk: 0.0,
        };
        assert_eq!(riskless.sharpe(), None);
    }
}
