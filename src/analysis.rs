use std::collections::HashMap;

use rust_decimal::{prelude::ToPrimitive, Decimal};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    allocation::{portfolio_metrics, recommended_allocation, PortfolioMetrics},
    assets::AssetClass,
    growth::{goal_summary, projection, sip_future_value, GoalSummary, Scenario, YearPoint},
    portfolio::Portfolio,
    rebalance::{insights, rebalance_actions, RebalanceAction},
};

/// Everything one analysis needs, collected per request.
///
/// There is deliberately no module-level state: each request carries its
/// own inputs and the whole plan is recomputed from scratch.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanRequest {
    pub age: i32,
    pub monthly_income: Decimal,
    pub monthly_investment: Decimal,
    pub horizon_years: u32,
    pub portfolio: Portfolio,
}

impl PlanRequest {
    /// Boundary validation mirroring the input widgets' bounds. The pure
    /// calculation functions accept anything numeric; out-of-range values
    /// are rejected here, at the caller's edge.
    pub fn validate(&self) -> Result<(), String> {
        if !(18..=100).contains(&self.age) {
            return Err(format!("Age {} is outside the supported 18-100 range", self.age));
        }
        if !(1..=40).contains(&self.horizon_years) {
            return Err(format!(
                "Investment horizon {} is outside the supported 1-40 year range",
                self.horizon_years
            ));
        }
        if self.monthly_income < dec!(0) {
            return Err("Monthly income cannot be negative".to_string());
        }
        if self.monthly_investment < dec!(0) {
            return Err("Monthly investment cannot be negative".to_string());
        }
        if self.monthly_investment > self.monthly_income * dec!(0.5) {
            return Err("Monthly investment cannot exceed half the monthly income".to_string());
        }
        if let Some((asset, amount)) = self
            .portfolio
            .holdings
            .iter()
            .find(|(_, amount)| **amount < dec!(0))
        {
            return Err(format!("Holding for {} cannot be negative ({})", asset, amount));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    pub series: Vec<YearPoint>,
}

/// The full plan: allocation comparison, metrics, projections and
/// rebalancing actions for one request.
#[derive(Serialize, Clone, Debug)]
pub struct Analysis {
    pub total_invested: Decimal,
    pub current_weights: HashMap<AssetClass, f64>,
    pub recommended: HashMap<AssetClass, f64>,
    pub current_metrics: PortfolioMetrics,
    pub current_sharpe: Option<f64>,
    pub recommended_metrics: PortfolioMetrics,
    pub recommended_sharpe: Option<f64>,
    pub projections: Vec<ScenarioProjection>,
    pub goals: Vec<GoalSummary>,
    /// What the monthly contribution alone grows to over ten years at the
    /// moderate rate.
    pub sip_decade_value: f64,
    pub actions: Vec<RebalanceAction>,
    pub balanced: bool,
    pub insights: Vec<&'static str>,
}

/// One stateless pass over a request. Pure: same request, same analysis.
pub fn analyze(request: &PlanRequest) -> Analysis {
    let total_invested = request.portfolio.total();
    let lump_sum = total_invested.to_f64().unwrap_or(0.0);
    let monthly = request.monthly_investment.to_f64().unwrap_or(0.0);

    let current_weights = request.portfolio.weights();
    let recommended = recommended_allocation(request.age);

    let current_metrics = portfolio_metrics(&current_weights);
    let recommended_metrics = portfolio_metrics(&recommended);

    let projections = Scenario::iter()
        .map(|scenario| ScenarioProjection {
            scenario,
            series: projection(scenario, lump_sum, monthly, request.horizon_years).collect(),
        })
        .collect();

    let goals = Scenario::iter()
        .map(|scenario| goal_summary(scenario, lump_sum, monthly, request.horizon_years))
        .collect();

    let actions = rebalance_actions(&current_weights, &recommended);
    let balanced = actions.is_empty();

    Analysis {
        total_invested,
        current_weights,
        recommended,
        current_sharpe: current_metrics.sharpe(),
        current_metrics,
        recommended_sharpe: recommended_metrics.sharpe(),
        recommended_metrics,
        projections,
        goals,
        sip_decade_value: sip_future_value(monthly, Scenario::Moderate.rate(), 10),
        actions,
        balanced,
        insights: insights(request.age),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PlanRequest {
        let mut portfolio = Portfolio::new();
        portfolio.set(AssetClass::Equity, dec!(7000));
        portfolio.set(AssetClass::Bonds, dec!(3000));
        PlanRequest {
            age: 30,
            monthly_income: dec!(5000),
            monthly_investment: dec!(1000),
            horizon_years: 10,
            portfolio,
        }
    }

    #[test]
    fn test_validate_accepts_practical_inputs() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut bad = request();
        bad.age = 17;
        assert!(bad.validate().is_err());

        let mut bad = request();
        bad.horizon_years = 41;
        assert!(bad.validate().is_err());

        let mut bad = request();
        bad.monthly_investment = dec!(2501);
        assert!(bad.validate().is_err());

        let mut bad = request();
        bad.portfolio.set(AssetClass::Crypto, dec!(-10));
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_analyze_shape() {
        let analysis = analyze(&request());

        assert_eq!(analysis.total_invested, dec!(10000));
        assert_eq!(analysis.projections.len(), 3);
        assert_eq!(analysis.projections[0].series.len(), 10);
        assert_eq!(analysis.goals.len(), 3);
        assert_eq!(analysis.insights.len(), 3);
    }

    #[test]
    fn test_analyze_matched_portfolio_is_balanced() {
        // 70/30 equity-bonds matches the age-30 recommendation exactly;
        // only drifts above 5 points get reported, and none exceed it here
        // (crypto and insurance sit at exactly 5).
        let analysis = analyze(&request());
        assert!(analysis.balanced);
        assert!(analysis.actions.is_empty());
    }

    #[test]
    fn test_analyze_unbalanced_portfolio() {
        let mut req = request();
        req.portfolio = Portfolio::new();
        req.portfolio.set(AssetClass::Crypto, dec!(10000));

        let analysis = analyze(&req);
        assert!(!analysis.balanced);
        // equity is 70 points under target, crypto 95 over
        assert!(analysis
            .actions
            .iter()
            .any(|action| action.asset == AssetClass::Equity && action.diff > 0.0));
        assert!(analysis
            .actions
            .iter()
            .any(|action| action.asset == AssetClass::Crypto && action.diff < 0.0));
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let req = request();
        let a = analyze(&req);
        let b = analyze(&req);
        assert_eq!(a.current_metrics, b.current_metrics);
        assert_eq!(a.goals.len(), b.goals.len());
        assert_eq!(
            a.goals[2].final_value.to_bits(),
            b.goals[2].final_value.to_bits()
        );
    }

    #[test]
    fn test_sip_decade_value_uses_moderate_rate() {
        let analysis = analyze(&request());
        assert!((analysis.sip_decade_value - sip_future_value(1000.0, 0.10, 10)).abs() < 1e-9);
    }
}
