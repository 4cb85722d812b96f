use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::assets::AssetClass;

/// Drift below this many percentage points is left alone.
pub const DRIFT_THRESHOLD: f64 = 5.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Increase,
    Reduce,
}

/// One actionable drift: move this asset's weight by `diff` points.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct RebalanceAction {
    pub asset: AssetClass,
    /// Signed: positive means the recommended weight is higher than the
    /// current one.
    pub diff: f64,
}

impl RebalanceAction {
    pub fn direction(&self) -> Direction {
        if self.diff > 0.0 {
            Direction::Increase
        } else {
            Direction::Reduce
        }
    }
}

/// Actions for every asset class whose |recommended - current| exceeds
/// [`DRIFT_THRESHOLD`], in asset-table order.
pub fn rebalance_actions(
    current: &HashMap<AssetClass, f64>,
    recommended: &HashMap<AssetClass, f64>,
) -> Vec<RebalanceAction> {
    AssetClass::iter()
        .filter_map(|asset| {
            let current_pct = current.get(&asset).copied().unwrap_or(0.0);
            let recommended_pct = recommended.get(&asset).copied().unwrap_or(0.0);
            let diff = recommended_pct - current_pct;
            if diff.abs() > DRIFT_THRESHOLD {
                Some(RebalanceAction { asset, diff })
            } else {
                None
            }
        })
        .collect()
}

/// Age-bracket guidance shown alongside the rebalancing box.
pub fn insights(age: i32) -> Vec<&'static str> {
    if age < 30 {
        vec![
            "At your age, you can afford to take more risk for higher returns",
            "Consider maximizing equity allocation for long-term growth",
            "Time is your biggest asset - start investing early",
        ]
    } else if age < 50 {
        vec![
            "Balance growth with stability as you approach middle age",
            "Diversification becomes increasingly important",
            "Consider increasing bond allocation gradually",
        ]
    } else {
        vec![
            "Focus on capital preservation as you near retirement",
            "Reduce exposure to volatile assets like crypto",
            "Ensure adequate emergency fund and insurance coverage",
        ]
    }
}
