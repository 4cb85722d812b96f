use std::{collections::HashMap, fmt::Display};

use colored::Colorize;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::assets::AssetClass;

/// Current holdings: money invested per asset class.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Portfolio {
    pub holdings: HashMap<AssetClass, Decimal>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self {
            holdings: HashMap::new(),
        }
    }

    pub fn set(&mut self, asset: AssetClass, amount: Decimal) {
        self.holdings.insert(asset, amount);
    }

    pub fn total(&self) -> Decimal {
        self.holdings
            .values()
            .fold(dec!(0), |acc, amount| acc + amount)
    }

    /// Percentage weight per asset class, derived from amounts.
    ///
    /// Every asset class gets an entry; when the total is zero all weights
    /// are zero rather than NaN.
    pub fn weights(&self) -> HashMap<AssetClass, f64> {
        let total = self.total().to_f64().unwrap_or(0.0);
        AssetClass::iter()
            .map(|asset| {
                let amount = self
                    .holdings
                    .get(&asset)
                    .and_then(|amount| amount.to_f64())
                    .unwrap_or(0.0);
                let pct = if total > 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                };
                (asset, pct)
            })
            .collect()
    }
}

impl Display for Portfolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = vec![];
        for asset in AssetClass::iter() {
            if let Some(amount) = self.holdings.get(&asset) {
                if *amount > dec!(0) {
                    s.push(format!("{}: {}", asset, amount.to_string().purple()));
                }
            }
        }
        write!(
            f,
            "~{} : {}",
            self.total().to_string().yellow(),
            s.join(" / ")
        )
    }
}
