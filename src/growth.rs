use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Future value of a lump sum under annual compounding.
pub fn future_value(present_value: f64, annual_rate: f64, years: u32) -> f64 {
    present_value * (1.0 + annual_rate).powi(years as i32)
}

/// Future value of a systematic investment plan: one contribution at the
/// start of every month (annuity-due), compounded monthly.
pub fn sip_future_value(monthly_contribution: f64, annual_rate: f64, years: u32) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    let months = years * 12;
    if monthly_rate == 0.0 {
        // closed form divides by the rate
        return monthly_contribution * months as f64;
    }
    monthly_contribution * (((1.0 + monthly_rate).powi(months as i32) - 1.0) / monthly_rate)
        * (1.0 + monthly_rate)
}

/// Growth scenarios used for projections, from cautious to bold.
#[derive(Serialize, Deserialize, Display, EnumIter, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scenario {
    Conservative,
    Moderate,
    Aggressive,
}

impl Scenario {
    /// Assumed compound annual growth rate.
    pub fn rate(&self) -> f64 {
        match self {
            Scenario::Conservative => 0.05,
            Scenario::Moderate => 0.10,
            Scenario::Aggressive => 0.15,
        }
    }

    /// Hex color used by chart-drawing consumers.
    pub fn color(&self) -> &'static str {
        match self {
            Scenario::Conservative => "#059669",
            Scenario::Moderate => "#6B7280",
            Scenario::Aggressive => "#9CA3AF",
        }
    }
}

/// One point on a projection curve.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct YearPoint {
    pub year: u32,
    pub value: f64,
}

/// Projected portfolio value for years 1..=horizon: the current lump sum
/// grown at the scenario rate plus the accumulated monthly contributions.
/// Lazy; nothing is computed until the iterator is consumed.
pub fn projection(
    scenario: Scenario,
    lump_sum: f64,
    monthly_contribution: f64,
    horizon_years: u32,
) -> impl Iterator<Item = YearPoint> {
    let rate = scenario.rate();
    (1..=horizon_years).map(move |year| YearPoint {
        year,
        value: future_value(lump_sum, rate, year)
            + sip_future_value(monthly_contribution, rate, year),
    })
}

/// Horizon-end outcome for one scenario.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct GoalSummary {
    pub scenario: Scenario,
    pub final_value: f64,
    /// Gain over the money already invested today.
    pub gain: f64,
}

pub fn goal_summary(
    scenario: Scenario,
    lump_sum: f64,
    monthly_contribution: f64,
    horizon_years: u32,
) -> GoalSummary {
    let rate = scenario.rate();
    let final_value = future_value(lump_sum, rate, horizon_years)
        + sip_future_value(monthly_contribution, rate, horizon_years);
    GoalSummary {
        scenario,
        final_value,
        gain: final_value - lump_sum,
    }
}
