use colored::{ColoredString, Colorize};
use itertools::Itertools;
use rust_decimal::prelude::ToPrimitive;
use strum::IntoEnumIterator;

use crate::{
    allocation::PortfolioMetrics,
    analysis::Analysis,
    assets::AssetClass,
    rebalance::Direction,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// No ANSI colors at all; for piped output.
    Plain,
}

/// Per-invocation render configuration. Constructed fresh for every
/// request; nothing here is shared or long-lived.
#[derive(Clone, Copy, Debug, Default)]
pub struct Session {
    pub theme: Theme,
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn accent(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Light => s.green(),
            Theme::Dark => s.bright_green(),
            Theme::Plain => s.clear(),
        }
    }

    fn warn(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Light => s.yellow(),
            Theme::Dark => s.bright_yellow(),
            Theme::Plain => s.clear(),
        }
    }
}

/// Money with thousands separators, two decimals: 1234567.8 -> 1,234,567.80
pub fn fmt_money(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let grouped = whole
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .join(",");
    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}

fn fmt_metrics(session: &Session, title: &str, metrics: &PortfolioMetrics, sharpe: Option<f64>) -> String {
    let sharpe = match sharpe {
        Some(ratio) => format!("{:.2}", ratio),
        None => "N/A".to_string(),
    };
    format!(
        "{}\n  Expected Annual Return : {:.1}%\n  Portfolio Risk (sigma) : {:.1}%\n  Sharpe Ratio           : {}",
        session.accent(title),
        metrics.expected_return * 100.0,
        metrics.risk * 100.0,
        sharpe
    )
}

/// Render an analysis as the terminal report.
pub fn render(analysis: &Analysis, session: &Session) -> String {
    let mut out = vec![];

    out.push(format!(
        "{}  {}",
        session.accent("WealthWise Financial Plan"),
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));
    out.push(format!(
        "Total Invested: {}",
        fmt_money(analysis.total_invested.to_f64().unwrap_or(0.0))
    ));

    out.push(String::new());
    out.push(fmt_metrics(
        session,
        "Current Portfolio",
        &analysis.current_metrics,
        analysis.current_sharpe,
    ));
    out.push(fmt_metrics(
        session,
        "Recommended Portfolio",
        &analysis.recommended_metrics,
        analysis.recommended_sharpe,
    ));

    out.push(String::new());
    out.push(session.accent("Allocation Comparison").to_string());
    out.push(format!(
        "  {:<16} {:>9} {:>13} {:>11}",
        "Asset Class", "Current %", "Recommended %", "Difference"
    ));
    for asset in AssetClass::iter() {
        let current = analysis.current_weights.get(&asset).copied().unwrap_or(0.0);
        let recommended = analysis.recommended.get(&asset).copied().unwrap_or(0.0);
        out.push(format!(
            "  {:<16} {:>9.1} {:>13.1} {:>+11.1}",
            asset.to_string(),
            current,
            recommended,
            recommended - current
        ));
    }

    out.push(String::new());
    out.push(session.accent("Future Value Projections").to_string());
    for goal in &analysis.goals {
        out.push(format!(
            "  {:<12} ({:.0}% CAGR) : {} ({}{})",
            goal.scenario.to_string(),
            goal.scenario.rate() * 100.0,
            fmt_money(goal.final_value),
            if goal.gain >= 0.0 { "+" } else { "" },
            fmt_money(goal.gain)
        ));
    }
    out.push(format!(
        "  Monthly contributions alone, 10 years at 10%: {}",
        fmt_money(analysis.sip_decade_value)
    ));

    out.push(String::new());
    if analysis.balanced {
        out.push(session.accent("Portfolio Status: Well-Balanced").to_string());
        out.push(
            "  Your current allocation aligns well with the recommended strategy for your age group."
                .to_string(),
        );
    } else {
        out.push(session.warn("Portfolio Rebalancing Required").to_string());
        for action in &analysis.actions {
            let verb = match action.direction() {
                Direction::Increase => "Increase",
                Direction::Reduce => "Reduce",
            };
            out.push(format!(
                "  - {} {} allocation by {:.1}%",
                verb,
                action.asset,
                action.diff.abs()
            ));
        }
        out.push("  Tip: Rebalance quarterly or when allocation drifts >5% from target".to_string());
    }

    out.push(String::new());
    out.push(session.accent("Educational Insights").to_string());
    for insight in &analysis.insights {
        out.push(format!("  - {}", insight));
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        analysis::{analyze, PlanRequest},
        portfolio::Portfolio,
    };

    use super::*;

    fn analysis() -> Analysis {
        let mut portfolio = Portfolio::new();
        portfolio.set(AssetClass::Crypto, dec!(10000));
        analyze(&PlanRequest {
            age: 40,
            monthly_income: dec!(6000),
            monthly_investment: dec!(1200),
            horizon_years: 10,
            portfolio,
        })
    }

    #[test]
    fn test_fmt_money_grouping() {
        assert_eq!(fmt_money(0.0), "$0.00");
        assert_eq!(fmt_money(999.5), "$999.50");
        assert_eq!(fmt_money(1234567.891), "$1,234,567.89");
        assert_eq!(fmt_money(-4500.0), "-$4,500.00");
    }

    #[test]
    fn test_render_plain_lists_rebalance_actions() {
        let session = Session::new(Theme::Plain);
        let report = render(&analysis(), &session);

        assert!(report.contains("Portfolio Rebalancing Required"));
        assert!(report.contains("Increase Equity allocation by 60.0%"));
        assert!(report.contains("Reduce Crypto allocation by 95.0%"));
        assert!(report.contains("Allocation Comparison"));
        assert!(report.contains("Educational Insights"));
    }

    #[test]
    fn test_render_balanced_portfolio() {
        let mut portfolio = Portfolio::new();
        portfolio.set(AssetClass::Equity, dec!(7000));
        portfolio.set(AssetClass::Bonds, dec!(3000));
        let analysis = analyze(&PlanRequest {
            age: 30,
            monthly_income: dec!(5000),
            monthly_investment: dec!(1000),
            horizon_years: 5,
            portfolio,
        });

        let report = render(&analysis, &Session::new(Theme::Plain));
        assert!(report.contains("Well-Balanced"));
        assert!(!report.contains("Rebalancing Required"));
    }

    #[test]
    fn test_render_shows_na_sharpe_for_empty_portfolio() {
        let analysis = analyze(&PlanRequest {
            age: 25,
            monthly_income: dec!(4000),
            monthly_investment: dec!(800),
            horizon_years: 20,
            portfolio: Portfolio::new(),
        });

        let report = render(&analysis, &Session::new(Theme::Plain));
        assert!(report.contains("N/A"));
    }
}
