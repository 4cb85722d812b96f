use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use wealthwise::analysis::{analyze, PlanRequest};
use wealthwise::assets::AssetClass;
use wealthwise::portfolio::Portfolio;
use wealthwise::report::{render, Session, Theme};
use wealthwise::server;

#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute and print a financial plan.
    Analyze {
        #[arg(long)]
        age: i32,
        #[arg(long, default_value = "0")]
        income: Decimal,
        /// Monthly contribution; defaults to 20% of income.
        #[arg(long)]
        monthly: Option<Decimal>,
        #[arg(long, default_value = "10")]
        horizon: u32,
        /// Current holdings as "Asset Class=Amount", e.g. --holding Equity=5000
        #[arg(long, value_delimiter = ',')]
        holding: Vec<String>,
        #[arg(long)]
        dark: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Serve the calculator over HTTP.
    Serve {
        #[arg(long, default_value = "127.0.0.1:5555")]
        address: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
        }))
        .with(fmt::layer())
        .init();

    let args = Args::parse();

    match args.command {
        Some(Commands::Analyze {
            age,
            income,
            monthly,
            horizon,
            holding,
            dark,
            plain,
        }) => {
            if let Err(err) = run_analyze(age, income, monthly, horizon, holding, dark, plain) {
                error!("{}", err);
                std::process::exit(1);
            }
        }
        Some(Commands::Serve { address }) => {
            if let Err(err) = server::start(address).await {
                error!("{}", err);
                std::process::exit(1);
            }
        }
        _ => {}
    }
}

fn run_analyze(
    age: i32,
    income: Decimal,
    monthly: Option<Decimal>,
    horizon: u32,
    holding: Vec<String>,
    dark: bool,
    plain: bool,
) -> Result<()> {
    let mut portfolio = Portfolio::new();
    for entry in &holding {
        let (asset, amount) = parse_holding(entry).map_err(|err| anyhow!(err))?;
        portfolio.set(asset, amount);
    }

    let request = PlanRequest {
        age,
        monthly_income: income,
        monthly_investment: monthly.unwrap_or(income * dec!(0.2)),
        horizon_years: horizon,
        portfolio,
    };
    request.validate().map_err(|err| anyhow!(err))?;

    let theme = if plain {
        Theme::Plain
    } else if dark {
        Theme::Dark
    } else {
        Theme::Light
    };
    let session = Session::new(theme);

    println!("{}", render(&analyze(&request), &session));

    Ok(())
}

fn parse_holding(entry: &str) -> Result<(AssetClass, Decimal), String> {
    let (name, amount) = entry
        .split_once('=')
        .ok_or_else(|| format!("Expected \"Asset Class=Amount\", got \"{}\"", entry))?;
    let asset = AssetClass::from_str(name.trim())
        .map_err(|_| format!("Unknown asset class \"{}\"", name.trim()))?;
    let amount = Decimal::from_str(amount.trim())
        .map_err(|_| format!("Could not parse amount \"{}\"", amount.trim()))?;
    Ok((asset, amount))
}
