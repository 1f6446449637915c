//! Hytale Hosting Advisor - Command-line tools

use std::path::PathBuf;

use advisor_core::catalog::PlanQuery;
use advisor_core::data::{HardwareTier, PlanTier, TierClass};
use advisor_core::error::AdvisorError;
use advisor_core::preferences::{ModLevel, UserPreferences};
use advisor_core::recommend::Advisor;
use advisor_tools::loader::{load_data, DataLoadError};
use advisor_tools::report::{
    ComparisonTable, CostBreakdown, CurveChart, OutputFormat, PlanTable, RecommendationReport,
    TierPlansReport,
};
use advisor_tools::validate::ValidationReport;
use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "advisor-tools")]
#[command(about = "Hosting recommendations and data tools for Hytale servers")]
struct Cli {
    /// Log at debug level when RUST_LOG is not set
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding plans.ron, tiers.ron and settings.ron
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate data files
    Validate {
        /// Path to data directory (defaults to --data, then the bundled data)
        path: Option<PathBuf>,
    },
    /// Recommend hosting plans for a server
    Recommend {
        /// Expected concurrent players
        #[arg(short, long)]
        players: u32,
        /// Mod level: vanilla, light or heavy
        #[arg(short, long, default_value = "vanilla")]
        mods: ModLevel,
        /// Preferred server region
        #[arg(short, long)]
        region: Option<String>,
        /// Monthly budget (recorded, not used to filter)
        #[arg(short, long)]
        budget: Option<f64>,
        /// Rental duration used for plan totals
        #[arg(long, default_value_t = 1)]
        months: u32,
    },
    /// List the best hosting plans for a tier class
    TierPlans {
        /// Tier class: starter, intermediate or professional
        class: TierClass,
        /// Number of plans (defaults to the configured result limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Browse the plan catalog
    Plans {
        /// Text to find in plan names and notes
        #[arg(short, long, default_value = "")]
        search: String,
        /// Only this provider
        #[arg(short, long)]
        provider: Option<String>,
        /// Only this size class: small, medium or large
        #[arg(short, long)]
        tier: Option<PlanTier>,
    },
    /// Estimate the cost of a rental
    Cost {
        /// Monthly price
        #[arg(long, required_unless_present = "tier", conflicts_with = "tier")]
        price: Option<f64>,
        /// Use the monthly price of this hardware tier
        #[arg(long)]
        tier: Option<String>,
        /// Rental duration in months
        #[arg(short, long, default_value_t = 1)]
        months: u32,
    },
    /// Show estimated load for a hardware tier from empty to full
    Curve {
        /// Tier id
        tier: String,
    },
    /// Compare every hardware tier at one player count
    Compare {
        /// Concurrent players
        players: u32,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] DataLoadError),

    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    #[error("Unknown tier id: {0}")]
    UnknownTier(String),

    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn find_tier<'a>(advisor: Advisor<'a>, id: &str) -> Result<&'a HardwareTier, CliError> {
    advisor
        .tiers()
        .get(id)
        .ok_or_else(|| CliError::UnknownTier(id.to_string()))
}

fn run(cli: Cli) -> Result<String, CliError> {
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let data_dir = match &cli.command {
        Commands::Validate { path: Some(path) } => Some(path.clone()),
        _ => cli.data.clone(),
    };
    match &data_dir {
        Some(dir) => tracing::debug!("Loading data files from: {}", dir.display()),
        None => tracing::debug!("Using bundled data"),
    }
    let data = load_data(data_dir.as_deref())?;
    let advisor = data.advisor();

    let output = match cli.command {
        Commands::Validate { .. } => format.render(&ValidationReport::for_data(&data))?,
        Commands::Recommend {
            players,
            mods,
            region,
            budget,
            months,
        } => {
            let mut prefs = UserPreferences::new(players, mods);
            if let Some(region) = region {
                prefs = prefs.with_region(region);
            }
            if let Some(budget) = budget {
                prefs = prefs.with_budget(budget);
            }
            format.render(&RecommendationReport::build(advisor, &prefs, months)?)?
        }
        Commands::TierPlans { class, limit } => {
            format.render(&TierPlansReport::build(advisor, class, limit))?
        }
        Commands::Plans {
            search,
            provider,
            tier,
        } => {
            let query = PlanQuery {
                text: search,
                provider,
                tier,
            };
            format.render(&PlanTable(advisor.plans().search(&query)))?
        }
        Commands::Cost {
            price,
            tier,
            months,
        } => {
            // clap requires one of --price or --tier
            let price = match tier {
                Some(id) => find_tier(advisor, &id)?.monthly_price,
                None => price.unwrap_or_default(),
            };
            format.render(&CostBreakdown(advisor.estimate_cost(price, months)?))?
        }
        Commands::Curve { tier } => {
            let tier = find_tier(advisor, &tier)?;
            let chart = CurveChart {
                tier_id: &tier.id,
                samples: advisor.performance_curve(tier)?,
            };
            format.render(&chart)?
        }
        Commands::Compare { players } => {
            if players == 0 {
                return Err(AdvisorError::InvalidPlayerCount(players).into());
            }
            let table = ComparisonTable {
                player_count: players,
                tiers: advisor.compare_tiers(players),
            };
            format.render(&table)?
        }
    };

    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
