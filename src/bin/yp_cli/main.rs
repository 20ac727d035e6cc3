// ABOUTME: yp-cli - command-line client for the Yellow Pages business directory
// ABOUTME: Nearby search, distance and navigation links, business quota checks and session state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Yellow Pages Directory
//!
//! Usage:
//! ```bash
//! # Distance between two points
//! yp-cli distance --from=-4.3217,15.3125 --to=-11.6609,27.4794
//!
//! # Businesses within 5 km, from the backend or a local JSON file
//! yp-cli nearby --origin=-4.3217,15.3125 --radius 5
//! yp-cli nearby --origin=-4.3217,15.3125 --file businesses.json --query bakery
//!
//! # May I add another business on this plan?
//! yp-cli limit --plan pro.json --used 3
//! yp-cli login --token <TOKEN> && yp-cli allowance
//!
//! # Directions link
//! yp-cli navigate --business 42 --provider apple
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use yellowpages::config::environment::DirectoryConfig;
use yellowpages::errors::{AppError, ErrorResponse, GeoError, LimitError};
use yellowpages::intelligence::NavigationProvider;
use yellowpages::logging::LoggingConfig;
use yellowpages::models::{BusinessId, Coordinate};

use commands::Context;
use helpers::display::print_json;

#[derive(Parser)]
#[command(
    name = "yp-cli",
    version,
    about = "Yellow Pages directory client",
    long_about = "Find businesses near you, check your plan's business quota and open directions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Great-circle distance between two coordinates
    Distance {
        /// Start as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        from: Coordinate,

        /// End as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Businesses within a radius, nearest first
    Nearby {
        /// Your position as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        origin: Coordinate,

        /// Search radius in kilometers (defaults to `YP_DEFAULT_RADIUS_KM`)
        #[arg(long)]
        radius: Option<f64>,

        /// Only keep businesses whose name, category or city contains this text
        #[arg(long, short = 'q')]
        query: Option<String>,

        /// Read businesses from a JSON file instead of the backend
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Every business, with distance when your position is given
    List {
        /// Your position as "lat,lon"
        #[arg(long, allow_hyphen_values = true)]
        origin: Option<Coordinate>,

        /// Read businesses from a JSON file instead of the backend
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Directions link to a coordinate or a business
    Navigate {
        /// Destination as "lat,lon"
        #[arg(
            long,
            allow_hyphen_values = true,
            conflicts_with = "business",
            required_unless_present = "business"
        )]
        to: Option<Coordinate>,

        /// Destination business id
        #[arg(long)]
        business: Option<BusinessId>,

        /// Map application (google, apple, osm); defaults to `YP_NAVIGATION_PROVIDER`
        #[arg(long)]
        provider: Option<NavigationProvider>,

        /// Read businesses from a JSON file instead of the backend
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Evaluate a business quota offline
    Limit {
        /// Plan as a JSON file; omit for the free tier
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Number of businesses already owned
        #[arg(long, allow_hyphen_values = true)]
        used: i64,
    },

    /// Subscription plans on offer
    Plans,

    /// Whether the signed-in user may add another business
    Allowance,

    /// Store a session token
    Login {
        /// Bearer token issued by the backend
        #[arg(long)]
        token: String,
    },

    /// Forget the session token and browsing history
    Logout,

    /// Show recent searches and recently viewed businesses
    History {
        /// Clear both lists instead
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = DirectoryConfig::from_env()?;
    debug!(?config, "Starting yp-cli");
    let ctx = Context::new(config, cli.json);

    let outcome = run(&ctx, cli.command).await;
    if let (Err(err), true) = (&outcome, ctx.json) {
        if let Some(response) = error_response(err) {
            print_json(&response)?;
        }
    }
    outcome
}

/// JSON error body for errors raised by the directory crates
fn error_response(err: &anyhow::Error) -> Option<ErrorResponse> {
    err.downcast_ref::<AppError>()
        .map(ErrorResponse::from)
        .or_else(|| {
            err.downcast_ref::<GeoError>()
                .map(|e| ErrorResponse::from(&AppError::from(*e)))
        })
        .or_else(|| {
            err.downcast_ref::<LimitError>()
                .map(|e| ErrorResponse::from(&AppError::from(*e)))
        })
}

async fn run(ctx: &Context, command: Command) -> Result<()> {
    match command {
        Command::Distance { from, to } => commands::geo::distance(ctx, from, to)?,
        Command::Nearby {
            origin,
            radius,
            query,
            file,
        } => {
            commands::directory::nearby(ctx, origin, radius, query.as_deref(), file.as_deref())
                .await?;
        }
        Command::List { origin, file } => {
            commands::directory::list(ctx, origin, file.as_deref()).await?;
        }
        Command::Navigate {
            to,
            business,
            provider,
            file,
        } => {
            let provider = provider.unwrap_or(ctx.config.navigation_provider);
            match (to, business) {
                (_, Some(id)) => {
                    commands::geo::navigate_to_business(ctx, id, provider, file.as_deref())
                        .await?;
                }
                (Some(to), None) => commands::geo::navigate_to(ctx, to, provider)?,
                (None, None) => bail!("Pass --to or --business"),
            }
        }
        Command::Limit { plan, used } => {
            commands::limits::limit(ctx, plan.as_deref(), used).await?;
        }
        Command::Plans => commands::limits::plans(ctx).await?,
        Command::Allowance => commands::limits::allowance(ctx).await?,
        Command::Login { token } => commands::account::login(ctx, &token).await?,
        Command::Logout => commands::account::logout(ctx).await?,
        Command::History { clear } => commands::account::history(ctx, clear).await?,
    }

    Ok(())
}
