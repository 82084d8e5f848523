//! Demo CLI for the Eloverblik client
//!
//! Lists metering points or authorizations for the supplied refresh token
//! and fetches a short hourly time series, printing results as tables.
//!
//! ```text
//! ELOVERBLIK_REFRESH_TOKEN=... eloverblik-demo --mode customer
//! ```

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::{Parser, ValueEnum};
use prettytable::{row, Table};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use eloverblik::models::{Authorization, MeteringPoint, MyEnergyDataMarketDocument};
use eloverblik::{
    Aggregation, AuthorizationScope, ClientConfig, CustomerClient, ThirdPartyClient,
};

/// Which API surface to exercise.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum Mode {
    /// Access your own data with a customer refresh token
    Customer,
    /// Access delegated data with a third-party refresh token
    #[value(name = "thirdparty")]
    ThirdParty,
}

/// Eloverblik demo - fetch metering data from the Danish DataHub
#[derive(Parser, Debug)]
#[command(name = "eloverblik-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// API surface to exercise
    #[arg(short, long, value_enum, default_value = "customer")]
    mode: Mode,

    /// Refresh token from the Eloverblik portal
    #[arg(short, long, env = "ELOVERBLIK_REFRESH_TOKEN", hide_env_values = true)]
    token: String,

    /// Base URL of the API
    #[arg(long, env = "ELOVERBLIK_API_URL")]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "ELOVERBLIK_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    let mut config = ClientConfig::new();
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config = config.with_timeout_secs(timeout_secs);
    }

    match cli.mode {
        Mode::Customer => run_customer(&cli.token, config).await,
        Mode::ThirdParty => run_third_party(&cli.token, config).await,
    }
}

async fn run_customer(token: &str, config: ClientConfig) -> Result<()> {
    let client =
        CustomerClient::with_config(token, config).context("Failed to build customer client")?;

    let alive = client.is_alive().await.context("Health check failed")?;
    tracing::info!(alive, "Customer API health");

    let points = client
        .get_metering_points(false)
        .await
        .context("Failed to list metering points")?;
    print_metering_points(&points);

    let first_id = match points
        .iter()
        .find_map(|point| point.base.metering_point_id.clone())
    {
        Some(id) => id,
        None => {
            println!("No metering points linked to this account.");
            return Ok(());
        }
    };

    let ids = vec![first_id.clone()];
    let details = client
        .get_details(&ids)
        .await
        .context("Failed to fetch metering point details")?;
    if let Some(detail) = details.first() {
        println!(
            "Details for {}: grid operator {}, status {}",
            first_id,
            detail.grid_operator_name.as_deref().unwrap_or("unknown"),
            detail.physical_status_of_mp.as_deref().unwrap_or("unknown"),
        );
    }

    let to_date = Utc::now().date_naive();
    let from_date = to_date - Duration::days(2);
    let documents = client
        .get_time_series(&ids, from_date, to_date, Aggregation::Hour)
        .await
        .context("Failed to fetch time series")?;
    print_time_series(&documents);

    Ok(())
}

async fn run_third_party(token: &str, config: ClientConfig) -> Result<()> {
    let client = ThirdPartyClient::with_config(token, config)
        .context("Failed to build third-party client")?;

    let alive = client.is_alive().await.context("Health check failed")?;
    tracing::info!(alive, "Third-party API health");

    let authorizations = client
        .get_authorizations()
        .await
        .context("Failed to list authorizations")?;
    print_authorizations(&authorizations);

    let first_id = match authorizations
        .iter()
        .find_map(|auth| auth.authorization_id.clone())
    {
        Some(id) => id,
        None => {
            println!("No active authorizations.");
            return Ok(());
        }
    };

    let ids = client
        .get_metering_point_ids(AuthorizationScope::AuthorizationId, &first_id)
        .await
        .context("Failed to resolve metering point ids")?;
    println!(
        "Authorization {} covers {} metering points",
        first_id,
        ids.len()
    );

    if ids.is_empty() {
        return Ok(());
    }

    let to_date = Utc::now().date_naive();
    let from_date = to_date - Duration::days(2);
    let documents = client
        .get_time_series(&ids, from_date, to_date, Aggregation::Hour)
        .await
        .context("Failed to fetch time series")?;
    print_time_series(&documents);

    Ok(())
}

/// Output metering points in table format
fn print_metering_points(points: &[MeteringPoint]) {
    let mut table = Table::new();
    table.add_row(row!["Metering Point", "Type", "Address", "City", "Linked"]);

    for point in points {
        let address = format!(
            "{} {}",
            point.base.street_name.as_deref().unwrap_or(""),
            point.base.building_number.as_deref().unwrap_or("")
        );
        table.add_row(row![
            point.base.metering_point_id.as_deref().unwrap_or("-"),
            point.base.type_of_mp.as_deref().unwrap_or("-"),
            address.trim(),
            point.base.city_name.as_deref().unwrap_or("-"),
            if point.has_relation { "Yes" } else { "No" }
        ]);
    }

    println!("\nMetering points ({}):\n", points.len());
    table.printstd();
    println!();
}

/// Output authorizations in table format
fn print_authorizations(authorizations: &[Authorization]) {
    let mut table = Table::new();
    table.add_row(row!["Authorization", "Customer", "CVR", "Valid To"]);

    for auth in authorizations {
        table.add_row(row![
            auth.authorization_id.as_deref().unwrap_or("-"),
            auth.customer_name.as_deref().unwrap_or("-"),
            auth.customer_cvr.as_deref().unwrap_or("-"),
            auth.valid_to.as_deref().unwrap_or("-")
        ]);
    }

    println!("\nActive authorizations ({}):\n", authorizations.len());
    table.printstd();
    println!();
}

/// Output time series totals and a short sample in table format
fn print_time_series(documents: &[MyEnergyDataMarketDocument]) {
    let mut table = Table::new();
    table.add_row(row!["Metering Point", "Unit", "Values", "Total"]);

    for document in documents {
        for series in document.time_series.iter().flatten() {
            let mut count = 0usize;
            let mut total = 0.0f64;
            for period in series.periods.iter().flatten() {
                for point in period.points.iter().flatten() {
                    count += 1;
                    if let Some(quantity) = point.quantity.as_deref() {
                        total += quantity.parse::<f64>().unwrap_or(0.0);
                    }
                }
            }

            table.add_row(row![
                series.mrid.as_deref().unwrap_or("-"),
                series.measurement_unit_name.as_deref().unwrap_or("-"),
                count,
                format!("{:.3}", total)
            ]);
        }
    }

    println!("\nTime series ({} documents):\n", documents.len());
    table.printstd();
    println!();

    let sample = documents
        .first()
        .and_then(|document| document.time_series.as_ref())
        .and_then(|series| series.first())
        .and_then(|series| series.periods.as_ref())
        .and_then(|periods| periods.first())
        .and_then(|period| period.points.as_ref());
    if let Some(points) = sample {
        println!("First period sample:");
        for point in points.iter().take(3) {
            println!(
                "  position {:>2}: {} ({})",
                point.position.as_deref().unwrap_or("-"),
                point.quantity.as_deref().unwrap_or("-"),
                point.quality.as_deref().unwrap_or("-")
            );
        }
        println!();
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eloverblik=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
