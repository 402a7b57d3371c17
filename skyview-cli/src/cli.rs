use anyhow::{Context, anyhow, bail};
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use skyview_core::{
    Config, Coordinates, Location, WeatherProvider, load_dashboard, provider::provider_from_config,
};
use tracing::{info, warn};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyview", version, about = "Weather dashboard for the terminal")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard for a city, coordinates, or the default location.
    Show {
        /// City name to search for.
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,

        /// Latitude in decimal degrees.
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude in decimal degrees.
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,

        /// Print the dashboard as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Search for locations by name.
    Search {
        /// City name, e.g. "Berlin".
        query: String,
    },

    /// Choose and store the default location.
    Configure {
        /// City name; prompted for when omitted.
        query: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;
        let provider = provider_from_config(&config)?;

        match self.command {
            Command::Show {
                city,
                lat,
                lon,
                json,
            } => {
                let location =
                    resolve_location(provider.as_ref(), &config, city.as_deref(), lat, lon)
                        .await?;
                info!(location = %location, "Loading dashboard");

                let dashboard =
                    load_dashboard(provider.as_ref(), location.coordinates(), config.limits())
                        .await
                        .context("Failed to load weather data")?;

                if json {
                    println!("{}", serde_json::to_string_pretty(&dashboard)?);
                } else {
                    print!("{}", render::dashboard(&location, &dashboard)?);
                }
            }
            Command::Search { query } => {
                let results = provider.search_locations(&query).await?;
                print!("{}", render::locations(&results)?);
            }
            Command::Configure { query } => {
                let query = match query {
                    Some(q) => q,
                    None => Text::new("City name:").prompt()?,
                };

                let results = provider.search_locations(&query).await?;
                if results.is_empty() {
                    bail!("No locations found matching '{query}'.");
                }

                let choice = Select::new("Choose your default location:", results).prompt()?;
                config.set_default_location(choice.clone());
                config.save()?;

                println!(
                    "Default location set to {} (saved to {}).",
                    choice,
                    Config::config_file_path()?.display()
                );
            }
        }

        Ok(())
    }
}

/// Explicit coordinates win, then a city search, then the configured default.
///
/// Coordinates are named by reverse geocoding when possible.
async fn resolve_location(
    provider: &dyn WeatherProvider,
    config: &Config,
    city: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
) -> anyhow::Result<Location> {
    if let (Some(lat), Some(lon)) = (lat, lon) {
        let coordinates = Coordinates::new(lat, lon);
        if !coordinates.is_valid() {
            bail!("Coordinates out of range: {lat}, {lon}");
        }
        let named = provider
            .reverse_geocode(coordinates)
            .await
            .inspect_err(|err| warn!(error = %err, "Reverse geocoding failed"))
            .ok()
            .flatten();
        return Ok(named.unwrap_or_else(|| Location::unknown(coordinates)));
    }

    if let Some(city) = city {
        return provider
            .search_locations(city)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No location found matching '{city}'."));
    }

    Ok(config.location_or_fallback())
}
