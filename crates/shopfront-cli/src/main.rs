//! shopfront command line interface.
//!
//! Each command is one fetch/mutate-then-render cycle against the backend
//! and the local state directory, mirroring the storefront pages' event
//! handlers.

mod account;
mod browse;
mod cart;
mod render;
mod session;
mod stores;

use clap::{Parser, Subcommand};
use shopfront_api::SearchFilters;
use shopfront_core::load_app_config;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(about = "Storefront client: browse the catalog, manage the cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally filtered by search term, distance and price
    Browse {
        /// Free-text search term, forwarded to the backend as-is
        #[arg(long, default_value = "")]
        search: String,
        /// Distance bound, forwarded to the backend as-is
        #[arg(long, default_value = "")]
        distance: String,
        /// Price bound, forwarded to the backend as-is
        #[arg(long, default_value = "")]
        price: String,
        #[arg(long)]
        limit: Option<u32>,
        /// Render one "view details" line per product instead of its stores
        #[arg(long)]
        links_only: bool,
    },
    /// Search the catalog with an image file or URL
    ImageSearch {
        /// Path to a local image, or an http(s)/data URL passed through
        image: String,
    },
    /// List products near a location
    Nearby {
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Province/city name, instead of coordinates
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show the stores offering a product, with optional sorting
    Stores {
        product_id: i64,
        #[arg(long, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, requires = "lat")]
        lon: Option<f64>,
        /// Sort nearest first (with --by-price: equal-weight blend)
        #[arg(long)]
        by_distance: bool,
        /// Sort cheapest first (with --by-distance: equal-weight blend)
        #[arg(long)]
        by_price: bool,
    },
    /// Show the extended summary for one product
    Summary { product_id: i64 },
    /// Inspect or mutate the cart
    Cart {
        #[command(subcommand)]
        command: cart::CartCommands,
    },
    /// Show the signed-in account name, if any
    Account {
        /// Forget the stored session
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    let cli = Cli::parse();
    match cli.command {
        Commands::Browse {
            search,
            distance,
            price,
            limit,
            links_only,
        } => {
            let filters = SearchFilters {
                search,
                distance,
                price,
                limit,
            };
            browse::run_browse(&config, &filters, links_only).await
        }
        Commands::ImageSearch { image } => browse::run_image_search(&config, &image).await,
        Commands::Nearby {
            lat,
            lon,
            city,
            limit,
        } => browse::run_nearby(&config, lat.zip(lon), city, limit).await,
        Commands::Stores {
            product_id,
            lat,
            lon,
            by_distance,
            by_price,
        } => stores::run_stores(&config, product_id, lat.zip(lon), by_distance, by_price).await,
        Commands::Summary { product_id } => stores::run_summary(&config, product_id).await,
        Commands::Cart { command } => cart::run_cart(&config, command).await,
        Commands::Account { clear } => account::run_account(&config, clear),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn parses_browse_with_filters() {
        let cli = Cli::try_parse_from([
            "shopfront", "browse", "--search", "milk", "--distance", "5", "--price", "100000",
        ])
        .expect("expected valid cli args");

        match cli.command {
            Commands::Browse {
                search,
                distance,
                price,
                limit,
                links_only,
            } => {
                assert_eq!(search, "milk");
                assert_eq!(distance, "5");
                assert_eq!(price, "100000");
                assert_eq!(limit, None);
                assert!(!links_only);
            }
            other => panic!("expected Browse, got {other:?}"),
        }
    }

    #[test]
    fn browse_filters_default_to_empty_strings() {
        let cli = Cli::try_parse_from(["shopfront", "browse"]).expect("expected valid cli args");
        match cli.command {
            Commands::Browse {
                search,
                distance,
                price,
                ..
            } => {
                assert_eq!(search, "");
                assert_eq!(distance, "");
                assert_eq!(price, "");
            }
            other => panic!("expected Browse, got {other:?}"),
        }
    }

    #[test]
    fn parses_stores_with_sort_flags() {
        let cli = Cli::try_parse_from([
            "shopfront",
            "stores",
            "7",
            "--by-distance",
            "--by-price",
            "--lat",
            "16.05",
            "--lon",
            "108.2",
        ])
        .expect("expected valid cli args");

        match cli.command {
            Commands::Stores {
                product_id,
                lat,
                lon,
                by_distance,
                by_price,
            } => {
                assert_eq!(product_id, 7);
                assert_eq!(lat, Some(16.05));
                assert_eq!(lon, Some(108.2));
                assert!(by_distance);
                assert!(by_price);
            }
            other => panic!("expected Stores, got {other:?}"),
        }
    }

    #[test]
    fn stores_lat_requires_lon() {
        let result = Cli::try_parse_from(["shopfront", "stores", "7", "--lat", "16.05"]);
        assert!(result.is_err(), "--lat without --lon must be rejected");
    }

    #[test]
    fn nearby_city_conflicts_with_coordinates() {
        let result = Cli::try_parse_from([
            "shopfront", "nearby", "--city", "Huế", "--lat", "16.05", "--lon", "108.2",
        ]);
        assert!(result.is_err(), "--city with coordinates must be rejected");
    }

    #[test]
    fn parses_cart_add() {
        let cli = Cli::try_parse_from(["shopfront", "cart", "add", "1", "10", "--qty", "3"])
            .expect("expected valid cli args");
        assert!(matches!(
            cli.command,
            Commands::Cart {
                command: cart::CartCommands::Add {
                    product_id: 1,
                    store_id: 10,
                    qty: 3
                }
            }
        ));
    }

    #[test]
    fn parses_cart_clear() {
        let cli =
            Cli::try_parse_from(["shopfront", "cart", "clear"]).expect("expected valid cli args");
        assert!(matches!(
            cli.command,
            Commands::Cart {
                command: cart::CartCommands::Clear
            }
        ));
    }
}
