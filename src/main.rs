use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};

use dy_widgets::catalog::{self, legacy, CatalogVersion, WidgetCatalog, WidgetName};
use dy_widgets::config::Config;
use dy_widgets::infra::{HttpWidgetRepository, InMemoryWidgetRepository};
use dy_widgets::repository::{WidgetRepository, WidgetSelection};
use dy_widgets::templates::CardPromotionProperties;
use dy_widgets::{logging, metrics};

#[derive(Parser)]
#[command(name = "dy_widgets")]
#[command(about = "DY widget catalogs and choice requests")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a widget catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },
    /// Resolve widget choices for the given selectors
    Choose {
        /// Selectors to resolve (e.g. offers-2 stories)
        #[arg(required = true)]
        selectors: Vec<String>,
        /// Catalog the selectors belong to
        #[arg(long, value_enum, default_value_t = CatalogVersion::V2)]
        catalog: CatalogVersion,
        /// Use an empty in-memory repository instead of the remote service
        #[arg(long)]
        offline: bool,
        /// Path to the config file
        #[arg(long, default_value = dy_widgets::constants::DEFAULT_CONFIG_PATH)]
        config: String,
    },
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// List every widget with its selector
    List {
        #[arg(long, value_enum, default_value_t = CatalogVersion::V2)]
        catalog: CatalogVersion,
    },
    /// Find the widget addressed by a selector
    Lookup {
        selector: String,
        #[arg(long, value_enum, default_value_t = CatalogVersion::V2)]
        catalog: CatalogVersion,
    },
}

fn list_widgets<C: WidgetCatalog>() {
    for widget in C::iter() {
        println!("{}\t{}", widget.name(), widget.selector());
    }
}

fn lookup_widget<C: WidgetCatalog>(selector: &str) -> bool {
    match C::from_selector(selector) {
        Some(widget) => {
            println!("{}", widget.name());
            true
        }
        None => {
            warn!(selector, catalog = %C::VERSION, "Selector not found");
            println!("not found: '{}' in catalog {}", selector, C::VERSION);
            false
        }
    }
}

async fn choose<C: WidgetCatalog>(
    selectors: &[String],
    offline: bool,
    config_path: &str,
) -> anyhow::Result<()> {
    let selection = WidgetSelection::<C>::from_selectors(selectors)?;

    let repository: Box<dyn WidgetRepository<C>> = if offline {
        info!("Offline mode, using in-memory repository");
        Box::new(InMemoryWidgetRepository::new())
    } else {
        let config = Config::load_from(config_path)?;
        Box::new(HttpWidgetRepository::new(&config.dy)?)
    };

    let choices = repository.choose_widgets(&selection).await?;

    for choice in &choices {
        if choice.widget::<WidgetName>() == Some(WidgetName::CreditCardPromotion) {
            match CardPromotionProperties::from_choice(choice) {
                Ok(properties) => info!(?properties, "Card promotion properties"),
                Err(e) => warn!("Card promotion payload rejected: {}", e),
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(&choices)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();
    let _guard = logging::init_logging();
    metrics::init_metrics();

    catalog::validate_catalogs()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogCommand::List { catalog } => match catalog {
                CatalogVersion::V1 => list_widgets::<legacy::WidgetName>(),
                CatalogVersion::V2 => list_widgets::<WidgetName>(),
            },
            CatalogCommand::Lookup { selector, catalog } => {
                let found = match catalog {
                    CatalogVersion::V1 => lookup_widget::<legacy::WidgetName>(&selector),
                    CatalogVersion::V2 => lookup_widget::<WidgetName>(&selector),
                };
                if !found {
                    return Ok(ExitCode::FAILURE);
                }
            }
        },
        Commands::Choose {
            selectors,
            catalog,
            offline,
            config,
        } => match catalog {
            CatalogVersion::V1 => choose::<legacy::WidgetName>(&selectors, offline, &config).await?,
            CatalogVersion::V2 => choose::<WidgetName>(&selectors, offline, &config).await?,
        },
    }

    Ok(ExitCode::SUCCESS)
}
