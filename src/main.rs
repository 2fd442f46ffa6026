//! Healthdash
//!
//! Serves the healthcare dashboard, or renders its data from the command line.
//!
//! ```text
//! healthdash                                   # serve on 127.0.0.1:8050
//! healthdash serve --port 9000
//! healthdash summary
//! healthdash chart billing-distribution --gender Female --threshold 20000
//! healthdash config > healthdash.toml
//! ```

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use healthdash::api::{serve, AppState};
use healthdash::config::{generate_default_config, Config, LogFormat, LoggingConfig};
use healthdash::dashboard::{ChartId, ControlValues, Dashboard};
use healthdash::records::TableLoader;
use healthdash::stylesheet;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "healthdash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive dashboard over a healthcare records table")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./healthdash.toml or the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV file with the healthcare records
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard web server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the dataset summary as JSON
    Summary,

    /// Print one chart figure as JSON
    Chart {
        /// Chart id (age-distribution, condition-distribution, insurance-comparison,
        /// billing-distribution, admission-trends)
        chart: String,
        /// Gender filter
        #[arg(long)]
        gender: Option<String>,
        /// Billing threshold (default: median billing amount)
        #[arg(long)]
        threshold: Option<f64>,
        /// Trend chart type: line or bar
        #[arg(long)]
        chart_type: Option<String>,
        /// Medical condition filter
        #[arg(long)]
        condition: Option<String>,
    },

    /// Print a default config file
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    if let Commands::Config = command {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(data) = cli.data {
        config.data.path = data;
    }

    init_tracing(&config.logging);

    tracing::info!("Healthdash v{}", env!("CARGO_PKG_VERSION"));

    // The page needs its stylesheet; the JSON commands do not
    let css = match command {
        Commands::Serve { .. } => {
            let assets = &config.assets;
            stylesheet::compile_to_file(&assets.stylesheet, &assets.stylesheet_output)
                .with_context(|| {
                    format!(
                        "Failed to build stylesheet {:?} into {:?}",
                        assets.stylesheet, assets.stylesheet_output
                    )
                })?
        }
        _ => String::new(),
    };

    let table = TableLoader::new()
        .load(&config.data.path)
        .with_context(|| format!("Failed to load records from {:?}", config.data.path))?;
    let dashboard = Dashboard::new(table, &config.dashboard);

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.api.host = host;
            }
            if let Some(port) = port {
                config.api.port = port;
            }
            run_server(dashboard, config, css).await
        }
        Commands::Summary => {
            println!("{}", serde_json::to_string_pretty(dashboard.summary())?);
            Ok(())
        }
        Commands::Chart {
            chart,
            gender,
            threshold,
            chart_type,
            condition,
        } => {
            let id: ChartId = chart.parse().map_err(|e: String| anyhow!(e))?;
            let controls = ControlValues {
                gender,
                threshold,
                chart_type,
                condition,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&dashboard.render(id, &controls))?
            );
            Ok(())
        }
        Commands::Config => Ok(()),
    }
}

async fn run_server(dashboard: Dashboard, config: Config, css: String) -> anyhow::Result<()> {
    tracing::info!("Starting server on {}", config.api.addr());

    let state = AppState::new(dashboard, config.api.clone(), css);
    serve(state, &config.api).await?;

    tracing::info!("Healthdash stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level. Logs go to stderr so
/// `summary` and `chart` output stays clean.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("healthdash={},tower_http=info", logging.level))
    });

    let (pretty, json) = match logging.format {
        LogFormat::Pretty => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}
