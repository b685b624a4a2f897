//! Command-line entry point: serve the JSON API or export a grid offline.
//!
//! ```sh
//! charge-field serve --port 5000
//! charge-field grid charges.json --format vtk --output field.vtk
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::Context;
use charge_field::api::{serve, ServerConfig};
use charge_field::constants::{
    DEFAULT_GRID_SOFTENING, DEFAULT_HALF_EXTENT, DEFAULT_RESOLUTION,
};
use charge_field::fields::Charge;
use charge_field::grid::{compute_grid, evaluate_grid};
use charge_field::io::{write_field, ExportFormat};
use clap::{ArgAction, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "charge-field")]
#[command(about = "Electric field and potential of 2-D point charges")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the JSON API.
    Serve {
        /// Interface to bind; use 0.0.0.0 to expose the server remotely.
        #[arg(long, env = "HOST", default_value = "127.0.0.1")]
        host: IpAddr,

        /// TCP port to bind.
        #[arg(long, env = "PORT", default_value_t = 5000)]
        port: u16,

        /// Verbose logging (1/true/yes enable it, anything else disables it).
        #[arg(long, env = "DEBUG", default_value = "true", value_parser = parse_flag, action = ArgAction::Set)]
        debug: bool,

        /// Directory containing frontend assets.
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Evaluate a charge file over a grid and write the result.
    Grid {
        /// JSON array of `{"q", "x", "y"}` objects.
        charges: PathBuf,

        /// Left edge of the box.
        #[arg(long, default_value_t = -DEFAULT_HALF_EXTENT, allow_hyphen_values = true)]
        xmin: f64,
        /// Right edge of the box.
        #[arg(long, default_value_t = DEFAULT_HALF_EXTENT, allow_hyphen_values = true)]
        xmax: f64,
        /// Bottom edge of the box.
        #[arg(long, default_value_t = -DEFAULT_HALF_EXTENT, allow_hyphen_values = true)]
        ymin: f64,
        /// Top edge of the box.
        #[arg(long, default_value_t = DEFAULT_HALF_EXTENT, allow_hyphen_values = true)]
        ymax: f64,

        /// Samples per axis.
        #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
        resolution: usize,

        /// Softening length.
        #[arg(long, default_value_t = DEFAULT_GRID_SOFTENING)]
        softening: f64,

        /// Output layout.
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}

fn init_logging(debug: bool) {
    let default_filter = if debug {
        "charge_field=debug,tower_http=debug"
    } else {
        "charge_field=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            debug,
            static_dir,
        } => {
            init_logging(debug);
            serve(ServerConfig {
                bind: SocketAddr::new(host, port),
                static_dir,
            })
            .await
        }
        Commands::Grid {
            charges,
            xmin,
            xmax,
            ymin,
            ymax,
            resolution,
            softening,
            format,
            output,
        } => {
            init_logging(false);
            let file = File::open(&charges)
                .with_context(|| format!("failed to open {}", charges.display()))?;
            let charge_list: Vec<Charge> = serde_json::from_reader(io::BufReader::new(file))
                .with_context(|| format!("failed to parse charges from {}", charges.display()))?;
            info!(charges = charge_list.len(), resolution, "exporting grid");

            let grid = compute_grid(xmin, xmax, ymin, ymax, resolution, resolution)?;
            // Evaluate before touching the output so a bad charge file leaves it intact.
            let field = evaluate_grid(grid, &charge_list, softening)?;
            let mut writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?,
                )),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            write_field(&mut writer, &field, format)?;
            writer.flush()?;
            Ok(())
        }
    }
}
