use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use web_images::config::{self, ConfigOverrides};
use web_images::fetch::HttpFetcher;
use web_images::sources::IMAGE_SOURCES;
use web_images::{output, process};

#[derive(Parser)]
#[command(name = "web-images")]
#[command(about = "Download every named image and save a compressed version for the web")]
#[command(long_about = "\
Download every named image and save a compressed version for the web

Each image is fetched, downscaled to fit within --max-width x --max-height
(never upscaled), re-encoded and written as <output-dir>/<slug>.<format>.
Images whose output file already exists are skipped unless --force is given.

Settings are read from web-images.toml in the current directory (or the
file given with --config); command-line flags override the file.

Run 'web-images gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Config file [default: web-images.toml, if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print diagnostic logs to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Download and compress every image (default)
    Fetch,
    /// List every image, its output path and whether it would be downloaded
    Check,
    /// Print a stock config file with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Fetch) {
        Command::Fetch => {
            let config = load_config(cli.config.as_deref(), &cli.overrides)?;
            tracing::debug!(?config, "resolved config");
            let fetcher = HttpFetcher::new(config.timeout())?;
            process::run(IMAGE_SOURCES, &config, &fetcher, output::print_process_event)?;
        }
        Command::Check => {
            let config = load_config(cli.config.as_deref(), &cli.overrides)?;
            let planned = process::plan(IMAGE_SOURCES, &config);
            output::print_check_output(&planned);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load_config(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<config::FetchConfig, Box<dyn std::error::Error>> {
    let working_dir = std::env::current_dir()?;
    Ok(config::load_config(
        &working_dir,
        config_file,
        overrides,
    )?)
}

/// Diagnostics go to stderr so stdout stays the progress log.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "web_images=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
