use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salmap::models::{
    ConfigOverrides, ElementShape, NormalizeMode, SaliencyConfig, CONFIG_ENV, DEFAULT_CONFIG_YAML,
};
use salmap::services::SaliencyService;

#[derive(Parser)]
#[command(name = "salmap")]
#[command(about = "Boolean Map saliency detection for RGB images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the saliency map of a PNG image
    Compute {
        /// Input image (8-bit RGB PNG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output grayscale PNG
        #[arg(short, long)]
        output: PathBuf,

        /// YAML config file (defaults to $SALMAP_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Threshold step on the 8-bit Lab scale
        #[arg(long)]
        step: Option<f32>,

        /// Opening iterations per boolean map (0 disables)
        #[arg(long)]
        opening_width: Option<u32>,

        /// Dilation iterations per attention map (0 disables)
        #[arg(long)]
        dilation_width: Option<u32>,

        /// Attention map normalization
        #[arg(long, value_enum)]
        normalize: Option<NormalizeMode>,

        /// Structuring element for morphology
        #[arg(long, value_enum)]
        element: Option<ElementShape>,

        /// Jitter flood-fill seeds inward from the image border
        #[arg(long)]
        handle_border: bool,

        /// RNG seed for border jitter
        #[arg(long)]
        seed: Option<u64>,

        /// Process units on all cores
        #[arg(long)]
        parallel: bool,

        /// Directory for intermediate images and per-channel logs
        #[arg(long)]
        artifacts: Option<PathBuf>,
    },
    /// Write a default config file
    Init {
        /// Where to write the config
        #[arg(long, default_value = "config.yaml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Compute {
            input,
            output,
            config,
            step,
            opening_width,
            dilation_width,
            normalize,
            element,
            handle_border,
            seed,
            parallel,
            artifacts,
        }) => {
            let overrides = ConfigOverrides {
                threshold_step: step,
                opening_width,
                dilation_width,
                normalize,
                handle_border,
                structuring_element: element,
                seed,
                parallel,
                artifacts_dir: artifacts,
            };
            run_compute_command(&input, &output, config.as_deref(), overrides)
        }
        Some(Commands::Init { path, force }) => run_init_command(&path, force),
        None => run_status_command(),
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salmap=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Compute a saliency map (no config file needed)
fn run_compute_command(
    input: &Path,
    output: &Path,
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> anyhow::Result<()> {
    init_logging();

    let mut config = SaliencyConfig::load(config_path)?;
    config.apply(overrides);

    let service = SaliencyService::new(config)?;
    let summary = service.run(input, output)?;

    println!(
        "Wrote {} ({}x{}, {} attention maps, seed {})",
        summary.output.display(),
        summary.width,
        summary.height,
        summary.units,
        summary.seed
    );
    Ok(())
}

/// Write the default config.yaml
fn run_init_command(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        eprintln!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
        std::process::exit(1);
    }
    std::fs::write(path, DEFAULT_CONFIG_YAML)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Display status and effective configuration
fn run_status_command() -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var(CONFIG_ENV).ok();

    println!("salmap v{VERSION} - Boolean Map saliency\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config = match SaliencyConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            println!("\nConfiguration could not be loaded: {e}");
            return Ok(());
        }
    };

    println!("\nEffective Configuration:");
    print!("{}", serde_yaml::to_string(&config)?);

    println!("\nRun 'salmap compute --help' to get started.");
    Ok(())
}
