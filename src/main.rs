use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nirclean::models::{AppConfig, ByteOrder};
use nirclean::services::{CleanPipeline, CleanRequest};
use speck_removal::{DegeneratePolicy, Kernel, Visualization};

#[derive(Parser)]
#[command(name = "nirclean")]
#[command(about = "Remove bright specks from 16-bit near-infrared scans")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Remove specks from a raw 16-bit plane and write a grayscale PNG
    Clean {
        /// Headerless 16-bit input plane
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// YAML config file (flags below override it)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Image height in samples
        #[arg(long)]
        rows: Option<usize>,

        /// Image width in samples
        #[arg(long)]
        cols: Option<usize>,

        /// Radial kernel side length (odd)
        #[arg(short, long, allow_negative_numbers = true)]
        kernel_size: Option<i32>,

        /// Tone mapping: saturate-cast, normalize-min-max, equalize-histogram
        #[arg(short, long)]
        visualization: Option<Visualization>,

        /// Scale applied to the repair estimate
        #[arg(long)]
        normalization: Option<f64>,

        /// Also write the unrepaired input, tone mapped the same way
        #[arg(long)]
        raw_output: Option<PathBuf>,

        /// Also write the speck mask (specks white)
        #[arg(long)]
        mask_output: Option<PathBuf>,

        /// Samples are big-endian
        #[arg(long)]
        big_endian: bool,

        /// Abort when a speck has no clean neighbors instead of keeping it
        #[arg(long)]
        fail_on_degenerate: bool,

        /// Re-compress PNG output with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Print the normalized radial kernel
    Kernel {
        /// Side length (odd)
        #[arg(allow_negative_numbers = true)]
        size: i32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nirclean=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Clean {
            input,
            output,
            config,
            rows,
            cols,
            kernel_size,
            visualization,
            normalization,
            raw_output,
            mask_output,
            big_endian,
            fail_on_degenerate,
            optimize,
        } => {
            let mut app_config = AppConfig::load_or_default(config.as_deref())?;
            if rows.is_some() {
                app_config.rows = rows;
            }
            if cols.is_some() {
                app_config.cols = cols;
            }
            if let Some(size) = kernel_size {
                app_config.kernel_size = size;
            }
            if let Some(mode) = visualization {
                app_config.visualization = mode;
            }
            if let Some(scale) = normalization {
                app_config.normalization = scale;
            }
            if big_endian {
                app_config.byte_order = ByteOrder::Big;
            }
            if fail_on_degenerate {
                app_config.degenerate = DegeneratePolicy::Fail;
            }
            if optimize {
                app_config.optimize_png = true;
            }

            let request = CleanRequest {
                input,
                output,
                raw_output,
                mask_output,
            };
            run_clean_command(app_config, &request)
        }
        Commands::Kernel { size } => run_kernel_command(size),
    }
}

fn run_clean_command(config: AppConfig, request: &CleanRequest) -> anyhow::Result<()> {
    let pipeline = CleanPipeline::new(config)?;
    let summary = pipeline.run(request)?;

    println!(
        "Cleaned {} ({}): {} speck pixel(s) repaired, {} left without clean neighbors",
        request.input.display(),
        summary.dims,
        summary.specks - summary.degenerate,
        summary.degenerate
    );
    println!("  Output: {}", request.output.display());
    if let Some(path) = &request.raw_output {
        println!("  Raw:    {}", path.display());
    }
    if let Some(path) = &request.mask_output {
        println!("  Mask:   {}", path.display());
    }
    Ok(())
}

fn run_kernel_command(size: i32) -> anyhow::Result<()> {
    let kernel = Kernel::new(size)?;
    for row in kernel.weights().chunks(kernel.size()) {
        let cells: Vec<String> = row.iter().map(|w| format!("{:.5}", w)).collect();
        println!("{}", cells.join("  "));
    }
    println!("sum = {:.6}", kernel.sum());
    Ok(())
}
