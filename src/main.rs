use clap::Parser;
use log::info;
use packslip::{PackingSlipBuilder, PipelineError};
use std::path::PathBuf;

/// Generate a packing-slip PDF from a shipment export.
#[derive(Parser, Debug)]
#[command(name = "packslip", version, about)]
struct Args {
    /// Shipments as JSON (an array, or an object with a `shipments` array)
    shipments: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    /// Slip configuration (labels, store settings, customer groups)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Media directory holding `sales/store/logo/...`
    #[arg(short, long)]
    media_dir: Option<PathBuf>,

    /// Document title
    #[arg(long, default_value = "Pakbonnen")]
    title: String,
}

fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut builder = PackingSlipBuilder::new().with_title(&args.title);
    if let Some(config) = &args.config {
        info!("Loading config from {}", config.display());
        builder = builder.with_config_file(config)?;
    }
    if let Some(media_dir) = &args.media_dir {
        builder = builder.with_media_dir(media_dir);
    }
    let generator = builder.build()?;

    info!("Reading shipments from {}", args.shipments.display());
    let pages = generator.generate_from_json_file(&args.shipments, &args.output)?;

    info!("Wrote {} page(s) to {}", pages, args.output.display());
    Ok(())
}
