use anyhow::Context;
use celestial_healpix::{InterleaveTables, Nside, Scheme};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "healpix-convert")]
#[command(about = "Convert HEALPix pixel indices between RING and NESTED ordering")]
#[command(version)]
struct Cli {
    /// Resolution parameter (power of two, at most 8192)
    #[arg(long)]
    nside: i64,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert RING indices to NESTED
    Ring2nest {
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<i64>,
    },
    /// Convert NESTED indices to RING
    Nest2ring {
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<i64>,
    },
    /// Print pixel counts for the resolution
    Info,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let nside = Nside::new(cli.nside)?;

    match cli.command {
        Commands::Ring2nest { indices } => {
            convert_all(nside, &indices, Scheme::Ring, Scheme::Nested)?
        }
        Commands::Nest2ring { indices } => {
            convert_all(nside, &indices, Scheme::Nested, Scheme::Ring)?
        }
        Commands::Info => {
            println!("nside:           {}", nside);
            println!("order:           {}", nside.order());
            println!("npix:            {}", nside.npix());
            println!("pixels per face: {}", nside.pixels_per_face());
        }
    }

    Ok(())
}

fn convert_all(nside: Nside, indices: &[i64], from: Scheme, to: Scheme) -> anyhow::Result<()> {
    let tables = InterleaveTables::shared();
    for &ipix in indices {
        let converted = tables
            .convert(nside.get(), ipix, from, to)
            .with_context(|| format!("converting {} index {} to {}", from, ipix, to))?;
        println!("{}", converted);
    }
    Ok(())
}
