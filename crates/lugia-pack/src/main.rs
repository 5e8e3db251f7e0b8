//! lugia-pack - Assemble the publishable Lugia contract artifact bundle.

use clap::Parser;
use lugia_packager::{PackLayout, Packager};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "lugia-pack")]
#[command(
    author,
    version,
    about = "Collect contract artifacts and metadata into a publishable output directory"
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Repository root containing README.md, package.json and packages/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Output directory (defaults to <root>/output)
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Also write an npm-style tarball of the output directory
    #[arg(long)]
    archive: Option<PathBuf>,

    /// Print the run report as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut layout = PackLayout::new(cli.root);
    if let Some(out) = cli.out {
        layout = layout.with_output_dir(out);
    }

    let mut packager = Packager::new(layout);
    if let Some(archive) = cli.archive {
        packager = packager.with_archive(archive);
    }

    let report = packager.run()?;

    info!(
        "Packed {} packages ({} files, {} debug files pruned) into {:?} as version {}",
        report.packages.len(),
        report.files_copied().saturating_sub(report.files_pruned()),
        report.files_pruned(),
        report.output_dir,
        report.version
    );
    if let Some(ref archive) = report.archive {
        info!("Archive {:?} sha256 {}", archive.path, archive.sha256);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
