use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use iconsmith::{generate_all, AssetKind, IconConfig};

/// Generate favicons, app icons and SVG badges for the web build
#[derive(Parser, Debug)]
#[command(name = "iconsmith", version, about)]
struct Cli {
    /// JSON file overriding the built-in label, colors, directories or fonts
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the web/ layout is created under
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Badge label, applied after --config
    #[arg(long)]
    label: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => IconConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => IconConfig::default(),
    };
    if let Some(label) = cli.label {
        config.label = label;
    }

    println!("Generating icons for \"{}\"...", config.label);
    println!("{}", "=".repeat(50));

    let assets = generate_all(&config, &cli.root, |asset| match asset.kind {
        AssetKind::Ico => println!("Created: {}", asset.path.display()),
        _ => println!("Created: {} ({})", asset.path.display(), asset.describe()),
    })
    .with_context(|| format!("icon generation under {} failed", cli.root.display()))?;

    println!("{}", "=".repeat(50));
    println!("Icon generation complete!");
    println!("\nGenerated files:");
    for asset in &assets {
        let note = match asset.kind {
            AssetKind::Png => "Transparent PNG",
            AssetKind::Ico => "multi-size",
            AssetKind::Svg => "Vector",
        };
        println!("- {} ({}) - {}", asset.path.display(), asset.describe(), note);
    }
    println!("\nTo apply changes:");
    println!("1. Run 'flutter clean'");
    println!("2. Run 'flutter build web'");
    println!("3. Test in browser");

    Ok(())
}
