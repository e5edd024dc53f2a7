use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use newplugin::{FileGenerator, GeneratorConfig, ParameterSet};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of plugin provider (btcm for plugins developed by Bitcoin Music)
    provider: String,

    /// Name of plugin to create
    name: String,

    /// Path to a YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            GeneratorConfig::load(path).context("Failed to load config")?
        }
        None => GeneratorConfig::default(),
    };
    let registry = config.registry().context("Failed to load templates")?;

    let params = ParameterSet::plugin(cli.provider, cli.name.as_str());
    let output_dir = config.plugin_dir(&cli.name);

    let written = FileGenerator::new(&output_dir)
        .render(&registry, &params)
        .with_context(|| format!("Failed to generate plugin in {:?}", output_dir))?;

    info!("✓ Generated {} files in {:?}", written.len(), output_dir);

    Ok(())
}
