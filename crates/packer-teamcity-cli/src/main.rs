use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use packer_teamcity_core::{BuildArtifact, PostProcessor, Ui, WriterUi};

mod args;

fn main() -> Result<()> {
    // Stdout carries the service messages; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = args::Args::parse();

    let mut raws = Vec::with_capacity(args.configs.len() + 1);
    for path in &args.configs {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let raw: Value = serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON in config: {}", path.display()))?;
        raws.push(raw);
    }
    raws.push(args.host_fragment());
    debug!(fragments = raws.len(), "loaded configuration fragments");

    let mut post_processor = PostProcessor::new();
    post_processor
        .configure(&raws)
        .context("failed to configure post-processor")?;

    let artifact = BuildArtifact::new(args.builder_id, args.artifact_id);
    let mut ui = WriterUi::stdout();
    post_processor
        .post_process(&mut ui, &artifact)
        .with_context(|| format!("failed to post-process artifact `{}`", artifact.id))?;

    if args.print_output {
        if let Some(config) = post_processor.config() {
            ui.message(&config.output_path);
        }
    }

    Ok(())
}
