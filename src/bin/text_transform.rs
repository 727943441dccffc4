use anyhow::Context;
use clap::Parser;
use playtext::utils::logger;
use playtext::{CliConfig, TextPipeline, TransformEngine};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = config.resolve().context("invalid configuration")?;

    let pipeline = TextPipeline::new(settings.input, settings.format)?;
    let engine = TransformEngine::new(pipeline);

    let output = engine.run().context("text transform failed")?;
    writeln!(io::stdout().lock(), "{}", output).context("failed to write to stdout")?;

    Ok(())
}
