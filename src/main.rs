//! tracegen CLI entry point

use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use tracegen::candidates::load_candidates;
use tracegen::config::{cli::Cli, toml::load_config, validator::validate_config, Config, OutputFormat};
use tracegen::generator::TracingObserver;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    cli.validate()?;

    let config = load_config(&cli)?;
    init_logging(config.runtime.debug);

    validate_config(&config).context("Configuration validation failed")?;

    if config.runtime.debug {
        eprintln!("tracegen v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Generator: {}", config.generator);
        eprintln!("Output: {} items, format={}", config.output.count, config.output.format);
    }

    let candidates = load_candidates(&config.candidates)?;
    run(&config, &candidates)
}

/// Stream `count` candidates to stdout, then shut the generator down
fn run(config: &Config, candidates: &[Value]) -> Result<()> {
    let generator = config
        .generator
        .build()
        .context("Failed to create generator")?
        .with_observer(Arc::new(TracingObserver));

    // Stream indices and resolve them here, so candidates are not cloned per item
    let indices: Vec<usize> = (0..candidates.len()).collect();
    let stream = generator.generator(indices)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut counts = vec![0u64; candidates.len()];

    for index in stream.iter().take(config.output.count as usize) {
        if config.output.summary {
            counts[index] += 1;
        } else {
            write_candidate(&mut out, &candidates[index], config.output.format)?;
        }
    }

    generator.close()?;
    generator.wait();

    if config.output.summary {
        write_summary(&mut out, candidates, &counts, config.output.format)?;
    }
    out.flush().context("Failed to flush output")?;

    Ok(())
}

fn write_candidate<W: Write>(out: &mut W, candidate: &Value, format: OutputFormat) -> Result<()> {
    match (format, candidate) {
        (OutputFormat::Text, Value::String(s)) => writeln!(out, "{}", s)?,
        _ => writeln!(out, "{}", candidate)?,
    }
    Ok(())
}

fn write_summary<W: Write>(
    out: &mut W,
    candidates: &[Value],
    counts: &[u64],
    format: OutputFormat,
) -> Result<()> {
    let total: u64 = counts.iter().sum();

    for (candidate, &count) in candidates.iter().zip(counts) {
        let fraction = if total > 0 {
            count as f64 / total as f64
        } else {
            0.0
        };
        match format {
            OutputFormat::Json => {
                let row = serde_json::json!({
                    "candidate": candidate,
                    "count": count,
                    "fraction": fraction,
                });
                writeln!(out, "{}", row)?;
            }
            OutputFormat::Text => {
                let label = match candidate {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                writeln!(out, "{:>8}  {:>7.4}  {}", count, fraction, label)?;
            }
        }
    }

    Ok(())
}

fn init_logging(debug: bool) {
    let default = if debug { "tracegen=debug" } else { "tracegen=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .without_time()
        .init();
}
