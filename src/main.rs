use anyhow::{Context, Result};
use clap::Parser;

use reaper_keymap::cli::CliArgs;
use reaper_keymap::config::ParserConfig;
use reaper_keymap::keymap::{load_keymap_file, KeymapDecoder};
use reaper_keymap::output::render;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // Config errors are logged once the subscriber exists
    let loaded = ParserConfig::try_load();
    reaper_keymap::tracing::init(loaded.as_ref().is_ok_and(|config| config.log_to_file));
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("{}, using defaults", e);
        ParserConfig::default()
    });

    let run = args.into_config(&config);
    let decoder = KeymapDecoder::new(run.options);

    let report = load_keymap_file(&run.path, &decoder)
        .with_context(|| format!("Failed to parse keymap {}", run.path.display()))?;

    for skipped in &report.skipped {
        tracing::warn!("Skipped line {}: {}", skipped.line, skipped.error);
    }
    if report.malformed > 0 {
        tracing::debug!("Discarded {} entries with too few fields", report.malformed);
    }

    let keymap = match run.only {
        Some(kind) => report.keymap.only(kind),
        None => report.keymap,
    };

    println!("{}", keymap.summary());
    println!("{}", render(&keymap, run.format, run.pretty)?);

    Ok(())
}
