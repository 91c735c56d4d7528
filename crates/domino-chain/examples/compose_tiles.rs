use std::{env, fs, path::PathBuf};

use domino_chain::{ComposeConfig, ComposeReport};

#[cfg(not(feature = "tracing"))]
use std::str::FromStr;

#[cfg(not(feature = "tracing"))]
use log::{info, warn, LevelFilter};

#[cfg(feature = "tracing")]
use tracing::{info, warn};

#[cfg(feature = "tracing")]
use domino_core::init_tracing;
#[cfg(not(feature = "tracing"))]
use domino_core::init_with_level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    {
        let level = env::var("DOMINO_LOG")
            .ok()
            .and_then(|s| LevelFilter::from_str(&s).ok())
            .unwrap_or(LevelFilter::Info);
        init_with_level(level)?;
    }

    #[cfg(feature = "tracing")]
    init_tracing(false);

    run()
}

#[cfg_attr(feature = "tracing", tracing::instrument(level = "info"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = parse_config_path();
    let cfg = ComposeConfig::load_json(&config_path)?;

    let mut report = ComposeReport::new(&cfg, &config_path);
    info!(
        "{} tiles, {} pips, head {}",
        report.tally.tiles, report.tally.total, cfg.head
    );

    match cfg.run() {
        Ok(results) => {
            match results.first() {
                Some(best) => info!(
                    "{} chains, best places {} tiles for {} pips ({} left over)",
                    results.len(),
                    best.sequence_length,
                    best.sequence_score,
                    best.unused
                ),
                None => warn!("no chain starts at {}", cfg.head),
            }
            report.set_results(results);
        }
        Err(err) => {
            warn!("composition failed: {err}");
            report.set_error(err);
        }
    }

    let out_path = cfg.output_path();
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    report.write_json(&out_path)?;
    println!("wrote report JSON to {}", out_path.display());
    Ok(())
}

fn parse_config_path() -> PathBuf {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("testdata/compose_config.json"))
}
