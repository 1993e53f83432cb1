use std::fs;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vozmapa_seed::{SeedConfig, SeedGenerator};

fn main() -> Result<()> {
    // Logs go to stderr so a bare run can pipe the dataset JSON from stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("vozmapa_seed=info".parse()?)
                .add_directive("seed=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Vozmapa seed pass starting...");

    let config = SeedConfig::from_env()?;
    info!(
        stories_per_district = config.stories_per_district,
        daily_life_ratio = config.daily_life_ratio,
        "Seed config loaded"
    );

    // Parse optional --out arg; the default prints the dataset to stdout.
    let out_path = match std::env::args().nth(1).as_deref() {
        Some("--out") => Some(
            std::env::args()
                .nth(2)
                .ok_or_else(|| anyhow::anyhow!("--out requires a file path"))?,
        ),
        _ => None,
    };

    let records = SeedGenerator::new(config).generate(&mut rand::rng());
    let json = serde_json::to_string_pretty(&records)?;

    match out_path {
        Some(path) => {
            fs::write(&path, &json)?;
            info!(path = %path, records = records.len(), "Seed dataset written");
            println!("Wrote {} testimonials to {path}", records.len());
        }
        None => println!("{json}"),
    }

    Ok(())
}
