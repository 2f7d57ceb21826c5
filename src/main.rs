use species_datagen::{run_with_pokeapi, DatagenConfig};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let config = DatagenConfig::default();
    match run_with_pokeapi(&config).await {
        Ok(summary) => {
            let generations: Vec<String> = summary
                .written
                .iter()
                .map(|(generation, _)| generation.to_string())
                .collect();
            info!(
                entries = summary.base_records,
                skipped = summary.skipped.len(),
                "wrote species.json for {}",
                generations.join(", ")
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` adjusts verbosity; progress and summary lines are on by default.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "species_datagen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
