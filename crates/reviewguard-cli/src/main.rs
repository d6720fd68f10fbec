use clap::Parser;
use reviewguard_cli::cli::{Cli, Commands};
use reviewguard_cli::commands::{self, PredictRequest};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Train { dataset, artifact } => {
            let config = commands::resolve_config(&cli.config, dataset, artifact)?;
            let report = commands::run_train(&config)?;

            println!("Model saved to {}", report.artifact_path.display());
        }

        Commands::Predict {
            text,
            rating,
            verified,
            unverified,
            artifact,
            pretty,
        } => {
            let config = commands::resolve_config(&cli.config, None, artifact)?;
            let request = PredictRequest {
                text,
                rating,
                verified,
                unverified,
            };
            let response = commands::run_predict(&config, &request);

            println!("{}", commands::render(&response, pretty)?);
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout is reserved for command output
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("reviewguard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reviewguard=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
