mod error;
mod github;
mod http_client;
mod model;
mod verifier;

use std::env::VarError;
use std::process::ExitCode;

use clap::Parser;
use error::VerifyError;
use model::arg::Args;
use model::config::Config;
use verifier::{Credential, Verdict};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging (stderr, stdout stays free for the caller)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match verify(args, |key| std::env::var(key)).await {
        Ok(verdict) => verdict.exit_code(),
        Err(e) => {
            tracing::error!("{}", e);
            e.exit_code()
        }
    }
}

/// Load configuration and credential, then run the membership check
///
/// `env` looks up environment variables. The credential is read before any
/// network activity.
async fn verify<F>(args: Args, env: F) -> Result<Verdict, VerifyError>
where
    F: FnOnce(&str) -> Result<String, VarError>,
{
    let config = load_config(&args)?;

    let credential = Credential::from_lookup(env)?;
    tracing::debug!("Using credential {:?}", credential);

    verifier::run(&credential, &config).await
}

/// Read the file named by `--config`, or use the built-in defaults
///
/// No file is ever picked up implicitly from the working directory.
fn load_config(args: &Args) -> Result<Config, VerifyError> {
    let Some(path) = &args.config else {
        return Ok(Config::default());
    };

    let config =
        Config::load(path).map_err(|e| VerifyError::Configuration(format!("{:#}", e)))?;
    if let Some(loaded) = config.config_path() {
        tracing::debug!("Loaded config from {}", loaded.display());
    }
    Ok(config)
}
