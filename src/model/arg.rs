use clap::Parser;

/// GitHub organization team membership check
///
/// Reads the OAuth access token from the AUTH_TOKEN environment variable and
/// exits 0 when its owner belongs to the configured team, 1 when not.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (built-in defaults when omitted)
    #[arg(short, long)]
    pub config: Option<String>,
}
