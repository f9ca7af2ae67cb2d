//! CLI argument parsing module for outdates

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let seconds: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;

    if seconds == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }

    Ok(Duration::from_secs(seconds))
}

/// Report npm dependencies whose latest release is outside the declared range
#[derive(Parser, Debug, Clone)]
#[command(
    name = "outdates",
    version,
    about = "Report npm dependencies whose latest release is outside the declared range"
)]
pub struct CliArgs {
    /// Target directory containing package.json (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Registry base URL, overriding publishConfig.registry and the default
    #[arg(short, long, value_name = "URL")]
    pub registry: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value = "30", value_parser = parse_timeout)]
    pub timeout: Duration,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}
