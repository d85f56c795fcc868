//! Command-line handling for the `marketrelay` binary.

use marketrelay_core::RelayConfig;

/// What the binary was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the server; `force_strict` overrides the environment.
    Serve { force_strict: bool },
    /// Print usage and exit.
    Help,
}

impl Command {
    /// Parse the full argv (program name first). Only the first argument is
    /// inspected; an unknown one yields the message to print before exiting.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        match args.get(1).map(String::as_str) {
            None => Ok(Command::Serve { force_strict: false }),
            Some("--strict" | "strict") => Ok(Command::Serve { force_strict: true }),
            Some("--help" | "-h" | "help") => Ok(Command::Help),
            Some(other) => Err(format!(
                "Unknown command: {}. Use 'marketrelay help' for usage.",
                other
            )),
        }
    }

    /// Fold command-line overrides into the environment configuration.
    pub fn apply(&self, mut config: RelayConfig) -> RelayConfig {
        if let Command::Serve { force_strict: true } = self {
            config.strict = true;
        }
        config
    }
}

pub fn print_usage() {
    println!("marketrelay — payload relay between extension popup and content script");
    println!();
    println!("Usage: marketrelay [command]");
    println!();
    println!("Commands:");
    println!("  (none)      Start the server");
    println!("  strict      Start the server, rejecting malformed payloads");
    println!("  help        Show this help message");
    println!();
    println!("Environment:");
    println!("  HOST                 Bind host (default 0.0.0.0)");
    println!("  PORT                 Bind port (default 5001)");
    println!("  MARKETRELAY_STRICT   Reject malformed payloads (default off)");
    println!("  RUST_LOG             Log filter (default info)");
}
