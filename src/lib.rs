//! Spotify Artist Comparison CLI Library
//!
//! This library compares two artists head-to-head using public Spotify
//! data: follower count, the artist popularity score, and the popularity
//! of each artist's best track. It includes modules for API communication,
//! the comparison rules, configuration management, and the CLI front end.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `compare` - Head-to-head scoring rules
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy for configuration and API failures
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use spotvs::{cli, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     cli::compare(Some("daft punk".into()), Some("justice".into()), None).await;
//! }
//! ```

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the application reports an [`error::Error`],
/// so the failing step is identifiable from the variant alone and the CLI
/// can print one clear message before exiting.
///
/// # Example
///
/// ```
/// use spotvs::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, error::Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Resolving artist names...");
/// info!("Found {} followers", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Authenticated with Spotify");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors:
/// once a step of the comparison fails there is nothing left to do with a
/// half-fetched matchup.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("No market configured, using provider default");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
