//! Spotify Statistics Dashboard Server Library
//!
//! This library implements the backend of a self-hosted Spotify listening-statistics
//! dashboard. It covers the OAuth 2.0 authorization-code flow (login initiation and
//! the token-exchange callback), cookie-based session handling, and a set of
//! read-only JSON endpoints that proxy the Spotify Web API on behalf of the
//! authenticated browser session.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints (OAuth flow and authenticated proxy routes)
//! - `config` - Configuration management and environment variables
//! - `error` - API error taxonomy and HTTP response mapping
//! - `pages` - Minimal HTML shells for the redirect targets
//! - `server` - HTTP server setup and routing
//! - `session` - Session extraction and cookie construction
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotistats::{config, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await;
//!     server::start_api_server().await;
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod pages;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a UTC timestamp and a distinctive blue
/// "o" indicator followed by the provided message. Used for general information
/// and status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Exchanging authorization code for tokens...");
/// info!("Serving on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"), "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a UTC timestamp and a green "✓" indicator
/// to signify successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Session established for the current browser");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"), "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Reserved for unrecoverable startup
/// errors; request handlers never use this macro.
///
/// # Example
///
/// ```
/// error!("Failed to parse server address: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"), "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a UTC timestamp and a yellow "!" indicator
/// to highlight potential issues that don't require program termination. Request
/// handlers use this for diagnostic lines on failure branches.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed with status {}", status);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] [{}] {}", ::chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"), "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
