//! Roadplan console
//!
//! Interactive menu over a [`roadplan_core::RoadNetwork`]. Every mutating
//! command rewrites the matching export file.
//!
//! # Example
//!
//! ```no_run
//! use roadplan_cli::{AppConfig, Session};
//!
//! fn main() -> std::io::Result<()> {
//!     let stdin = std::io::stdin();
//!     let mut session = Session::new(&AppConfig::default(), stdin.lock(), std::io::stdout());
//!     session.run()
//! }
//! ```

pub mod config;
pub mod console;
pub mod session;

pub use config::AppConfig;
pub use console::Console;
pub use session::{Flow, MenuChoice, Session};
