//! Client library for the _Domino_ data science platform API.
//!
//! ```no_run
//! use domino::{DominoClient, DominoConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DominoConfig::resolve("marks/quick-start", None, None)?;
//! let client = DominoClient::build(config)?.connect().await?;
//! let runs = client.runs_list().await?;
//! println!("{}", runs);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
mod constants;
pub mod disposition;
pub mod errors;
pub mod models;
pub mod routes;
pub mod types;

pub use client::{DominoClient, DominoClientBuilder};
pub use config::DominoConfig;
pub use disposition::{Disposition, MessageType};
pub use models::*;
pub use routes::Routes;

pub use reqwest;
