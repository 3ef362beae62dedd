//! # System Lifecycle
//!
//! Starting, configuring and stopping the dashboard's actors.
//!
//! - [`config`]: TOML settings with an embedded default
//! - [`tracing`]: subscriber setup
//! - [`DashboardSystem`]: spawns the order board, review desk, inventory and category
//!   actors and shuts them down by dropping their clients
//!
//! ```rust,ignore
//! setup_tracing();
//! let config = load_config()?;
//! let seeds = Seeds::from_config(&config.seed)?;
//! let system = DashboardSystem::start(&config, seeds)?;
//!
//! system.orders.mark_ready(OrderId::from("ORD-1024")).await?;
//!
//! let final_store = system.shutdown().await?;
//! ```

pub mod config;
mod dashboard;
pub mod tracing;

pub use config::*;
pub use dashboard::{DashboardSystem, StartError};
pub use self::tracing::setup_tracing;
