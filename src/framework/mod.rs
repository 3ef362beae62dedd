//! Generic resource actor framework.
//!
//! Building blocks for single-owner stores of flat records with CRUD operations and
//! custom actions. The order board has its own specialised actor; everything else
//! (reviews, inventory) runs on these types.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait that record types implement to be managed by actors
//! - [`ResourceActor`] - generic actor that owns one store
//! - [`ResourceClient`] - type-safe async client
//! - [`FrameworkError`] - plumbing errors (closed channels, missing records)
//!
//! # Testing
//!
//! See [`mock`] for a client that answers from queued expectations.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
