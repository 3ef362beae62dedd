//! # Partner Ops
//!
//! > **Order lifecycle tracking for a food partner's operations dashboard.**
//!
//! Orders move through four fixed stages, `preparing -> ready -> picked_up -> delivered`.
//! The operator moves them through the first two edges. Delivery happens by itself a
//! fixed delay after pickup. Alongside the order board run three flat record stores: the
//! review desk (customer reviews, replies, internal notes), the inventory and its
//! categories.
//!
//! ## 🏗️ Design
//!
//! Every store is owned by exactly one Tokio task and mutated only by that task's message
//! loop. Callers hold cheap, clonable clients that send a request and await the reply on
//! a oneshot channel. Dropping every client shuts the actor down.
//!
//! ### The order board
//! The board is a partitioned store: each order sits in exactly one of four lists keyed
//! by status. A transition names both the source and the target status; it is checked
//! against the adjacency table, and an order that isn't in the source list is left
//! alone. An order moved into `picked_up` gets a cancellable timer that later moves it
//! to `delivered`. All timers are aborted when the board stops.
//!
//! ### Flat records
//! Reviews, inventory items and categories run on the generic [`ResourceActor`](framework::ResourceActor):
//! one implementation of the CRUD loop, parameterised by an [`ActorEntity`](framework::ActorEntity).
//! Deleting a category removes its items through the inventory client the category actor
//! is run with. Client-level tests use [`MockClient`](framework::mock::MockClient) instead of a real actor.
//!
//! ## 🗺️ Module Tour
//!
//! - [`order_board`]: partitioned store, transition table, auto-advance timers, board actor
//! - [`framework`]: the generic resource actor, its client and mock
//! - [`review_actor`], [`inventory_actor`], [`category_actor`]: entity implementations for
//!   the flat stores
//! - [`clients`]: typed clients for every actor
//! - [`lifecycle`]: config, tracing and [`DashboardSystem`](lifecycle::DashboardSystem)
//! - [`model`]: record types in the seed's JSON shape
//! - [`seed`]: built-in fixtures and the JSON orders loader
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Scripted operator session with info logs
//! RUST_LOG=info cargo run
//!
//! # Faster auto-advance
//! PARTNER_OPS_CONFIG=./partner-ops.toml cargo run
//! ```

pub mod category_actor;
pub mod clients;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod order_board;
pub mod review_actor;
pub mod seed;
