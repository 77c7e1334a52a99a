//! # Campus Registry
//!
//! Campus facility records whose usability is gated by an operational lifecycle:
//! `OPEN`, `CLOSED` or `MAINTENANCE`.
//!
//! ## Module Tour
//!
//! ### 1. The Lifecycle ([`lifecycle`])
//! The state machine. [`CampusStatus`](lifecycle::CampusStatus) holds the transition
//! table and capabilities; [`LifecycleController`](lifecycle::LifecycleController) keeps
//! the persisted status code, the `usable` flag and the in-memory state in agreement.
//!
//! ### 2. The Engine ([`framework`])
//! A generic `ResourceActor<T>` that owns a store of entities in its own Tokio task and
//! processes requests sequentially, so a load, mutate and store cycle on one record
//! never interleaves with another.
//!
//! ### 3. The Implementation ([`model`], [`campus_actor`])
//! The [`Campus`](model::Campus) record and its `ActorEntity` implementation:
//! validation, bulk update and lifecycle actions.
//!
//! ### 4. The Interface ([`clients`], [`api`])
//! [`CampusClient`](clients::CampusClient) is the typed service surface. The axum router
//! in [`api`] exposes it over HTTP.
//!
//! ### 5. The Orchestrator ([`runtime`], [`config`])
//! [`CampusSystem`](runtime::CampusSystem) starts and stops the actor; configuration is
//! read from the environment.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=campus_registry=debug cargo run
//! ```

pub mod api;
pub mod campus_actor;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod runtime;
