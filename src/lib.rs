//! # Parkplan Rust Backend
//!
//! Parking-capacity planning backend for large exhibition venues.
//!
//! Every event runs in three sequential operational phases: assembly,
//! runtime, disassembly. The heart of this crate is the phase date
//! propagation engine, which keeps those phases as one gapless,
//! non-overlapping sequence of date intervals and repairs the other
//! boundaries whenever any single date is edited. Around the engine sit the
//! range policy check, per-day demand map maintenance, event storage via
//! the repository pattern, and an Axum REST API consumed by the React
//! frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) shared by storage and HTTP
//! - [`models`]: Calendar dates and the phase interval model
//! - [`services`]: Date propagation, range policy, demand maps
//! - [`db`]: Repository pattern and persistence layer
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
