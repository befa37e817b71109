//! WealthTrack Core - domain entities, services, and traits.
//!
//! This crate contains the business logic for WealthTrack: per-user asset,
//! journal, milestone, and insurance stores, the wealth snapshot pipeline,
//! the financial health scorer, and report assembly/rendering. The HTTP
//! surface lives in the server crate and talks to this one through the
//! service traits.

pub mod analytics;
pub mod assets;
pub mod constants;
pub mod db;
pub mod errors;
pub mod health;
pub mod insurance;
pub mod journal;
pub mod milestones;
pub mod reports;
pub mod schema;
pub mod users;
pub mod wealth;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
