//! Financial health scoring.
//!
//! Scores a user's finances across six dimensions (emergency fund, expense
//! ratio, milestones, insurance, diversification, estate planning) and
//! combines them into one weighted overall score with recommendations for
//! the weak spots.
//!
//! The scorer itself is pure; [`HealthService`] gathers its inputs from the
//! asset, journal, milestone, and user stores.

pub mod health_model;
pub mod health_scorer;
pub mod health_service;
pub mod health_traits;


pub use health_model::{HealthInputs, HealthReport, HealthStatus, SubScores};
pub use health_scorer::score;
pub use health_service::HealthService;
pub use health_traits::HealthServiceTrait;
