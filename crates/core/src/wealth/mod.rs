//! Wealth snapshot module - recompute, summary, and history.

mod wealth_model;
mod wealth_repository;
mod wealth_service;
mod wealth_traits;

#[cfg(test)]
mod wealth_model_tests;

// Re-export the public interface
pub use wealth_model::{WealthSnapshot, WealthSnapshotDB, WealthSummary};
pub use wealth_repository::WealthRepository;
pub use wealth_service::WealthService;
pub use wealth_traits::{WealthRepositoryTrait, WealthServiceTrait};
