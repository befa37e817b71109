//! Assets module - per-user asset records and category totals.

mod assets_model;
mod assets_repository;
mod assets_service;
mod assets_traits;

#[cfg(test)]
mod assets_model_tests;

// Re-export the public interface
pub use assets_model::{category_totals, Asset, AssetCategory, AssetDB, AssetUpdate, NewAsset};
pub use assets_repository::AssetRepository;
pub use assets_service::AssetService;
pub use assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
