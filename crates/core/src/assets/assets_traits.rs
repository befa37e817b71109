use super::assets_model::{Asset, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset repository operations.
pub trait AssetRepositoryTrait: Send + Sync {
    /// Loads all assets for a user, newest first.
    fn load_assets(&self, user_id: &str) -> Result<Vec<Asset>>;
    fn get_asset(&self, user_id: &str, asset_id: &str) -> Result<Asset>;
    fn insert_new_asset(&self, asset: Asset) -> Result<Asset>;
    fn update_asset(&self, asset: Asset) -> Result<Asset>;
    fn delete_asset(&self, user_id: &str, asset_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Asset service operations.
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self, user_id: &str) -> Result<Vec<Asset>>;
    fn get_asset(&self, user_id: &str, asset_id: &str) -> Result<Asset>;
    /// Creates an asset and triggers a wealth recompute for the owner.
    fn create_asset(&self, user_id: &str, new_asset: NewAsset) -> Result<Asset>;
    /// Applies a partial update and triggers a wealth recompute for the owner.
    fn update_asset(&self, user_id: &str, asset_id: &str, update: AssetUpdate) -> Result<Asset>;
    /// Deletes an asset and triggers a wealth recompute for the owner.
    fn delete_asset(&self, user_id: &str, asset_id: &str) -> Result<()>;
}
