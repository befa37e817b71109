use std::sync::Arc;

use chrono::Utc;
use log::{debug, error};
use uuid::Uuid;

use super::assets_model::{Asset, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::Result;
use crate::wealth::WealthServiceTrait;

/// Service for managing the per-user asset ledger.
///
/// Every mutation recomputes the owner's wealth snapshot. The recompute is
/// best-effort from the mutation's point of view: its failure is logged and
/// the mutation still succeeds.
pub struct AssetService {
    asset_repo: Arc<dyn AssetRepositoryTrait>,
    wealth_service: Arc<dyn WealthServiceTrait>,
}

impl AssetService {
    pub fn new(
        asset_repo: Arc<dyn AssetRepositoryTrait>,
        wealth_service: Arc<dyn WealthServiceTrait>,
    ) -> Self {
        Self {
            asset_repo,
            wealth_service,
        }
    }

    fn recompute_wealth(&self, user_id: &str) {
        if let Err(e) = self.wealth_service.recompute(user_id) {
            error!("Wealth recompute failed for user {}: {}", user_id, e);
        }
    }
}

impl AssetServiceTrait for AssetService {
    fn get_assets(&self, user_id: &str) -> Result<Vec<Asset>> {
        self.asset_repo.load_assets(user_id)
    }

    fn get_asset(&self, user_id: &str, asset_id: &str) -> Result<Asset> {
        self.asset_repo.get_asset(user_id, asset_id)
    }

    fn create_asset(&self, user_id: &str, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;

        let asset = new_asset.into_asset(user_id, Uuid::new_v4().to_string());
        debug!("Creating asset '{}' for user {}", asset.name, user_id);
        let created = self.asset_repo.insert_new_asset(asset)?;

        self.recompute_wealth(user_id);
        Ok(created)
    }

    fn update_asset(&self, user_id: &str, asset_id: &str, update: AssetUpdate) -> Result<Asset> {
        update.validate()?;

        let mut asset = self.asset_repo.get_asset(user_id, asset_id)?;
        update.apply_to(&mut asset);
        asset.updated_at = Utc::now().naive_utc();
        let updated = self.asset_repo.update_asset(asset)?;

        self.recompute_wealth(user_id);
        Ok(updated)
    }

    fn delete_asset(&self, user_id: &str, asset_id: &str) -> Result<()> {
        self.asset_repo.delete_asset(user_id, asset_id)?;
        debug!("Deleted asset {} for user {}", asset_id, user_id);

        self.recompute_wealth(user_id);
        Ok(())
    }
}
