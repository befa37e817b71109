use std::sync::Arc;

use diesel::prelude::*;

use super::assets_model::{Asset, AssetDB};
use super::assets_traits::AssetRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::assets;
use crate::schema::assets::dsl::*;

pub struct AssetRepository {
    pool: Arc<DbPool>,
}

impl AssetRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AssetRepository { pool }
    }
}

impl AssetRepositoryTrait for AssetRepository {
    fn load_assets(&self, owner_id: &str) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = assets
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .load::<AssetDB>(&mut conn)?;
        Ok(rows.into_iter().map(Asset::from).collect())
    }

    fn get_asset(&self, owner_id: &str, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        assets
            .filter(id.eq(asset_id))
            .filter(user_id.eq(owner_id))
            .first::<AssetDB>(&mut conn)
            .optional()?
            .map(Asset::from)
            .ok_or_else(|| Error::NotFound(format!("Asset '{}'", asset_id)))
    }

    fn insert_new_asset(&self, asset: Asset) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        let row = AssetDB::from(&asset);

        let inserted = diesel::insert_into(assets::table)
            .values(&row)
            .returning(assets::all_columns)
            .get_result::<AssetDB>(&mut conn)?;

        Ok(Asset::from(inserted))
    }

    fn update_asset(&self, asset: Asset) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        let row = AssetDB::from(&asset);

        diesel::update(assets.find(&row.id))
            .set(&row)
            .execute(&mut conn)?;

        let refreshed = assets.find(&row.id).first::<AssetDB>(&mut conn)?;
        Ok(Asset::from(refreshed))
    }

    fn delete_asset(&self, owner_id: &str, asset_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::delete(
            assets
                .filter(id.eq(asset_id))
                .filter(user_id.eq(owner_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Asset '{}'", asset_id)));
        }
        Ok(affected)
    }
}
