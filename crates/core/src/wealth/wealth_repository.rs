use std::sync::Arc;

use chrono::NaiveDate;
use diesel::prelude::*;

use super::wealth_model::{WealthSnapshot, WealthSnapshotDB};
use super::wealth_traits::WealthRepositoryTrait;
use crate::db::{get_connection, DbPool, DbTransactionExecutor};
use crate::errors::Result;
use crate::schema::wealth_snapshots;
use crate::schema::wealth_snapshots::dsl::*;

pub struct WealthRepository {
    pool: Arc<DbPool>,
}

impl WealthRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        WealthRepository { pool }
    }
}

impl WealthRepositoryTrait for WealthRepository {
    fn upsert_snapshot(&self, snapshot: &WealthSnapshot) -> Result<WealthSnapshot> {
        let row = WealthSnapshotDB::from(snapshot);

        // Write and read-back in one transaction so the returned row is the
        // row just written, not a racing writer's.
        let stored = self.pool.execute(|conn| {
            diesel::replace_into(wealth_snapshots::table)
                .values(&row)
                .execute(conn)?;
            wealth_snapshots.find(&row.id).first::<WealthSnapshotDB>(conn)
        })?;
        Ok(WealthSnapshot::from(stored))
    }

    fn get_latest_snapshot(&self, owner_id: &str) -> Result<Option<WealthSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let row = wealth_snapshots
            .filter(user_id.eq(owner_id))
            .order(snapshot_date.desc())
            .first::<WealthSnapshotDB>(&mut conn)
            .optional()?;
        Ok(row.map(WealthSnapshot::from))
    }

    fn load_snapshots_since(&self, owner_id: &str, from: NaiveDate) -> Result<Vec<WealthSnapshot>> {
        let mut conn = get_connection(&self.pool)?;
        let from_str = from.format("%Y-%m-%d").to_string();
        let rows = wealth_snapshots
            .filter(user_id.eq(owner_id))
            .filter(snapshot_date.ge(from_str))
            .order(snapshot_date.asc())
            .load::<WealthSnapshotDB>(&mut conn)?;
        Ok(rows.into_iter().map(WealthSnapshot::from).collect())
    }
}
