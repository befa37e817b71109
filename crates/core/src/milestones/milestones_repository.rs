use std::sync::Arc;

use diesel::prelude::*;

use super::milestones_model::{Milestone, MilestoneDB};
use super::milestones_traits::MilestoneRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::milestones;
use crate::schema::milestones::dsl::*;

pub struct MilestoneRepository {
    pool: Arc<DbPool>,
}

impl MilestoneRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        MilestoneRepository { pool }
    }
}

impl MilestoneRepositoryTrait for MilestoneRepository {
    fn load_milestones(&self, owner_id: &str) -> Result<Vec<Milestone>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = milestones
            .filter(user_id.eq(owner_id))
            .order(target_date.asc())
            .load::<MilestoneDB>(&mut conn)?;
        Ok(rows.into_iter().map(Milestone::from).collect())
    }

    fn get_milestone(&self, owner_id: &str, milestone_id: &str) -> Result<Milestone> {
        let mut conn = get_connection(&self.pool)?;
        milestones
            .filter(id.eq(milestone_id))
            .filter(user_id.eq(owner_id))
            .first::<MilestoneDB>(&mut conn)
            .optional()?
            .map(Milestone::from)
            .ok_or_else(|| Error::NotFound(format!("Milestone '{}'", milestone_id)))
    }

    fn insert_new_milestone(&self, milestone: Milestone) -> Result<Milestone> {
        let mut conn = get_connection(&self.pool)?;
        let row = MilestoneDB::from(&milestone);

        let inserted = diesel::insert_into(milestones::table)
            .values(&row)
            .returning(milestones::all_columns)
            .get_result::<MilestoneDB>(&mut conn)?;

        Ok(Milestone::from(inserted))
    }

    fn update_milestone(&self, milestone: Milestone) -> Result<Milestone> {
        let mut conn = get_connection(&self.pool)?;
        let row = MilestoneDB::from(&milestone);

        diesel::update(milestones.find(&row.id))
            .set(&row)
            .execute(&mut conn)?;

        let refreshed = milestones.find(&row.id).first::<MilestoneDB>(&mut conn)?;
        Ok(Milestone::from(refreshed))
    }

    fn delete_milestone(&self, owner_id: &str, milestone_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::delete(
            milestones
                .filter(id.eq(milestone_id))
                .filter(user_id.eq(owner_id)),
        )
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(Error::NotFound(format!("Milestone '{}'", milestone_id)));
        }
        Ok(affected)
    }
}
