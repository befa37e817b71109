use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::users;
use crate::schema::users::dsl::*;
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::UserRepositoryTrait;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        UserRepository { pool }
    }
}

impl UserRepositoryTrait for UserRepository {
    fn find_by_id(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        users
            .find(user_id)
            .first::<User>(&mut conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("User '{}'", user_id)))
    }

    fn find_by_email(&self, user_email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(users
            .filter(email.eq(user_email))
            .first::<User>(&mut conn)
            .optional()?)
    }

    fn insert_new_user(&self, mut new_user: NewUser) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        new_user.id = Some(Uuid::new_v4().to_string());

        Ok(diesel::insert_into(users::table)
            .values(&new_user)
            .returning(users::all_columns)
            .get_result(&mut conn)?)
    }

    fn update_user(&self, user: User) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let user_id = user.id.clone();

        diesel::update(users.find(&user_id))
            .set(&user)
            .execute(&mut conn)?;

        Ok(users.find(user_id).first(&mut conn)?)
    }
}
