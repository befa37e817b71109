use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::users::users_model::{NewUser, User, UserUpdate};
use crate::users::users_traits::{UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    user_repo: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { user_repo }
    }
}

impl UserServiceTrait for UserService {
    fn register_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;

        if self.user_repo.find_by_email(&new_user.email)?.is_some() {
            return Err(Error::ConstraintViolation(
                "Email is already registered".to_string(),
            ));
        }

        let created = self.user_repo.insert_new_user(new_user)?;
        debug!("Registered user {}", created.id);
        Ok(created)
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.user_repo.find_by_id(user_id)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.user_repo.find_by_email(email)
    }

    fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User> {
        update.validate()?;

        let mut user = self.user_repo.find_by_id(user_id)?;
        update.apply_to(&mut user);
        user.updated_at = Utc::now().naive_utc();

        self.user_repo.update_user(user)
    }
}
