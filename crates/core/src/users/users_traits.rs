use crate::errors::Result;
use crate::users::users_model::{NewUser, User, UserUpdate};

/// Trait for user repository operations
pub trait UserRepositoryTrait: Send + Sync {
    fn find_by_id(&self, user_id: &str) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn insert_new_user(&self, new_user: NewUser) -> Result<User>;
    fn update_user(&self, user: User) -> Result<User>;
}

/// Trait for user service operations
pub trait UserServiceTrait: Send + Sync {
    fn register_user(&self, new_user: NewUser) -> Result<User>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User>;
}
