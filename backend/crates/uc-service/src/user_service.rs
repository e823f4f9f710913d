use crate::Result;

use log::debug;
use uc_core::{NewUser, User};
use uc_db::UserRepository;

#[derive(Clone)]
pub struct UserService {
    repository: UserRepository,
}

impl UserService {
    pub fn new(repository: UserRepository) -> Self {
        Self { repository }
    }

    pub async fn find_all(&self) -> Result<Vec<User>> {
        debug!("Listing all users");
        self.repository.find_all().await
    }

    pub async fn save_user(&self, user: &NewUser) -> Result<User> {
        debug!("Saving user {} {}", user.first_name, user.last_name);
        self.repository.save(user).await
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        debug!("Deleting user {}", id);
        self.repository.delete_by_id(id).await
    }

    pub async fn get_one(&self, id: i64) -> Result<User> {
        debug!("Fetching user {}", id);
        self.repository.find_by_id(id).await
    }

    pub async fn update_user(&self, user: &User) -> Result<()> {
        debug!("Updating user {}", user.id);
        self.repository.update(user).await
    }
}
