//! User profile store

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::StoreError;
use crate::domain::{Module, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &str) -> Result<User, StoreError>;

    async fn create(&self, user: User) -> Result<User, StoreError>;

    async fn set_modules(&self, id: &str, modules: Vec<Module>) -> Result<(), StoreError>;
}

/// In-memory user store, empty until users register
pub struct InMemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, User>>, StoreError> {
        self.users
            .lock()
            .map_err(|_| StoreError::Internal(anyhow::anyhow!("user store lock poisoned")))
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn get_by_id(&self, id: &str) -> Result<User, StoreError> {
        let users = self.lock()?;
        users.get(id).cloned().ok_or(StoreError::UserNotFound)
    }

    async fn create(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.lock()?;

        if users.contains_key(&user.id) {
            return Err(StoreError::UserAlreadyExists);
        }
        users.insert(user.id.clone(), user.clone());

        Ok(user)
    }

    async fn set_modules(&self, id: &str, modules: Vec<Module>) -> Result<(), StoreError> {
        let mut users = self.lock()?;

        let user = users.get_mut(id).ok_or(StoreError::UserNotFound)?;
        user.modules = modules;

        Ok(())
    }
}
