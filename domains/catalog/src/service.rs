//! Catalog services
//!
//! Thin orchestration over the module and user stores. Module selection
//! resolves IDs against the catalogue before touching the user profile, so
//! a profile never references a module that does not exist.

use std::sync::Arc;

use studyhub_common::{Error, Result};

use crate::domain::{Module, User};
use crate::repository::{ModuleRepository, StoreError, UserRepository};

pub struct ModuleService {
    repo: Arc<dyn ModuleRepository>,
}

impl ModuleService {
    pub fn new(repo: Arc<dyn ModuleRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_modules(&self) -> Result<Vec<Module>> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn create_module(&self, id: String, name: String) -> Result<()> {
        self.repo.add(Module { id, name }).await?;
        Ok(())
    }
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    module_repo: Arc<dyn ModuleRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, module_repo: Arc<dyn ModuleRepository>) -> Self {
        Self {
            user_repo,
            module_repo,
        }
    }

    pub async fn get_user(&self, id: &str) -> Result<User> {
        Ok(self.user_repo.get_by_id(id).await?)
    }

    pub async fn create_user(&self, user: User) -> Result<User> {
        Ok(self.user_repo.create(user).await?)
    }

    /// Replace a user's module selection with the given catalogue IDs.
    ///
    /// Unknown IDs are a validation failure, not a missing resource: the
    /// request body named them.
    pub async fn set_modules(&self, user_id: &str, module_ids: &[String]) -> Result<()> {
        let mut modules = Vec::with_capacity(module_ids.len());
        for id in module_ids {
            let module = self.module_repo.get_by_id(id).await.map_err(|err| match err {
                StoreError::ModuleNotFound => Error::Validation(format!("module {id} not found")),
                other => other.into(),
            })?;
            modules.push(module);
        }

        self.user_repo.set_modules(user_id, modules).await?;
        Ok(())
    }
}
