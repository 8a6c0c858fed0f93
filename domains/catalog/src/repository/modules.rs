//! Module store

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::StoreError;
use crate::domain::Module;

#[async_trait]
pub trait ModuleRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Module>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Module, StoreError>;

    async fn add(&self, module: Module) -> Result<(), StoreError>;
}

/// In-memory module store preloaded with the course catalogue
pub struct InMemoryModuleStore {
    modules: Mutex<HashMap<String, Module>>,
}

impl InMemoryModuleStore {
    pub fn new() -> Self {
        Self {
            modules: Mutex::new(HashMap::new()),
        }
    }

    pub fn seeded() -> Self {
        let seed = [
            ("CSU44052", "Computer Graphics"),
            ("CSU44061", "Machine Learning"),
            ("CSU44051", "Human Factors"),
            ("CSU44000", "Internet Applications"),
            ("CSU44012", "Topics in Functional Programming"),
            ("CSU44099", "Final Year Project"),
            ("CSU44098", "Group Design Project"),
            ("CSU44081", "Entrepreneurship & High Tech Venture Creation"),
        ];

        Self {
            modules: Mutex::new(
                seed.into_iter()
                    .map(|(id, name)| {
                        (
                            id.to_owned(),
                            Module {
                                id: id.to_owned(),
                                name: name.to_owned(),
                            },
                        )
                    })
                    .collect(),
            ),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Module>>, StoreError> {
        self.modules
            .lock()
            .map_err(|_| StoreError::Internal(anyhow::anyhow!("module store lock poisoned")))
    }
}

impl Default for InMemoryModuleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModuleRepository for InMemoryModuleStore {
    async fn get_all(&self) -> Result<Vec<Module>, StoreError> {
        let modules = self.lock()?;
        let mut list: Vec<Module> = modules.values().cloned().collect();
        list.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(list)
    }

    async fn get_by_id(&self, id: &str) -> Result<Module, StoreError> {
        let modules = self.lock()?;
        modules.get(id).cloned().ok_or(StoreError::ModuleNotFound)
    }

    async fn add(&self, module: Module) -> Result<(), StoreError> {
        let mut modules = self.lock()?;

        if modules.contains_key(&module.id) {
            return Err(StoreError::ModuleAlreadyExists);
        }
        modules.insert(module.id.clone(), module);

        Ok(())
    }
}
