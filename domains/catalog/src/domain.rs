//! Catalog entities: course modules and user profiles

use serde::{Deserialize, Serialize};

/// A course module students can enrol in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Course code, e.g. "CSU44052"
    pub id: String,
    pub name: String,
}

/// A user profile with their selected modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}
