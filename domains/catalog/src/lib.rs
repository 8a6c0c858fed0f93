//! Catalog domain
//!
//! Course modules and user profiles. Study groups reference modules by
//! course code; user profiles track which modules a student selected.

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

pub use api::{routes, CatalogState};
pub use service::{ModuleService, UserService};
