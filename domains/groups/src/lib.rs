//! Study groups domain
//!
//! Groups, membership rosters, and the role transitions that move users
//! between invitee, requester, member, and admin. The domain layer holds the
//! pure state machine, the repository layer the persistence seams, and the
//! api layer the HTTP surface.

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

pub use api::{routes, GroupsState};
pub use service::StudyGroupService;
