pub mod modules;
pub mod users;
