//! Command implementations for wayfind

pub mod adjacent;
pub mod dispatch;
pub mod route;
pub mod show;
