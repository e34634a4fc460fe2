//! Services over the directory stores
//!
//! The alert service computes the read-only aggregate views; the gateway is
//! the single validated mutation path. Both hold a shared reference to the
//! [`crate::store::Directory`] created at startup.

pub mod alerts;
pub mod gateway;
pub mod views;

pub use alerts::AlertService;
pub use gateway::DirectoryGateway;
