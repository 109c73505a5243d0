//! Domain Port Interfaces
//!
//! Contracts between the container and the services it manages.
//!
//! - **service** - The [`Service`] trait every managed instance implements and
//!   the [`ServiceLocator`] handed to it during injection

/// Service and locator ports
pub mod service;

pub use service::{Service, ServiceLocator, downcast_service};
