//! # svcwire providers
//!
//! Ready-made services that register themselves into the compile-time
//! catalog. Linking this crate is enough to make them available by name.
//!
//! | Service | Default role | Depends on |
//! |---------|--------------|------------|
//! | [`TimerService`] | `timer` | - |
//! | [`CacheService`] | `cache` | `timer` |
//! | [`LogService`] (`ConsoleLogger`, `NullLogger`) | `log` | - |
//! | [`EventService`] (`EventService`, `NullEventService`) | `event` | `log` |

pub mod cache;
pub mod constants;
pub mod events;
pub mod log;
pub mod timer;

pub use cache::CacheService;
pub use events::{EventService, ServiceEvent};
pub use log::{LogLevel, LogService};
pub use timer::TimerService;
