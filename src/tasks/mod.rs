//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Rate limiter cleanup: drops expired client windows at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
