//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and operations
//! - Gizmo colors
//! - Generational handles and collections
//! - Logging utilities

pub mod math;
pub mod color;
pub mod collections;
pub mod logging;
