//! Domain Layer
//!
//! Policy locks, their validated packages, and the pure rules that shape an
//! export.
//!
//! ## Structure
//!
//! - `entities/` - Policy lock and package lock
//! - `value_objects/` - Resolved versions and ignore patterns
//! - `services/` - Export layout and generated artifacts
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
