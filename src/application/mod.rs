//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ExportUseCase` - Orchestrates the export transaction (load, validate, stage, commit)

pub mod export;

pub use export::{ExportOutcome, ExportRequest, ExportUseCase};
