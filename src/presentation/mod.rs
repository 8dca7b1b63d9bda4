//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use policy_export::presentation::factory;
//!
//! let mut use_case = factory::create_export_use_case(request, OutputFormat::Text);
//! let outcome = use_case.run()?;
//! ```

pub mod factory;
pub mod output;

pub use factory::create_export_use_case;
pub use output::{create_renderer, ExportOutcomeRenderer, OutputFormat};
