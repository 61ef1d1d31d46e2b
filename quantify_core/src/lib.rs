//! # quantify_core - Construction Quantity Estimation Engine
//!
//! `quantify_core` estimates construction material quantities (cement, sand,
//! aggregate, reinforcement steel) and purchase cost for common structural
//! elements: piles, footings, columns, beams, slabs, stairs, lintels,
//! sunshades, brick work, and plaster.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pure functions that take input and return results
//! - **Never fails on user input**: half-typed fields estimate as zero
//!   quantities instead of erroring; a visibly wrong number beats a crash
//!   mid-edit
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Explicit configuration**: rates and coefficients travel as a value
//!   into every call, so regional rate sets can run side by side
//!
//! ## Quick Start
//!
//! ```rust
//! use quantify_core::config::GlobalConfig;
//! use quantify_core::estimates::{calculate, ElementType};
//! use quantify_core::inputs::InputMap;
//!
//! let mut inputs = InputMap::new();
//! inputs.insert("area".into(), 1200.0.into());
//! inputs.insert("thickness".into(), 5.0.into());
//! inputs.insert("mix_ratio".into(), "1:2:4 (M15)".into());
//! inputs.insert("rod_dia".into(), "10".into());
//!
//! let result = calculate(ElementType::Slab, &inputs, &GlobalConfig::default());
//! assert!(result.cement_bags > 0.0);
//! assert!(result.total_cost > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`estimates`] - element formulas, dispatch, and grand totals
//! - [`schema`] - per-element input field catalog
//! - [`inputs`] - raw field values and schema-backed resolution
//! - [`materials`] - mix ratios and rod weight tables
//! - [`config`] - rates and coefficients
//! - [`project`] - project and saved-item shapes
//! - [`units`] - type-safe unit wrappers
//! - [`errors`] - structured error types

pub mod config;
pub mod errors;
pub mod estimates;
pub mod inputs;
pub mod materials;
pub mod project;
pub mod schema;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use config::GlobalConfig;
pub use errors::{EngineError, EngineResult};
pub use estimates::{calculate, grand_total, ElementType, EstimationResult};
pub use inputs::{FieldValue, InputMap};
pub use project::{Project, SavedItem};
