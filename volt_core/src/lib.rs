//! # volt_core - Electrical Calculation Engine
//!
//! `volt_core` is the computational heart of Voltaic, providing the
//! electrical engineering calculations behind the calculator suite. All
//! inputs and outputs are JSON-serializable, so front ends and automation
//! can drive the engine over a plain JSON boundary.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Injected Persistence**: History and themes work over any
//!   [`storage::KeyValueStorage`] backend
//!
//! ## Quick Start
//!
//! ```rust
//! use volt_core::calculators::ohm::{self, OhmInput};
//!
//! let input = OhmInput {
//!     voltage_v: Some(12.0),
//!     current_a: Some(2.0),
//!     resistance_ohm: None,
//! };
//!
//! let solution = ohm::calculate(&input).unwrap().unwrap();
//! assert_eq!(solution.display(), "6.00");
//! assert_eq!(solution.unit(), "Ω");
//! ```
//!
//! ## Modules
//!
//! - [`calculators`] - The ten formula modules (Ohm, power, wire size, ...)
//! - [`validation`] - Raw-string number validation and safety warnings
//! - [`materials`] - Conductor, core and LED reference data
//! - [`units`] - Type-safe unit wrappers
//! - [`history`] - Append-only calculation log with change notifications
//! - [`report`] - JSON/CSV/TXT/HTML report export
//! - [`theme`] - Color presets and palette persistence
//! - [`storage`] - Key-value persistence backends
//! - [`errors`] - Structured error types

pub mod calculators;
pub mod errors;
pub mod history;
pub mod materials;
pub mod report;
pub mod storage;
pub mod theme;
pub mod units;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use calculators::Calculator;
pub use errors::{VoltError, VoltResult};
pub use history::{CalculationRecord, HistoryStore, RecordDraft};
pub use report::ReportMeta;
pub use storage::{KeyValueStorage, MemoryStorage};
