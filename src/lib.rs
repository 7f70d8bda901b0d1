//! # u-labcalc
//!
//! Closed-form formulas for undergraduate electronics and physics labs.
//!
//! Every function is a pure mapping from numbers to a number: no state,
//! no I/O, safe to call from any thread.
//!
//! ## Modules
//!
//! - [`amplifier`] — Small-signal gain and resistance of common-emitter,
//!   common-collector and common-base BJT stages
//! - [`stats`] — Mean, successive-difference mean, sample standard deviation
//! - [`t_table`] — Student's t factors for small samples
//! - [`uncertainty`] — Type-A, Type-B, relative and combined uncertainty
//! - [`error`] — [`LabError`] and the crate [`Result`] alias
//!
//! ## Design Philosophy
//!
//! - **Tables are literal**: t factors come from the printed table, and a
//!   missing entry is an error rather than an interpolation
//! - **Explicit constants**: thermal voltage and base spreading resistance
//!   are fields of [`amplifier::SmallSignalModel`], not hidden defaults
//! - **Property-based testing**: Physical invariants verified via proptest

pub mod amplifier;
pub mod error;
pub mod stats;
pub mod t_table;
pub mod uncertainty;

pub use error::{LabError, Result};
