//! # crossview-base
//!
//! Core library for correlating two independently derived views of the
//! same program: the **source view** (functions, types, properties and
//! constructors as written) and the **compiled view** (classes, methods
//! and constructors as resolved after compilation).
//!
//! The two views disagree on nested-type separators (`.` in source,
//! `$` in compiled names), on the representation of top-level functions,
//! and may contain overloads that share a simple name. The
//! [`Correlator`] reconciles them: given a symbol or qualified name in
//! one view, it resolves the counterpart in the other.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! correlate → matching engine (scope filter, name indexes, correlator)
//!   ↓
//! model     → the two symbol views + providers
//!   ↓
//! base      → primitives (namespace paths, name normalization)
//! ```
//!
//! ## Usage
//!
//! Materialize both views (or implement the provider traits over your
//! own loaders), then build a correlator scoped to a namespace root:
//!
//! ```ignore
//! use crossview::{ClassPath, Correlator, SourceRoot};
//!
//! let correlator = Correlator::new(sources, classes, "acme.shop");
//! let function = correlator.find_source_function("acme.shop.services.OpService.plus");
//! ```

/// Foundation types: namespace paths, name normalization
pub mod base;

/// The two symbol hierarchies: source view, compiled view, providers
pub mod model;

/// The matching engine: scope filter, name indexes, correlator
pub mod correlate;

// Re-export commonly needed items
pub use base::NamespacePath;
pub use correlate::Correlator;
pub use model::{ClassPath, CompiledProvider, SourceProvider, SourceRoot};
