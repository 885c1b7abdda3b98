//! Foundation types for the crossview toolchain.
//!
//! This module provides the primitives used throughout the correlator:
//! - [`NamespacePath`] - Dot-segmented hierarchical identifiers
//! - [`normalize_nested_name`], [`normalize_type_name`] - The shared
//!   name-normalization functions
//!
//! This module has NO dependencies on other crossview modules.

mod normalize;
mod path;

pub use normalize::{
    COMPILED_NESTED_SEPARATOR, normalize_nested_name, normalize_parameter_types,
    normalize_type_name,
};
pub use path::NamespacePath;
