//! The two symbol hierarchies the correlator reconciles.
//!
//! Each view is its own tagged hierarchy rather than a unified tree:
//! [`source`] models declarations as written (source notation, nested
//! types separated with `.`), [`compiled`] models symbols as resolved
//! after compilation (binary names, `$` nesting, fully-qualified
//! signature strings). [`provider`] defines how materialized views
//! enter the correlator; [`signature`] parses and composes the
//! compiled view's member signature format.

pub mod compiled;
pub mod provider;
pub mod signature;
pub mod source;

pub use compiled::{CONSTRUCTOR_NAME, CompiledClass, CompiledConstructor, CompiledMethod};
pub use provider::{ClassPath, CompiledProvider, SourceProvider, SourceRoot};
pub use signature::{MemberSignature, SignatureError};
pub use source::{
    SourceConstructor, SourceFile, SourceFunction, SourceParameter, SourceProperty, SourceType,
};
