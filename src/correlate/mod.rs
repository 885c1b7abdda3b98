//! The matching engine — scope filter, name indexes, correlator.
//!
//! Three cooperating layers, built lazily over the two providers:
//!
//! 1. **Scope filter** ([`scope`]) narrows each view to the configured
//!    namespace root, producing the working symbol universe.
//! 2. **Name indexes** ([`index`]) flatten the scoped universes into
//!    declaration-order sequences with by-simple-name lookup tables.
//! 3. **[`Correlator`]** answers qualified-name lookups in either view
//!    and converts symbols between them, disambiguating overloads by
//!    normalized parameter types.

pub mod correlator;
pub mod index;
pub mod scope;

pub use correlator::Correlator;
pub use index::{CompiledIndex, SourceIndex};
