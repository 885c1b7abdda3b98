//! Name normalization shared by both matching directions.
//!
//! The source view separates nested types with `.` while the compiled
//! view uses `$`; parameter types are written as simple names in source
//! but resolved to fully-qualified names in the compiled artifact. Both
//! matching directions funnel through the functions here so the two
//! sides can never drift apart.

/// The nested-type separator used by compiled class names (`Outer$Inner`).
pub const COMPILED_NESTED_SEPARATOR: char = '$';

/// Rewrite a compiled name into source notation by replacing the
/// nested-type separator with `.`.
///
/// Names already in source notation pass through unchanged, so the
/// function is safe to apply to either side of a comparison.
pub fn normalize_nested_name(name: &str) -> String {
    name.replace(COMPILED_NESTED_SEPARATOR, ".")
}

/// Reduce a parameter type name to its comparable form: the last
/// dot-separated segment, lowercased.
///
/// `acme.shop.repositories.HelloRepository` and the declared
/// `HelloRepository` both become `hellorepository`; `Int` and the
/// compiled `int` both become `int`.
pub fn normalize_type_name(type_name: &str) -> String {
    let last = type_name.rsplit('.').next().unwrap_or(type_name);
    last.to_lowercase()
}

/// Normalize an ordered parameter type list for positional comparison.
pub fn normalize_parameter_types<'a>(types: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    types.into_iter().map(normalize_type_name).collect()
}
