//! Providers — how the two materialized views enter the correlator.
//!
//! The correlator performs no I/O itself; whatever loads and parses the
//! program hands over complete views through these traits. The in-memory
//! implementations here are the assembly surface used by tests and by
//! embedders that materialize the views themselves.

use indexmap::IndexMap;
use std::sync::Arc;

use crate::base::NamespacePath;
use super::compiled::CompiledClass;
use super::source::SourceFile;

/// Supplies the source view: all parsed files, unscoped.
pub trait SourceProvider {
    /// Every parsed source file. Scoping happens in the correlator.
    fn all_sources(&self) -> Vec<SourceFile>;
}

/// Supplies the compiled view, scoped at the provider.
pub trait CompiledProvider {
    /// All compiled classes whose package is or is inside `package`.
    fn classes_in_package(&self, package: &NamespacePath) -> Vec<CompiledClass>;
}

/// In-memory source provider: a set of parsed files in insertion order.
#[derive(Clone, Debug, Default)]
pub struct SourceRoot {
    files: Vec<SourceFile>,
}

impl SourceRoot {
    /// Create an empty source root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file.
    pub fn insert(&mut self, file: SourceFile) {
        self.files.push(file);
    }

    /// Add a file, chainable.
    pub fn with_file(mut self, file: SourceFile) -> Self {
        self.insert(file);
        self
    }

    /// Iterate over the files in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// The number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the root holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceProvider for SourceRoot {
    fn all_sources(&self) -> Vec<SourceFile> {
        self.files.clone()
    }
}

/// In-memory compiled provider, keyed by binary class name.
///
/// Re-inserting a class under the same binary name replaces the earlier
/// entry; enumeration preserves insertion order.
#[derive(Clone, Debug, Default)]
pub struct ClassPath {
    classes: IndexMap<Arc<str>, CompiledClass>,
}

impl ClassPath {
    /// Create an empty class path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class.
    pub fn insert(&mut self, class: CompiledClass) {
        self.classes.insert(class.qualified_name.clone(), class);
    }

    /// Add a class, chainable.
    pub fn with_class(mut self, class: CompiledClass) -> Self {
        self.insert(class);
        self
    }

    /// Look up a class by binary name.
    pub fn get(&self, qualified_name: &str) -> Option<&CompiledClass> {
        self.classes.get(qualified_name)
    }

    /// The number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the class path holds no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl CompiledProvider for ClassPath {
    fn classes_in_package(&self, package: &NamespacePath) -> Vec<CompiledClass> {
        self.classes
            .values()
            .filter(|class| class.package.is_or_inside_of(package))
            .cloned()
            .collect()
    }
}
