//! Flattened name indexes over the scoped symbol universes.
//!
//! Each index is a derived, read-only snapshot: the scoped universe
//! plus flattened declaration-order sequences and a by-simple-name
//! table for the correlation fast path. Nothing is deduplicated;
//! same-named members stay side by side and are disambiguated at
//! lookup time.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::model::compiled::{CompiledClass, CompiledConstructor, CompiledMethod};
use crate::model::source::{SourceFile, SourceFunction, SourceType};

// ============================================================================
// SOURCE INDEX
// ============================================================================

/// The scoped source universe, flattened for matching.
#[derive(Clone, Debug, Default)]
pub struct SourceIndex {
    /// Files inside the search scope, provider order.
    files: Vec<SourceFile>,
    /// Every declared function across the files, declaration order.
    functions: Vec<SourceFunction>,
    /// Every declared type across the files, nesting included,
    /// pre-order.
    types: Vec<SourceType>,
    /// Simple name → function indices (may hold several).
    functions_by_name: FxHashMap<SmolStr, Vec<usize>>,
}

impl SourceIndex {
    /// Build the index from already-scoped files.
    pub fn build(files: Vec<SourceFile>) -> Self {
        let functions: Vec<SourceFunction> = files
            .iter()
            .flat_map(|file| file.functions.iter().cloned())
            .collect();
        let types: Vec<SourceType> = files
            .iter()
            .flat_map(|file| file.declared_types().into_iter().cloned())
            .collect();

        let mut functions_by_name: FxHashMap<SmolStr, Vec<usize>> = FxHashMap::default();
        for (idx, function) in functions.iter().enumerate() {
            functions_by_name
                .entry(function.name.clone())
                .or_default()
                .push(idx);
        }

        debug!(
            files = files.len(),
            functions = functions.len(),
            types = types.len(),
            "built source index"
        );

        Self {
            files,
            functions,
            types,
            functions_by_name,
        }
    }

    /// The scoped files.
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// All declared functions, declaration order.
    pub fn functions(&self) -> &[SourceFunction] {
        &self.functions
    }

    /// All declared types, pre-order.
    pub fn types(&self) -> &[SourceType] {
        &self.types
    }

    /// All declared functions sharing a simple name, declaration order.
    pub fn functions_named(&self, name: &str) -> Vec<&SourceFunction> {
        self.functions_by_name
            .get(name)
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(|&idx| self.functions.get(idx))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The number of scoped files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check if the scoped universe is empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

// ============================================================================
// COMPILED INDEX
// ============================================================================

/// The scoped compiled universe, flattened for matching.
#[derive(Clone, Debug, Default)]
pub struct CompiledIndex {
    /// Classes inside the search scope, provider order.
    classes: Vec<CompiledClass>,
    /// Every method across the classes, enumeration order.
    methods: Vec<CompiledMethod>,
    /// Every constructor across the classes, enumeration order.
    constructors: Vec<CompiledConstructor>,
    /// Simple name → method indices (may hold several).
    methods_by_name: FxHashMap<SmolStr, Vec<usize>>,
}

impl CompiledIndex {
    /// Build the index from already-scoped classes.
    pub fn build(classes: Vec<CompiledClass>) -> Self {
        let methods: Vec<CompiledMethod> = classes
            .iter()
            .flat_map(|class| class.methods.iter().cloned())
            .collect();
        let constructors: Vec<CompiledConstructor> = classes
            .iter()
            .flat_map(|class| class.constructors.iter().cloned())
            .collect();

        let mut methods_by_name: FxHashMap<SmolStr, Vec<usize>> = FxHashMap::default();
        for (idx, method) in methods.iter().enumerate() {
            methods_by_name
                .entry(method.name.clone())
                .or_default()
                .push(idx);
        }

        debug!(
            classes = classes.len(),
            methods = methods.len(),
            constructors = constructors.len(),
            "built compiled index"
        );

        Self {
            classes,
            methods,
            constructors,
            methods_by_name,
        }
    }

    /// The scoped classes.
    pub fn classes(&self) -> &[CompiledClass] {
        &self.classes
    }

    /// All methods, enumeration order.
    pub fn methods(&self) -> &[CompiledMethod] {
        &self.methods
    }

    /// All constructors, enumeration order.
    pub fn constructors(&self) -> &[CompiledConstructor] {
        &self.constructors
    }

    /// All methods sharing a simple name, enumeration order.
    pub fn methods_named(&self, name: &str) -> Vec<&CompiledMethod> {
        self.methods_by_name
            .get(name)
            .map(|indices| {
                indices
                    .iter()
                    .filter_map(|&idx| self.methods.get(idx))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The number of scoped classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Check if the scoped universe is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
