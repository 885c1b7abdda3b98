//! The correlator — bidirectional symbol lookup across the two views.
//!
//! One instance is scoped to a single namespace root for its lifetime.
//! Both indexes are computed at most once, on first use, behind a
//! one-time initialization guard; every query afterwards is a bounded
//! scan over the memoized snapshots. Lookups return `Option`: a
//! malformed or unknown qualified name fails to match, it never errors.

use once_cell::sync::OnceCell;
use tracing::trace;

use crate::base::{NamespacePath, normalize_nested_name, normalize_parameter_types};
use crate::model::compiled::{CompiledClass, CompiledConstructor, CompiledMethod};
use crate::model::provider::{CompiledProvider, SourceProvider};
use crate::model::source::{
    SourceConstructor, SourceFunction, SourceParameter, SourceProperty, SourceType,
};
use super::index::{CompiledIndex, SourceIndex};
use super::scope;

/// Resolves symbols between the source view and the compiled view.
///
/// The correlator holds no mutable state: the scoped universes and the
/// flattened indexes are write-once snapshots, safe for concurrent
/// readers once published.
pub struct Correlator<S, C> {
    sources: S,
    classes: C,
    search_scope: NamespacePath,
    source_index: OnceCell<SourceIndex>,
    compiled_index: OnceCell<CompiledIndex>,
}

impl<S: SourceProvider, C: CompiledProvider> Correlator<S, C> {
    /// Create a correlator scoped to `search_scope`.
    ///
    /// A different root requires a new instance.
    pub fn new(sources: S, classes: C, search_scope: impl Into<NamespacePath>) -> Self {
        Self {
            sources,
            classes,
            search_scope: search_scope.into(),
            source_index: OnceCell::new(),
            compiled_index: OnceCell::new(),
        }
    }

    /// The namespace root this instance is scoped to.
    pub fn search_scope(&self) -> &NamespacePath {
        &self.search_scope
    }

    /// The scoped, flattened source view (built on first use).
    pub fn source_index(&self) -> &SourceIndex {
        self.source_index.get_or_init(|| {
            SourceIndex::build(scope::scoped_sources(
                self.sources.all_sources(),
                &self.search_scope,
            ))
        })
    }

    /// The scoped, flattened compiled view (built on first use).
    pub fn compiled_index(&self) -> &CompiledIndex {
        self.compiled_index
            .get_or_init(|| CompiledIndex::build(self.classes.classes_in_package(&self.search_scope)))
    }

    // ========================================================================
    // FUNCTIONS & METHODS
    // ========================================================================

    /// Find a declared function by fully-qualified name.
    ///
    /// Both sides are already in source notation, so the comparison is
    /// exact string equality after path composition.
    pub fn find_source_function(&self, qualified_name: &str) -> Option<&SourceFunction> {
        let query = NamespacePath::new(qualified_name);
        self.source_index()
            .files()
            .iter()
            .filter(|file| scope::covers_query(&file.package, &query))
            .flat_map(|file| file.functions.iter())
            .find(|function| function.qualified_name() == qualified_name)
    }

    /// Find a compiled method by its fully-qualified signature string,
    /// e.g. `acme.shop.services.OpService.plus(int)`.
    pub fn find_compiled_method(&self, qualified_name: &str) -> Option<&CompiledMethod> {
        let query = NamespacePath::new(qualified_name);
        self.compiled_index()
            .classes()
            .iter()
            .filter(|class| scope::covers_query(&class.package, &query))
            .flat_map(|class| class.methods.iter())
            .find(|method| method.full_signature.as_ref() == qualified_name)
    }

    /// Find the compiled method corresponding to a declared function.
    ///
    /// A unique same-named method is returned without a parameter
    /// check; this assumes simple names are never shared across
    /// unrelated overload sets when only one candidate exists. With
    /// several candidates, the first whose normalized parameter type
    /// sequence matches the function's wins.
    pub fn compiled_method_for(&self, function: &SourceFunction) -> Option<&CompiledMethod> {
        let candidates = self.compiled_index().methods_named(&function.name);
        match candidates.len() {
            0 => None,
            1 => candidates.into_iter().next(),
            _ => {
                trace!(
                    name = %function.name,
                    candidates = candidates.len(),
                    "disambiguating compiled overloads by parameter types"
                );
                let target = normalize_parameter_types(function.parameter_type_names());
                candidates
                    .into_iter()
                    .find(|method| {
                        normalize_parameter_types(method.parameter_type_names()) == target
                    })
            }
        }
    }

    /// Find the declared function corresponding to a compiled method.
    ///
    /// Symmetric to [`compiled_method_for`](Self::compiled_method_for),
    /// including the unique-candidate shortcut.
    pub fn source_function_for(&self, method: &CompiledMethod) -> Option<&SourceFunction> {
        let candidates = self.source_index().functions_named(&method.name);
        match candidates.len() {
            0 => None,
            1 => candidates.into_iter().next(),
            _ => {
                trace!(
                    name = %method.name,
                    candidates = candidates.len(),
                    "disambiguating declared overloads by parameter types"
                );
                let target = normalize_parameter_types(method.parameter_type_names());
                candidates
                    .into_iter()
                    .find(|function| {
                        normalize_parameter_types(function.parameter_type_names()) == target
                    })
            }
        }
    }

    // ========================================================================
    // TYPES & CLASSES
    // ========================================================================

    /// Find a declared type by qualified name, in either notation
    /// (`Outer.Inner` or `Outer$Inner`).
    pub fn find_source_type(&self, qualified_name: &str) -> Option<&SourceType> {
        let target = normalize_nested_name(qualified_name);
        let query = NamespacePath::new(&target);
        self.source_index()
            .files()
            .iter()
            .filter(|file| scope::covers_query(&file.package, &query))
            .flat_map(|file| file.declared_types())
            .find(|ty| ty.qualified_name.as_ref() == target)
    }

    /// Find a compiled class by qualified name, in either notation.
    ///
    /// Unlike the source lookup this is a linear search over the whole
    /// scoped class index with no per-query namespace filter: compiled
    /// names are already unambiguous fully-qualified strings.
    pub fn find_compiled_class(&self, qualified_name: &str) -> Option<&CompiledClass> {
        let target = normalize_nested_name(qualified_name);
        self.compiled_index()
            .classes()
            .iter()
            .find(|class| normalize_nested_name(&class.qualified_name) == target)
    }

    /// Find the declared type corresponding to a compiled class.
    pub fn source_type_for(&self, class: &CompiledClass) -> Option<&SourceType> {
        self.source_type_named(&class.qualified_name)
    }

    /// Find the compiled class corresponding to a declared type.
    pub fn compiled_class_for(&self, ty: &SourceType) -> Option<&CompiledClass> {
        self.compiled_index()
            .classes()
            .iter()
            .find(|class| {
                normalize_nested_name(&class.qualified_name) == ty.qualified_name.as_ref()
            })
    }

    /// Resolve a compiled class name against the declared-type index.
    fn source_type_named(&self, compiled_name: &str) -> Option<&SourceType> {
        let target = normalize_nested_name(compiled_name);
        self.source_index()
            .types()
            .iter()
            .find(|ty| ty.qualified_name.as_ref() == target)
    }

    // ========================================================================
    // PARAMETERS & PROPERTIES
    // ========================================================================

    /// Find a primary-constructor parameter by fully-qualified name
    /// (`owner.Type.paramName`, either nesting notation).
    ///
    /// Resolves the owning type first; a name that exists only as a
    /// property correctly yields `None` here.
    pub fn find_constructor_parameter(&self, qualified_name: &str) -> Option<&SourceParameter> {
        let target = normalize_nested_name(qualified_name);
        let owner = NamespacePath::new(&target).parent()?;
        let ty = self.find_source_type(&owner.to_string())?;
        ty.primary_parameters()
            .iter()
            .find(|parameter| parameter.qualified_name() == target)
    }

    /// Find a declared property by fully-qualified name.
    ///
    /// Properties and constructor parameters are distinct search
    /// spaces; a request of the wrong kind yields `None`.
    pub fn find_property(&self, qualified_name: &str) -> Option<&SourceProperty> {
        let target = normalize_nested_name(qualified_name);
        let owner = NamespacePath::new(&target).parent()?;
        let ty = self.find_source_type(&owner.to_string())?;
        ty.properties
            .iter()
            .find(|property| property.qualified_name() == target)
    }

    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Find a compiled constructor by its fully-qualified signature
    /// string, e.g. `acme.shop.services.OpService.<init>(int)`.
    pub fn find_compiled_constructor(&self, qualified_name: &str) -> Option<&CompiledConstructor> {
        let query = NamespacePath::new(qualified_name);
        self.compiled_index()
            .classes()
            .iter()
            .filter(|class| scope::covers_query(&class.package, &query))
            .flat_map(|class| class.constructors.iter())
            .find(|constructor| constructor.full_signature.as_ref() == qualified_name)
    }

    /// Find a declared constructor by the compiled signature string.
    ///
    /// Constructors are only addressable through the compiled signature
    /// representation: the compiled constructor is resolved first, its
    /// owner mapped back to the declared type, and the first declared
    /// constructor with a matching normalized parameter type sequence
    /// returned. A constructor the compiled view does not know about
    /// (e.g. an implicit default constructor) is therefore unreachable.
    pub fn find_source_constructor(&self, qualified_name: &str) -> Option<&SourceConstructor> {
        let compiled = self.find_compiled_constructor(qualified_name)?;
        let target = normalize_parameter_types(compiled.parameter_type_names());
        let ty = self.source_type_named(&compiled.owner)?;
        ty.constructors
            .iter()
            .find(|constructor| {
                normalize_parameter_types(constructor.parameter_type_names()) == target
            })
    }
}
