//! The source view — declarations as written.
//!
//! Everything here is already parsed; the provider hands over complete
//! trees and the correlator never mutates them. Qualified names use
//! source notation throughout: dot-separated, including across nested
//! types.

use smol_str::SmolStr;
use std::sync::Arc;

use crate::base::NamespacePath;

/// A parsed source file: a package path plus its declarations.
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// Display name for the file. Not used in matching.
    pub name: SmolStr,
    /// The namespace path the file declares.
    pub package: NamespacePath,
    /// Every function declared in the file (top-level and member),
    /// in declaration order.
    pub functions: Vec<SourceFunction>,
    /// Top-level types declared in the file, in declaration order.
    /// Nested types hang off their parents.
    pub types: Vec<SourceType>,
}

impl SourceFile {
    /// Create an empty file under `package`.
    pub fn new(name: impl Into<SmolStr>, package: impl Into<NamespacePath>) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            functions: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Add a declared function.
    pub fn with_function(mut self, function: SourceFunction) -> Self {
        self.functions.push(function);
        self
    }

    /// Add a top-level declared type.
    pub fn with_type(mut self, ty: SourceType) -> Self {
        self.types.push(ty);
        self
    }

    /// All declared types in the file, nesting included.
    ///
    /// Pre-order: each type precedes its nested types, declaration
    /// order within each level.
    pub fn declared_types(&self) -> Vec<&SourceType> {
        let mut out = Vec::new();
        for ty in &self.types {
            ty.collect_into(&mut out);
        }
        out
    }
}

/// A function as written in source.
///
/// Top-level functions are enclosed by the file's package; member
/// functions by the package plus the declaring type's path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFunction {
    /// Simple name.
    pub name: SmolStr,
    /// The namespace the function is addressed under.
    pub enclosing: NamespacePath,
    /// Ordered parameters with their declared type names.
    pub parameters: Vec<SourceParameter>,
}

impl SourceFunction {
    /// Create a parameterless function.
    pub fn new(enclosing: impl Into<NamespacePath>, name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            enclosing: enclosing.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter with its declared type name as written.
    pub fn with_parameter(
        mut self,
        name: impl Into<SmolStr>,
        type_name: impl Into<SmolStr>,
    ) -> Self {
        let owner: Arc<str> = Arc::from(self.qualified_name());
        self.parameters.push(SourceParameter {
            name: name.into(),
            type_name: type_name.into(),
            owner,
        });
        self
    }

    /// The fully-qualified name: enclosing path plus simple name.
    pub fn qualified_name(&self) -> String {
        self.enclosing.child(&self.name).to_string()
    }

    /// Declared parameter type names, in order.
    pub fn parameter_type_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.type_name.as_str())
    }
}

/// A class or interface as written in source.
///
/// Nested types form a tree; a nested type's qualified name is the
/// parent's qualified name plus `.` plus the simple name.
#[derive(Clone, Debug)]
pub struct SourceType {
    /// Simple name.
    pub name: SmolStr,
    /// Fully-qualified nested name in source notation.
    pub qualified_name: Arc<str>,
    /// Types declared inside this one, in declaration order.
    pub nested: Vec<SourceType>,
    /// Declared constructors, primary first.
    pub constructors: Vec<SourceConstructor>,
    /// Declared properties, in declaration order.
    pub properties: Vec<SourceProperty>,
}

impl SourceType {
    /// Create a type declared directly under `enclosing`.
    ///
    /// For a nested type, `enclosing` is the parent type's qualified
    /// name as a path.
    pub fn new(enclosing: &NamespacePath, name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        let qualified_name: Arc<str> = Arc::from(enclosing.child(&name).to_string());
        Self {
            name,
            qualified_name,
            nested: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Add a nested type.
    pub fn with_nested(mut self, child: SourceType) -> Self {
        self.nested.push(child);
        self
    }

    /// Add a constructor from `(parameter name, declared type name)`
    /// pairs. The first constructor added is the primary one.
    pub fn with_constructor<N, T>(mut self, parameters: impl IntoIterator<Item = (N, T)>) -> Self
    where
        N: Into<SmolStr>,
        T: Into<SmolStr>,
    {
        let owner = self.qualified_name.clone();
        let parameters = parameters
            .into_iter()
            .map(|(name, type_name)| SourceParameter {
                name: name.into(),
                type_name: type_name.into(),
                owner: owner.clone(),
            })
            .collect();
        self.constructors.push(SourceConstructor {
            owner,
            parameters,
        });
        self
    }

    /// Add a declared property.
    pub fn with_property(mut self, name: impl Into<SmolStr>) -> Self {
        self.properties.push(SourceProperty {
            name: name.into(),
            owner: self.qualified_name.clone(),
        });
        self
    }

    /// The path of this type, for constructing nested children.
    pub fn path(&self) -> NamespacePath {
        NamespacePath::new(&self.qualified_name)
    }

    /// The primary constructor's parameters, or empty if the type
    /// declares no constructor.
    pub fn primary_parameters(&self) -> &[SourceParameter] {
        self.constructors
            .first()
            .map(|c| c.parameters.as_slice())
            .unwrap_or(&[])
    }

    pub(crate) fn collect_into<'a>(&'a self, out: &mut Vec<&'a SourceType>) {
        out.push(self);
        for child in &self.nested {
            child.collect_into(out);
        }
    }
}

/// A constructor as written in source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConstructor {
    /// Qualified name of the declaring type.
    pub owner: Arc<str>,
    /// Ordered parameters with their declared type names.
    pub parameters: Vec<SourceParameter>,
}

impl SourceConstructor {
    /// Declared parameter type names, in order.
    pub fn parameter_type_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.type_name.as_str())
    }
}

/// A declared parameter: constructor or function value parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceParameter {
    /// Simple name.
    pub name: SmolStr,
    /// The type name as written (simple or qualified).
    pub type_name: SmolStr,
    /// Qualified name of the owning declaration.
    pub owner: Arc<str>,
}

impl SourceParameter {
    /// Owner qualified name plus simple name.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.owner, self.name)
    }
}

/// A property declared on a type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceProperty {
    /// Simple name.
    pub name: SmolStr,
    /// Qualified name of the owning type.
    pub owner: Arc<str>,
}

impl SourceProperty {
    /// Owner qualified name plus simple name.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_qualified_name() {
        let top_level = SourceFunction::new("acme.shop.converters", "rootFun");
        assert_eq!(top_level.qualified_name(), "acme.shop.converters.rootFun");

        let member = SourceFunction::new("acme.shop.services.OpService", "plus");
        assert_eq!(member.qualified_name(), "acme.shop.services.OpService.plus");
    }

    #[test]
    fn test_nested_type_qualified_name() {
        let services = NamespacePath::new("acme.shop.services");
        let outer = SourceType::new(&services, "ComplexService");
        let inner = SourceType::new(&outer.path(), "ComplexResult");

        assert_eq!(
            inner.qualified_name.as_ref(),
            "acme.shop.services.ComplexService.ComplexResult"
        );
    }

    #[test]
    fn test_declared_types_are_pre_order() {
        let pkg = NamespacePath::new("acme.shop.services");
        let outer = SourceType::new(&pkg, "ComplexService");
        let inner = SourceType::new(&outer.path(), "ComplexResult");
        let file = SourceFile::new("complex", "acme.shop.services")
            .with_type(outer.with_nested(inner))
            .with_type(SourceType::new(&pkg, "OpService"));

        let names: Vec<_> = file
            .declared_types()
            .iter()
            .map(|t| t.qualified_name.as_ref())
            .collect();
        assert_eq!(
            names,
            [
                "acme.shop.services.ComplexService",
                "acme.shop.services.ComplexService.ComplexResult",
                "acme.shop.services.OpService",
            ]
        );
    }

    #[test]
    fn test_primary_constructor_parameters() {
        let pkg = NamespacePath::new("acme.shop.services");
        let ty = SourceType::new(&pkg, "ComplexService")
            .with_constructor([("helloRepository", "HelloRepository")])
            .with_constructor([("helloRepository", "HelloRepository"), ("retries", "Int")]);

        let primary: Vec<_> = ty
            .primary_parameters()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(primary, ["helloRepository"]);
        assert_eq!(ty.constructors.len(), 2);
        assert_eq!(
            ty.primary_parameters()[0].qualified_name(),
            "acme.shop.services.ComplexService.helloRepository"
        );
    }

    #[test]
    fn test_property_qualified_name() {
        let pkg = NamespacePath::new("acme.shop.repositories");
        let ty = SourceType::new(&pkg, "WorldRepository").with_property("weight");
        assert_eq!(
            ty.properties[0].qualified_name(),
            "acme.shop.repositories.WorldRepository.weight"
        );
    }
}
