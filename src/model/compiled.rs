//! The compiled view — symbols as resolved after compilation.
//!
//! Compiled names are binary names: fully qualified, with `$` separating
//! nested types. Members carry their resolved parameter type lists and a
//! fully-qualified signature string (see
//! [`MemberSignature`](super::signature::MemberSignature)); the
//! correlator matches on those strings exactly, so the assemblers here
//! compose them rather than trusting callers to.

use smol_str::SmolStr;
use std::sync::Arc;

use crate::base::NamespacePath;
use super::signature::MemberSignature;

/// The member name compiled artifacts give every constructor.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// A class as found in the compiled artifact.
#[derive(Clone, Debug)]
pub struct CompiledClass {
    /// Fully-qualified binary name, `$` separating nested types.
    pub qualified_name: Arc<str>,
    /// The package the class was compiled under.
    pub package: NamespacePath,
    /// Declared methods, in enumeration order.
    pub methods: Vec<CompiledMethod>,
    /// Declared constructors, in enumeration order.
    pub constructors: Vec<CompiledConstructor>,
}

impl CompiledClass {
    /// Create a class from its package and binary simple name
    /// (`OpService`, or `ComplexService$ComplexResult` for a nested
    /// type).
    pub fn new(package: impl Into<NamespacePath>, binary_name: &str) -> Self {
        let package = package.into();
        let qualified_name: Arc<str> = Arc::from(package.child(binary_name).to_string());
        Self {
            qualified_name,
            package,
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Add a method; its signature string is composed from the class's
    /// binary name, the method name and the parameter type list.
    pub fn with_method(
        mut self,
        name: impl Into<SmolStr>,
        parameter_types: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        let method = CompiledMethod::new(self.qualified_name.clone(), name, parameter_types);
        self.methods.push(method);
        self
    }

    /// Add a constructor from its parameter type list.
    pub fn with_constructor(
        mut self,
        parameter_types: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        let constructor = CompiledConstructor::new(self.qualified_name.clone(), parameter_types);
        self.constructors.push(constructor);
        self
    }

    /// The binary simple name: everything after the package.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

/// A method as found in the compiled artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledMethod {
    /// Simple name.
    pub name: SmolStr,
    /// Binary name of the declaring class.
    pub declaring_class: Arc<str>,
    /// Fully-qualified parameter type names, in order.
    pub parameter_types: Vec<SmolStr>,
    /// `declaring.name(t1, t2)` signature string.
    pub full_signature: Arc<str>,
}

impl CompiledMethod {
    /// Create a method, composing its signature string.
    pub fn new(
        declaring_class: Arc<str>,
        name: impl Into<SmolStr>,
        parameter_types: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        let name = name.into();
        let parameter_types: Vec<SmolStr> =
            parameter_types.into_iter().map(Into::into).collect();
        let full_signature: Arc<str> = Arc::from(
            MemberSignature::new(
                declaring_class.as_ref(),
                name.clone(),
                parameter_types.iter().cloned(),
            )
            .to_string(),
        );
        Self {
            name,
            declaring_class,
            parameter_types,
            full_signature,
        }
    }

    /// Resolved parameter type names, in order.
    pub fn parameter_type_names(&self) -> impl Iterator<Item = &str> {
        self.parameter_types.iter().map(SmolStr::as_str)
    }
}

/// A constructor as found in the compiled artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledConstructor {
    /// Binary name of the owning class.
    pub owner: Arc<str>,
    /// Fully-qualified parameter type names, in order.
    pub parameter_types: Vec<SmolStr>,
    /// `owner.<init>(t1, t2)` signature string.
    pub full_signature: Arc<str>,
}

impl CompiledConstructor {
    /// Create a constructor, composing its signature string.
    pub fn new(
        owner: Arc<str>,
        parameter_types: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        let parameter_types: Vec<SmolStr> =
            parameter_types.into_iter().map(Into::into).collect();
        let full_signature: Arc<str> = Arc::from(
            MemberSignature::new(
                owner.as_ref(),
                CONSTRUCTOR_NAME,
                parameter_types.iter().cloned(),
            )
            .to_string(),
        );
        Self {
            owner,
            parameter_types,
            full_signature,
        }
    }

    /// Resolved parameter type names, in order.
    pub fn parameter_type_names(&self) -> impl Iterator<Item = &str> {
        self.parameter_types.iter().map(SmolStr::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_qualified_name() {
        let class = CompiledClass::new("acme.shop.services", "OpService");
        assert_eq!(class.qualified_name.as_ref(), "acme.shop.services.OpService");
        assert_eq!(class.simple_name(), "OpService");
    }

    #[test]
    fn test_nested_class_keeps_binary_separator() {
        let class = CompiledClass::new("acme.shop.services", "ComplexService$ComplexResult");
        assert_eq!(
            class.qualified_name.as_ref(),
            "acme.shop.services.ComplexService$ComplexResult"
        );
        assert_eq!(class.simple_name(), "ComplexService$ComplexResult");
    }

    #[test]
    fn test_method_signature_composition() {
        let class = CompiledClass::new("acme.shop.converters", "ConvertersKt")
            .with_method("rootFun", ["int", "int"]);
        let method = &class.methods[0];

        assert_eq!(method.name, "rootFun");
        assert_eq!(
            method.full_signature.as_ref(),
            "acme.shop.converters.ConvertersKt.rootFun(int, int)"
        );
    }

    #[test]
    fn test_constructor_signature_composition() {
        let class = CompiledClass::new("acme.shop.services", "ComplexService")
            .with_constructor(["acme.shop.repositories.HelloRepository"]);
        let constructor = &class.constructors[0];

        assert_eq!(
            constructor.full_signature.as_ref(),
            "acme.shop.services.ComplexService.<init>(acme.shop.repositories.HelloRepository)"
        );
    }
}
