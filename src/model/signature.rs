//! Fully-qualified member signatures.
//!
//! The compiled view addresses callables with strings like
//! `acme.shop.services.OpService.plus(int, long)`: the declaring class's
//! binary name, the member name (`<init>` for constructors), and the
//! fully-qualified parameter type list separated by `, `. This module
//! parses and composes that format so the rest of the crate never
//! hand-assembles signature strings.

use smol_str::SmolStr;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::base::NamespacePath;

/// Errors produced when parsing a member signature string.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The string has no `(`.
    #[error("signature `{0}` has no parameter list")]
    MissingParameterList(String),
    /// The string does not end with `)`.
    #[error("signature `{0}` has an unterminated parameter list")]
    UnterminatedParameterList(String),
    /// Nothing precedes the parameter list.
    #[error("signature `{0}` has no member name")]
    MissingMemberName(String),
}

/// A parsed fully-qualified member signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberSignature {
    /// Path of the declaring class (binary notation preserved).
    pub owner: NamespacePath,
    /// Member simple name; [`CONSTRUCTOR_NAME`](super::CONSTRUCTOR_NAME)
    /// for constructors.
    pub name: SmolStr,
    /// Fully-qualified parameter type names, in order.
    pub parameter_types: Vec<SmolStr>,
}

impl MemberSignature {
    /// Compose a signature from its parts.
    pub fn new(
        owner: impl Into<NamespacePath>,
        name: impl Into<SmolStr>,
        parameter_types: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a signature string such as `pkg.Type.member(int, long)`.
    pub fn parse(signature: &str) -> Result<Self, SignatureError> {
        let open = signature
            .find('(')
            .ok_or_else(|| SignatureError::MissingParameterList(signature.to_string()))?;
        let rest = &signature[open + 1..];
        let params = rest
            .strip_suffix(')')
            .ok_or_else(|| SignatureError::UnterminatedParameterList(signature.to_string()))?;

        let qualified = &signature[..open];
        let path = NamespacePath::new(qualified);
        let name = path
            .last()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| SignatureError::MissingMemberName(signature.to_string()))?;
        let name = SmolStr::new(name);
        let owner = path.parent().unwrap_or_default();

        let parameter_types = params
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(SmolStr::new)
            .collect();

        Ok(Self {
            owner,
            name,
            parameter_types,
        })
    }
}

impl FromStr for MemberSignature {
    type Err = SignatureError;

    fn from_str(signature: &str) -> Result<Self, Self::Err> {
        Self::parse(signature)
    }
}

impl fmt::Display for MemberSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.owner.is_root() {
            write!(f, "{}.", self.owner)?;
        }
        write!(f, "{}(", self.name)?;
        for (i, ty) in self.parameter_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(ty)?;
        }
        f.write_str(")")
    }
}
