//! Catalog value types, the parameter catalog and its column index.

use std::collections::HashMap;
use std::fmt;

use super::names::BACKENDS;
use crate::error::{MatrixError, Result};

/// An immutable `(name, version)` pair.
///
/// The version is free-form: a release number (`"11.0"`), a literal token
/// (`"off"`, `"develop"`) or an empty placeholder.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::catalog::Value;
///
/// let gcc = Value::new("gcc", "9");
/// assert_eq!(gcc.name(), "gcc");
/// assert_eq!(gcc.version(), "9");
/// assert_eq!(gcc.to_string(), "gcc@9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Value {
    name: String,
    version: String,
}

impl Value {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// One candidate value of a catalog column.
///
/// Ordinary columns hold [`CatalogValue::Scalar`] values. The reserved
/// `backends` column holds [`CatalogValue::BackendSet`] values: the state of
/// every backend at once, expanded into one job attribute per backend by the
/// normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogValue {
    Scalar(Value),
    BackendSet(Vec<Value>),
}

impl CatalogValue {
    /// Builds a backend set from `(backend, state)` pairs.
    pub fn backend_set<N, V, I>(backends: I) -> Self
    where
        N: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (N, V)>,
    {
        CatalogValue::BackendSet(
            backends
                .into_iter()
                .map(|(name, version)| Value::new(name, version))
                .collect(),
        )
    }

    /// The scalar value, or `None` for a backend set.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            CatalogValue::Scalar(v) => Some(v),
            CatalogValue::BackendSet(_) => None,
        }
    }

    /// The backend list, or `None` for a scalar.
    pub fn as_backends(&self) -> Option<&[Value]> {
        match self {
            CatalogValue::Scalar(_) => None,
            CatalogValue::BackendSet(b) => Some(b),
        }
    }
}

impl From<Value> for CatalogValue {
    fn from(value: Value) -> Self {
        CatalogValue::Scalar(value)
    }
}

impl fmt::Display for CatalogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogValue::Scalar(v) => write!(f, "{v}"),
            CatalogValue::BackendSet(backends) => {
                f.write_str("[")?;
                for (i, b) in backends.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{b}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Ordered mapping from parameter name to its candidate values.
///
/// Insertion order fixes the column positions of a generation run.
/// Re-inserting an existing name replaces its values in place.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::catalog::{Catalog, Value};
///
/// let catalog = Catalog::new()
///     .with_scalars("host_compiler", [Value::new("gcc", "9"), Value::new("clang", "12")])
///     .with_scalars("ubuntu", [Value::new("ubuntu", "20.04")]);
///
/// assert_eq!(catalog.keys().collect::<Vec<_>>(), ["host_compiler", "ubuntu"]);
/// assert_eq!(catalog.values(0).len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    params: Vec<(String, Vec<CatalogValue>)>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<CatalogValue>) {
        let name = name.into();
        if let Some(slot) = self.params.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = values;
        } else {
            self.params.push((name, values));
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_parameter(mut self, name: impl Into<String>, values: Vec<CatalogValue>) -> Self {
        self.insert(name, values);
        self
    }

    /// Builder for a column of scalar values.
    pub fn with_scalars<I>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.with_parameter(name, values.into_iter().map(CatalogValue::Scalar).collect())
    }

    /// Number of parameters (columns).
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names in column order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    /// Name of the parameter at `column`.
    ///
    /// # Panics
    /// Panics if `column` is out of range.
    pub fn key(&self, column: usize) -> &str {
        &self.params[column].0
    }

    /// Candidate values of the parameter at `column`.
    ///
    /// # Panics
    /// Panics if `column` is out of range.
    pub fn values(&self, column: usize) -> &[CatalogValue] {
        &self.params[column].1
    }

    /// Candidate values by parameter name.
    pub fn get(&self, name: &str) -> Option<&[CatalogValue]> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Builds the column index for this catalog.
    pub fn index(&self) -> ParamIndex {
        ParamIndex::build(self)
    }

    /// Checks that `backends` holds only backend sets and every other
    /// column only scalars.
    pub fn validate_reserved(&self) -> Result<()> {
        for (name, values) in &self.params {
            let reserved = name == BACKENDS;
            for value in values {
                match (reserved, value) {
                    (true, CatalogValue::Scalar(v)) => {
                        return Err(MatrixError::ReservedShape {
                            parameter: name.clone(),
                            detail: format!("expected a backend set, found scalar {v}"),
                        });
                    }
                    (false, CatalogValue::BackendSet(_)) => {
                        return Err(MatrixError::ReservedShape {
                            parameter: name.clone(),
                            detail: format!("backend sets are only allowed in '{BACKENDS}'"),
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

/// Column positions of one catalog.
///
/// Built once per generation run and handed to every filter invocation of
/// that run through [`Row`](super::Row). An index must not outlive or be
/// shared with a catalog of a different shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamIndex {
    positions: HashMap<String, usize>,
}

impl ParamIndex {
    /// Maps every catalog key to its 0-based column.
    pub fn build(catalog: &Catalog) -> Self {
        let positions = catalog
            .keys()
            .enumerate()
            .map(|(i, k)| (k.to_string(), i))
            .collect();
        Self { positions }
    }

    /// Column of `name`, if the catalog has it.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
