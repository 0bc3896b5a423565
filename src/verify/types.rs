//! Expectation tables and verification reports.

use std::fmt;

#[cfg(feature = "serde")]
use crate::error::{MatrixError, Result};

/// A fact expected under one field: a name alone, or a name at each of
/// several versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expected {
    pub name: String,
    /// Empty means any version.
    pub versions: Vec<String>,
}

/// Field → expected facts. Field order, and name order within a field,
/// is kept for reporting, for tables loaded from JSON too.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::verify::Expectations;
///
/// let expectations = Expectations::new()
///     .with_name("host_compiler", "gcc")
///     .with_versions("boost", "boost", ["1.74.0", "1.78.0"]);
///
/// assert_eq!(expectations.fact_count(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectations {
    fields: Vec<(String, Vec<Expected>)>,
}

impl Expectations {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, field: String) -> &mut Vec<Expected> {
        let pos = match self.fields.iter().position(|(f, _)| *f == field) {
            Some(pos) => pos,
            None => {
                self.fields.push((field, Vec::new()));
                self.fields.len() - 1
            }
        };
        &mut self.fields[pos].1
    }

    /// Expects some job to hold `name` under `field`, at any version.
    pub fn expect_name(&mut self, field: impl Into<String>, name: impl Into<String>) {
        self.entry(field.into()).push(Expected {
            name: name.into(),
            versions: Vec::new(),
        });
    }

    /// Expects, for each version, some job to hold `name@version` under
    /// `field`. An empty version list degrades to [`expect_name`](Self::expect_name).
    pub fn expect_versions<I, S>(
        &mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        versions: I,
    ) where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entry(field.into()).push(Expected {
            name: name.into(),
            versions: versions.into_iter().map(Into::into).collect(),
        });
    }

    pub fn with_name(mut self, field: impl Into<String>, name: impl Into<String>) -> Self {
        self.expect_name(field, name);
        self
    }

    pub fn with_versions<I, S>(
        mut self,
        field: impl Into<String>,
        name: impl Into<String>,
        versions: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expect_versions(field, name, versions);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of individual facts: one per name-only entry, one per
    /// version otherwise.
    pub fn fact_count(&self) -> usize {
        self.fields
            .iter()
            .flat_map(|(_, e)| e)
            .map(|e| e.versions.len().max(1))
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Expected])> + '_ {
        self.fields.iter().map(|(f, e)| (f.as_str(), e.as_slice()))
    }

    /// Parses a table of the form
    /// `{"field": {"name": ["version", ...], ...}, ...}`.
    ///
    /// # Errors
    /// [`MatrixError::InvalidConfig`] for malformed JSON,
    /// [`MatrixError::TypeMismatch`] when a level holds the wrong kind of
    /// value (for instance a numeric version).
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        use serde_json::Value as Json;

        fn kind(v: &Json) -> String {
            match v {
                Json::Null => "null",
                Json::Bool(_) => "boolean",
                Json::Number(_) => "number",
                Json::String(_) => "string",
                Json::Array(_) => "array",
                Json::Object(_) => "object",
            }
            .to_string()
        }

        let root: Json = serde_json::from_str(json)
            .map_err(|e| MatrixError::InvalidConfig(format!("expectations: {e}")))?;
        let Json::Object(fields) = &root else {
            return Err(MatrixError::TypeMismatch {
                context: "expectations".into(),
                expected: "object",
                found: kind(&root),
            });
        };

        let mut out = Expectations::new();
        for (field, names) in fields {
            let Json::Object(names) = names else {
                return Err(MatrixError::TypeMismatch {
                    context: field.clone(),
                    expected: "object",
                    found: kind(names),
                });
            };
            for (name, versions) in names {
                let context = format!("{field}.{name}");
                let Json::Array(versions) = versions else {
                    return Err(MatrixError::TypeMismatch {
                        context,
                        expected: "array",
                        found: kind(versions),
                    });
                };
                let versions = versions
                    .iter()
                    .map(|v| match v {
                        Json::String(s) => Ok(s.clone()),
                        other => Err(MatrixError::TypeMismatch {
                            context: context.clone(),
                            expected: "string",
                            found: kind(other),
                        }),
                    })
                    .collect::<Result<Vec<_>>>()?;
                out.expect_versions(field.as_str(), name.as_str(), versions);
            }
        }
        Ok(out)
    }
}

/// An expectation no job witnesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFact {
    pub field: String,
    pub name: String,
    pub version: Option<String>,
}

impl fmt::Display for MissingFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}@{} missing in {}", self.name, v, self.field),
            None => write!(f, "{} missing in {}", self.name, self.field),
        }
    }
}

/// Outcome of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Every unwitnessed fact, in expectation order.
    pub missing: Vec<MissingFact>,
    /// Number of facts checked.
    pub checked: usize,
}

impl VerifyReport {
    /// Whether every expected fact occurs in some job.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_groups_by_field() {
        let e = Expectations::new()
            .with_name("host_compiler", "gcc")
            .with_versions("ubuntu", "ubuntu", ["18.04"])
            .with_name("host_compiler", "clang");

        let fields: Vec<(&str, usize)> = e.iter().map(|(f, x)| (f, x.len())).collect();
        assert_eq!(fields, [("host_compiler", 2), ("ubuntu", 1)]);
        assert_eq!(e.fact_count(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_keeps_document_order() {
        let e = Expectations::from_json(
            r#"{"ubuntu": {"ubuntu": ["20.04"]}, "host_compiler": {"hipcc": [], "clang": []}}"#,
        )
        .unwrap();
        let fields: Vec<&str> = e.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, ["ubuntu", "host_compiler"]);

        let (_, hosts) = e.iter().nth(1).unwrap();
        let names: Vec<&str> = hosts.iter().map(|x| x.name.as_str()).collect();
        assert_eq!(names, ["hipcc", "clang"]);
    }

    #[test]
    fn test_missing_fact_display() {
        let name_only = MissingFact {
            field: "host_compiler".into(),
            name: "gcc".into(),
            version: None,
        };
        assert_eq!(name_only.to_string(), "gcc missing in host_compiler");

        let versioned = MissingFact {
            field: "boost".into(),
            name: "boost".into(),
            version: Some("1.74.0".into()),
        };
        assert_eq!(versioned.to_string(), "boost@1.74.0 missing in boost");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let e = Expectations::from_json(
            r#"{"host_compiler": {"gcc": [], "clang": []}, "boost": {"boost": ["1.74.0"]}}"#,
        )
        .unwrap();
        assert_eq!(e.fact_count(), 3);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_type_mismatch() {
        let err =
            Expectations::from_json(r#"{"cxx_standard": {"cxx_standard": [17]}}"#).unwrap_err();
        assert_eq!(
            err,
            MatrixError::TypeMismatch {
                context: "cxx_standard.cxx_standard".into(),
                expected: "string",
                found: "number".into(),
            }
        );

        let err = Expectations::from_json(r#"{"host_compiler": ["gcc"]}"#).unwrap_err();
        assert!(matches!(err, MatrixError::TypeMismatch { expected: "object", .. }));

        let err = Expectations::from_json("{").unwrap_err();
        assert!(matches!(err, MatrixError::InvalidConfig(_)));
    }
}
