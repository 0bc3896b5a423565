//! The normalized job record.

use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::Value;

/// A normalized job: attribute name → [`Value`].
///
/// Attributes are catalog parameters and, after backend expansion,
/// individual backends. Jobs compare by content; attribute order is not
/// significant.
///
/// # Examples
///
/// ```
/// use u_jobmatrix::job::Job;
///
/// let job = Job::new()
///     .with("host_compiler", "gcc", "9")
///     .with("ubuntu", "ubuntu", "20.04");
/// let required = Job::new().with("host_compiler", "gcc", "9");
///
/// assert!(job.matches(&required));
/// assert_eq!(job.name("host_compiler"), Some("gcc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Job {
    attrs: BTreeMap<String, Value>,
}

impl Job {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.attrs.insert(key.into(), value)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, name: &str, version: &str) -> Self {
        self.insert(key, Value::new(name, version));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attrs.get(key)
    }

    pub fn name(&self, key: &str) -> Option<&str> {
        self.get(key).map(Value::name)
    }

    pub fn version(&self, key: &str) -> Option<&str> {
        self.get(key).map(Value::version)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether every attribute of `required` is present here with an equal
    /// value.
    pub fn matches(&self, required: &Job) -> bool {
        required
            .attrs
            .iter()
            .all(|(k, v)| self.attrs.get(k) == Some(v))
    }

    /// `self` with every attribute of `overlay` written over it.
    pub fn merged(&self, overlay: &Job) -> Job {
        let mut out = self.clone();
        out.attrs
            .extend(overlay.attrs.iter().map(|(k, v)| (k.clone(), v.clone())));
        out
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Job {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            attrs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.attrs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_superset() {
        let job = Job::new()
            .with("host_compiler", "gcc", "9")
            .with("device_compiler", "gcc", "9")
            .with("ubuntu", "ubuntu", "20.04");

        assert!(job.matches(&Job::new()));
        assert!(job.matches(&Job::new().with("ubuntu", "ubuntu", "20.04")));
        assert!(!job.matches(&Job::new().with("ubuntu", "ubuntu", "18.04")));
        assert!(!job.matches(&Job::new().with("boost", "boost", "1.74.0")));
    }

    #[test]
    fn test_merged_overlay_wins() {
        let template = Job::new()
            .with("host_compiler", "", "")
            .with("cmake", "cmake", "3.22");
        let required = Job::new().with("host_compiler", "gcc", "9");
        let job = template.merged(&required);

        assert_eq!(job.len(), 2);
        assert_eq!(job.name("host_compiler"), Some("gcc"));
        assert_eq!(job.version("cmake"), Some("3.22"));
        assert_eq!(template.name("host_compiler"), Some(""));
    }

    #[test]
    fn test_from_iter_and_display() {
        let job: Job = [
            ("b", Value::new("b", "2")),
            ("a", Value::new("a", "1")),
        ]
        .into_iter()
        .collect();
        assert_eq!(job.to_string(), "{a: a@1, b: b@2}");
        assert_eq!(job.iter().map(|(k, _)| k).collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut job = Job::new();
        assert!(job.insert("x", Value::new("x", "1")).is_none());
        assert_eq!(job.insert("x", Value::new("x", "2")), Some(Value::new("x", "1")));
    }
}
