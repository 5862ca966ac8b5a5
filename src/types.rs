//! Data types for query and path parameters.
//!
//! Both parameter kinds carry a [`ParamUid`] so that an editor can address a
//! row independently of its name, which the user may be changing.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ================================================================================================
// IDENTIFIERS
// ================================================================================================

/// Opaque identifier of a single parameter row.
///
/// A fresh uid is generated every time a parameter is parsed or added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamUid(Uuid);

impl ParamUid {
    /// Generate a new random uid.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParamUid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParamUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ================================================================================================
// QUERY PARAMETERS
// ================================================================================================

/// A single `name=value` pair of a query string.
///
/// `enabled` decides whether the pair takes part in the final request URL.
/// The serializer itself ignores the flag; see
/// [`enabled_query_params`](crate::enabled_query_params).
///
/// # Examples
///
/// ```rust
/// use param_edit::QueryParam;
///
/// let param = QueryParam::new("page", "2");
/// assert!(param.enabled);
/// assert_eq!(format!("{param}"), "page=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// Row identifier
    #[serde(default)]
    pub uid: ParamUid,
    /// Parameter name, used verbatim (no percent-decoding)
    pub name: String,
    /// Parameter value, used verbatim (no percent-decoding)
    #[serde(default)]
    pub value: String,
    /// Whether the pair is sent with the request
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl QueryParam {
    /// Create an enabled query parameter with a fresh uid.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            uid: ParamUid::new(),
            name: name.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// The empty row the editor appends on "Add Param".
    pub fn blank() -> Self {
        Self::new("", "")
    }

    /// Builder-style toggle of the enabled flag.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Compare name and value only, ignoring uid and enabled flag.
    pub fn same_pair(&self, other: &QueryParam) -> bool {
        self.name == other.name && self.value == other.value
    }
}

impl fmt::Display for QueryParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}

// ================================================================================================
// PATH PARAMETERS
// ================================================================================================

/// A named placeholder of a path template such as `/users/:id`.
///
/// Path parameters have no enabled flag: a placeholder exists exactly as long
/// as it is present in the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathParam {
    /// Row identifier
    #[serde(default)]
    pub uid: ParamUid,
    /// Placeholder name without the marker character
    pub name: String,
    /// Value substituted for the placeholder
    #[serde(default)]
    pub value: String,
}

impl PathParam {
    /// Create a placeholder with an empty value and a fresh uid.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uid: ParamUid::new(),
            name: name.into(),
            value: String::new(),
        }
    }

    /// Builder-style value assignment.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

impl fmt::Display for PathParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{} = {}", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uids_are_unique() {
        let a = QueryParam::new("a", "1");
        let b = QueryParam::new("a", "1");
        assert_ne!(a.uid, b.uid);
        assert!(a.same_pair(&b));
    }

    #[test]
    fn test_display_implementations() {
        assert_eq!(format!("{}", QueryParam::new("a", "1")), "a=1");
        assert_eq!(format!("{}", QueryParam::new("flag", "")), "flag");
        assert_eq!(format!("{}", PathParam::new("id").with_value("7")), ":id = 7");
    }

    #[test]
    fn test_query_param_defaults_on_deserialize() {
        let param: QueryParam = serde_json::from_str(r#"{"name":"a"}"#).unwrap();
        assert_eq!(param.name, "a");
        assert_eq!(param.value, "");
        assert!(param.enabled);
    }

    #[test]
    fn test_uid_serializes_as_string() {
        let param = PathParam::new("id");
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["uid"], serde_json::Value::String(param.uid.to_string()));
    }
}
