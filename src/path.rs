//! Path template placeholder extraction.
//!
//! A placeholder is a path segment that starts with the marker character
//! (`:` by default), e.g. `id` in `https://api.example.com/users/:id`.

use crate::types::PathParam;
use crate::url_utils::with_default_scheme;
use crate::{ParamError, Result};
use std::collections::{HashMap, HashSet};
use url::Url;

/// Scheme prepended to templates written without one.
pub const DEFAULT_SCHEME: &str = "http://";

/// Character that introduces a placeholder segment.
pub const PLACEHOLDER_MARKER: char = ':';

/// Knobs for path extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathParamOptions {
    /// Prefix applied when the template starts with neither `http://` nor `https://`
    pub default_scheme: String,
    /// Placeholder marker character
    pub marker: char,
}

impl Default for PathParamOptions {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            marker: PLACEHOLDER_MARKER,
        }
    }
}

/// Extract the placeholders of a URL path template.
///
/// Templates without an `http://`/`https://` prefix are read as `http://`.
/// The result is ordered by first occurrence, contains each name once and
/// every entry starts with an empty value.
///
/// # Errors
///
/// [`ParamError::InvalidUrl`] when the scheme-defaulted template is not a valid
/// absolute URL.
///
/// # Examples
///
/// ```rust
/// use param_edit::parse_path_params;
///
/// let paths = parse_path_params("http://x.com/users/:id/posts/:postId")?;
/// let names: Vec<_> = paths.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, vec!["id", "postId"]);
/// # Ok::<(), param_edit::ParamError>(())
/// ```
pub fn parse_path_params(url_template: &str) -> Result<Vec<PathParam>> {
    parse_path_params_with(url_template, &PathParamOptions::default())
}

/// [`parse_path_params`] with an explicit default scheme and marker.
pub fn parse_path_params_with(
    url_template: &str,
    options: &PathParamOptions,
) -> Result<Vec<PathParam>> {
    if url_template.is_empty() {
        return Ok(Vec::new());
    }

    let candidate = with_default_scheme(url_template, &options.default_scheme);
    let url = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("Cannot extract path params from '{candidate}': {e}");
            return Err(ParamError::InvalidUrl(candidate));
        }
    };

    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for segment in url.path().split('/') {
        let Some(name) = segment.strip_prefix(options.marker) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        if seen.insert(name) {
            paths.push(PathParam::new(name));
        } else {
            log::debug!("Skipping duplicate placeholder ':{name}' in {candidate}");
        }
    }

    log::debug!("Extracted {} path params from {candidate}", paths.len());
    Ok(paths)
}

/// Carry values and uids over from `previous` into a fresh extraction.
///
/// Placeholders are matched by name; names that are new keep their empty
/// value, names that disappeared are dropped.
pub fn merge_path_params(previous: &[PathParam], fresh: Vec<PathParam>) -> Vec<PathParam> {
    let by_name: HashMap<&str, &PathParam> =
        previous.iter().map(|p| (p.name.as_str(), p)).collect();

    fresh
        .into_iter()
        .map(|param| match by_name.get(param.name.as_str()) {
            Some(old) => PathParam {
                uid: old.uid,
                name: param.name,
                value: old.value.clone(),
            },
            None => param,
        })
        .collect()
}

/// Re-extract placeholders, keeping values entered for unchanged names.
pub fn parse_path_params_preserving(
    url_template: &str,
    previous: &[PathParam],
) -> Result<Vec<PathParam>> {
    parse_path_params_preserving_with(url_template, previous, &PathParamOptions::default())
}

/// [`parse_path_params_preserving`] with explicit options.
pub fn parse_path_params_preserving_with(
    url_template: &str,
    previous: &[PathParam],
    options: &PathParamOptions,
) -> Result<Vec<PathParam>> {
    let fresh = parse_path_params_with(url_template, options)?;
    Ok(merge_path_params(previous, fresh))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(paths: &[PathParam]) -> Vec<&str> {
        paths.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_template() {
        assert!(parse_path_params("").unwrap().is_empty());
    }

    #[test]
    fn test_extracts_in_order_with_empty_values() {
        let paths = parse_path_params("http://x.com/users/:id/posts/:postId").unwrap();
        assert_eq!(names(&paths), vec!["id", "postId"]);
        assert!(paths.iter().all(|p| p.value.is_empty()));
    }

    #[test]
    fn test_duplicates_suppressed() {
        let paths = parse_path_params("http://x.com/:id/:id").unwrap();
        assert_eq!(names(&paths), vec!["id"]);
    }

    #[test]
    fn test_bare_marker_skipped() {
        let paths = parse_path_params("http://x.com/:/a/:b").unwrap();
        assert_eq!(names(&paths), vec!["b"]);
    }

    #[test]
    fn test_scheme_defaulting() {
        let paths = parse_path_params("x.com/:id").unwrap();
        assert_eq!(names(&paths), vec!["id"]);

        let paths = parse_path_params("https://x.com/v1/:org/repos").unwrap();
        assert_eq!(names(&paths), vec!["org"]);
    }

    #[test]
    fn test_query_is_not_part_of_path() {
        let paths = parse_path_params("http://x.com/:id?sort=:name").unwrap();
        assert_eq!(names(&paths), vec!["id"]);
    }

    #[test]
    fn test_invalid_url() {
        match parse_path_params("not a url") {
            Err(ParamError::InvalidUrl(candidate)) => {
                assert_eq!(candidate, "http://not a url");
            }
            other => panic!("Expected InvalidUrl, got: {other:?}"),
        }
    }

    #[test]
    fn test_custom_marker() {
        let options = PathParamOptions {
            default_scheme: "https://".to_string(),
            marker: '@',
        };
        let paths = parse_path_params_with("x.com/@user/:id", &options).unwrap();
        assert_eq!(names(&paths), vec!["user"]);
    }

    #[test]
    fn test_preserving_keeps_values_for_same_names() {
        let mut previous = parse_path_params("http://x.com/:a/:b").unwrap();
        previous[0].value = "1".to_string();
        previous[1].value = "2".to_string();

        let paths = parse_path_params_preserving("http://x.com/:b/:c", &previous).unwrap();
        assert_eq!(names(&paths), vec!["b", "c"]);
        assert_eq!(paths[0].value, "2");
        assert_eq!(paths[0].uid, previous[1].uid);
        assert_eq!(paths[1].value, "");
    }
}
