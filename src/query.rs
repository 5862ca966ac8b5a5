//! Query string parsing and serialization.
//!
//! Both directions are structural only: nothing is percent-encoded or decoded.
//! Callers that need encoding must encode names and values before building a
//! [`QueryParam`].

use crate::types::QueryParam;
use crate::url_utils::split_on_first;

/// Parse a raw query string (without the leading `?`) into ordered parameters.
///
/// Segments are split on `&`, then each segment on its first `=`. Segments
/// whose trimmed name is empty are dropped. Every surviving entry is enabled.
///
/// Accepts either `&str` or `Option<&str>`; an absent or empty query yields an
/// empty list.
///
/// # Examples
///
/// ```rust
/// use param_edit::parse_query_params;
///
/// let params = parse_query_params("a=1=2&&=x&flag");
/// let pairs: Vec<_> = params.iter().map(|p| (p.name.as_str(), p.value.as_str())).collect();
/// assert_eq!(pairs, vec![("a", "1=2"), ("flag", "")]);
/// ```
pub fn parse_query_params<'a>(query: impl Into<Option<&'a str>>) -> Vec<QueryParam> {
    let query = match query.into() {
        Some(query) if !query.is_empty() => query,
        _ => return Vec::new(),
    };

    let params: Vec<QueryParam> = query
        .split('&')
        .filter_map(|segment| {
            let (name, value) = split_on_first(segment, '=');
            if name.trim().is_empty() {
                log::trace!("Dropping query segment without a name: '{segment}'");
                None
            } else {
                Some(QueryParam::new(name, value.unwrap_or_default()))
            }
        })
        .collect();

    log::debug!("Parsed {} query params from '{query}'", params.len());
    params
}

/// Serialize parameters into a raw query string (without the leading `?`).
///
/// The serializer does not look at `enabled`: filter with
/// [`enabled_query_params`] first when the flag matters. For each entry, a
/// blank name skips it, a blank value emits the bare name, anything else emits
/// `name=value`. Tokens are joined with `&` in input order.
///
/// # Examples
///
/// ```rust
/// use param_edit::{stringify_query_params, QueryParam};
///
/// let params = vec![QueryParam::new("a", "1"), QueryParam::new("b", "")];
/// assert_eq!(stringify_query_params(&params[..]), "a=1&b");
/// assert_eq!(stringify_query_params(None), "");
/// ```
pub fn stringify_query_params<'a>(params: impl Into<Option<&'a [QueryParam]>>) -> String {
    let params = match params.into() {
        Some(params) if !params.is_empty() => params,
        _ => return String::new(),
    };

    params
        .iter()
        .filter(|p| !p.name.trim().is_empty())
        .map(|p| {
            if p.value.trim().is_empty() {
                p.name.clone()
            } else {
                format!("{}={}", p.name, p.value)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// The enabled subset of `params`, in order.
///
/// This is the filter every caller applies before
/// [`stringify_query_params`] when building a request URL.
pub fn enabled_query_params(params: &[QueryParam]) -> Vec<QueryParam> {
    params.iter().filter(|p| p.enabled).cloned().collect()
}
