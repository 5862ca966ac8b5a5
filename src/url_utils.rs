//! URL helpers shared by the query and path parsers.

use url::Url;

/// Scheme prefixes that count as "already has a scheme" for path extraction.
const KNOWN_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Decide whether a string is a syntactically valid absolute URL.
///
/// Every parse failure is reported as `false`; this never panics.
///
/// # Examples
///
/// ```rust
/// use param_edit::is_valid_url;
///
/// assert!(is_valid_url("http://example.com"));
/// assert!(!is_valid_url("::not a url::"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(_) => true,
        Err(e) => {
            log::debug!("'{candidate}' is not a valid URL: {e}");
            false
        }
    }
}

/// Prefix `default_scheme` unless the input already starts with `http://` or
/// `https://`.
pub fn with_default_scheme(candidate: &str, default_scheme: &str) -> String {
    if KNOWN_SCHEMES
        .iter()
        .any(|scheme| candidate.starts_with(scheme))
    {
        candidate.to_string()
    } else {
        format!("{default_scheme}{candidate}")
    }
}

/// Split a string on the first occurrence of `delimiter`.
///
/// Everything after the first delimiter is returned verbatim, including any
/// further delimiters.
///
/// ```rust
/// use param_edit::split_on_first;
///
/// assert_eq!(split_on_first("a=1=2", '='), ("a", Some("1=2")));
/// assert_eq!(split_on_first("flag", '='), ("flag", None));
/// ```
pub fn split_on_first(input: &str, delimiter: char) -> (&str, Option<&str>) {
    match input.split_once(delimiter) {
        Some((head, tail)) => (head, Some(tail)),
        None => (input, None),
    }
}

/// Split a URL string into `(base, query, fragment)` around the first `#` and
/// the first `?` before it.
pub fn split_url(url: &str) -> (&str, Option<&str>, Option<&str>) {
    let (before_fragment, fragment) = split_on_first(url, '#');
    let (base, query) = split_on_first(before_fragment, '?');
    (base, query, fragment)
}

/// Reassemble the pieces produced by [`split_url`]; an empty query drops the `?`.
pub fn join_url(base: &str, query: &str, fragment: Option<&str>) -> String {
    let mut url = base.to_string();
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}
