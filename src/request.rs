//! In-memory parameter state of a single request.
//!
//! [`RequestParams`] is what an editor holds while the user types: the raw URL,
//! the query parameter rows and the path parameter rows. Edits to the URL
//! re-derive both lists; edits to the query rows rewrite the URL's query string
//! from the enabled rows only.

use crate::path::{parse_path_params_preserving_with, parse_path_params_with, PathParamOptions};
use crate::query::{enabled_query_params, parse_query_params, stringify_query_params};
use crate::types::{ParamUid, PathParam, QueryParam};
use crate::url_utils::{join_url, split_url, with_default_scheme};
use crate::{ParamError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Parameter state of one request.
///
/// # Examples
///
/// ```rust
/// use param_edit::RequestParams;
///
/// let mut request = RequestParams::from_url("https://api.example.com/users/:id?verbose");
/// assert_eq!(request.params.len(), 1);
/// assert_eq!(request.paths[0].name, "id");
///
/// let mut id = request.paths[0].clone();
/// id.value = "42".to_string();
/// request.update_path_param(id)?;
/// assert_eq!(request.interpolated_url(), "https://api.example.com/users/42?verbose");
/// # Ok::<(), param_edit::ParamError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestParams {
    /// Raw URL as typed, including query string
    pub url: String,
    /// Query parameter rows, enabled and disabled
    #[serde(default)]
    pub params: Vec<QueryParam>,
    /// Path parameter rows, always present (possibly empty)
    #[serde(default)]
    pub paths: Vec<PathParam>,
    #[serde(skip)]
    options: PathParamOptions,
}

impl RequestParams {
    /// Build the parameter state for a URL with default extraction options.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::from_url_with(url, PathParamOptions::default())
    }

    /// Build the parameter state for a URL.
    ///
    /// A URL that cannot be parsed yields no path params; this is the normal
    /// state while the user is still typing.
    pub fn from_url_with(url: impl Into<String>, options: PathParamOptions) -> Self {
        let url = url.into();
        let params = parse_query_params(split_url(&url).1);
        let paths = match parse_path_params_with(&url, &options) {
            Ok(paths) => paths,
            Err(e) => {
                log::warn!("No path params for '{url}': {e}");
                Vec::new()
            }
        };

        Self {
            url,
            params,
            paths,
            options,
        }
    }

    /// Replace the extraction options used by later URL edits.
    pub fn set_options(&mut self, options: PathParamOptions) {
        self.options = options;
    }

    /// Apply a new raw URL.
    ///
    /// Query rows are re-parsed from the new query string. Path rows are
    /// re-extracted, keeping values of placeholders whose name did not change.
    /// If the new URL cannot be parsed the path rows are left as they were.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
        self.params = parse_query_params(split_url(&self.url).1);

        match parse_path_params_preserving_with(&self.url, &self.paths, &self.options) {
            Ok(paths) => self.paths = paths,
            Err(e) => log::warn!("Keeping previous path params: {e}"),
        }
    }

    /// Append an empty, enabled query row and return its uid.
    pub fn add_query_param(&mut self) -> ParamUid {
        let param = QueryParam::blank();
        let uid = param.uid;
        self.params.push(param);
        uid
    }

    /// Replace the query row with the same uid and rewrite the URL's query.
    pub fn update_query_param(&mut self, param: QueryParam) -> Result<()> {
        let slot = self
            .params
            .iter_mut()
            .find(|p| p.uid == param.uid)
            .ok_or(ParamError::UnknownParam(param.uid))?;
        *slot = param;
        self.sync_url_query();
        Ok(())
    }

    /// Remove the query row with `uid` and rewrite the URL's query.
    pub fn delete_query_param(&mut self, uid: ParamUid) -> Result<()> {
        let index = self
            .params
            .iter()
            .position(|p| p.uid == uid)
            .ok_or(ParamError::UnknownParam(uid))?;
        self.params.remove(index);
        self.sync_url_query();
        Ok(())
    }

    /// Set the value of the path row with the same uid.
    ///
    /// Only the value is taken over; placeholder names come from the URL.
    pub fn update_path_param(&mut self, path: PathParam) -> Result<()> {
        let slot = self
            .paths
            .iter_mut()
            .find(|p| p.uid == path.uid)
            .ok_or(ParamError::UnknownParam(path.uid))?;
        slot.value = path.value;
        Ok(())
    }

    /// Query string built from the enabled rows.
    pub fn query_string(&self) -> String {
        stringify_query_params(&enabled_query_params(&self.params)[..])
    }

    /// The URL without query string and fragment.
    pub fn base_url(&self) -> &str {
        split_url(&self.url).0
    }

    /// The request URL with placeholders replaced by their values.
    ///
    /// The URL goes through the same parser as path extraction, so the result
    /// is normalized (default scheme applied, dot segments resolved, path and
    /// query percent-encoded). Placeholders whose value is empty are left in
    /// place. A URL that cannot be parsed only gets its query rewritten.
    pub fn interpolated_url(&self) -> String {
        let candidate = with_default_scheme(&self.url, &self.options.default_scheme);
        let mut url = match Url::parse(&candidate) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Not interpolating '{}': {e}", self.url);
                let (base, _, fragment) = split_url(&self.url);
                return join_url(base, &self.query_string(), fragment);
            }
        };

        let marker = self.options.marker;
        let path = url
            .path()
            .split('/')
            .map(|segment| {
                segment
                    .strip_prefix(marker)
                    .and_then(|name| self.paths.iter().find(|p| p.name == name))
                    .filter(|p| !p.value.is_empty())
                    .map(|p| p.value.as_str())
                    .unwrap_or(segment)
            })
            .collect::<Vec<_>>()
            .join("/");
        url.set_path(&path);

        let query = self.query_string();
        url.set_query((!query.is_empty()).then_some(query.as_str()));
        url.to_string()
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON string; a missing `paths` field becomes empty.
    ///
    /// Extraction options are not part of the JSON record, so the result uses
    /// the defaults. Use [`RequestParams::from_json_with`] for a custom marker
    /// or scheme.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with(json, PathParamOptions::default())
    }

    /// Deserialize from a JSON string and attach extraction options.
    pub fn from_json_with(json: &str, options: PathParamOptions) -> Result<Self> {
        let mut request: Self = serde_json::from_str(json)?;
        request.options = options;
        Ok(request)
    }

    fn sync_url_query(&mut self) {
        let (base, _, fragment) = split_url(&self.url);
        let url = join_url(base, &self.query_string(), fragment);
        log::debug!("URL rewritten from query rows: {url}");
        self.url = url;
    }
}
