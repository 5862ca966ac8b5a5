pub mod config;
pub mod error;
pub mod path;
pub mod query;
pub mod request;
pub mod types;
pub mod url_utils;

pub use config::{ConfigStore, ParamEditConfig};
pub use error::ParamError;
pub use path::{
    merge_path_params, parse_path_params, parse_path_params_preserving, parse_path_params_with,
    PathParamOptions,
};
pub use query::{enabled_query_params, parse_query_params, stringify_query_params};
pub use request::RequestParams;
pub use types::{ParamUid, PathParam, QueryParam};
pub use url_utils::{is_valid_url, split_on_first};

pub type Result<T> = std::result::Result<T, ParamError>;
