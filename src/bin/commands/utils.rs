use param_edit::{split_on_first, PathParam, QueryParam};

/// Parse a command line parameter argument like `name=value` or `!name`.
///
/// A leading '!' marks the parameter disabled.
pub fn parse_param_arg(arg: &str) -> QueryParam {
    let (enabled, pair) = match arg.strip_prefix('!') {
        Some(rest) => (false, rest),
        None => (true, arg),
    };
    let (name, value) = split_on_first(pair, '=');
    QueryParam::new(name, value.unwrap_or_default()).with_enabled(enabled)
}

/// Parse a `name=value` assignment, rejecting arguments without '='.
pub fn parse_assignment(arg: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    match split_on_first(arg, '=') {
        (name, Some(value)) if !name.trim().is_empty() => {
            Ok((name.to_string(), value.to_string()))
        }
        _ => Err(format!("Invalid assignment '{arg}'. Expected 'name=value'").into()),
    }
}

/// Print query parameters as an aligned table
pub fn print_query_params(params: &[QueryParam]) {
    if params.is_empty() {
        println!("  (no query params)");
        return;
    }

    let width = params.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for param in params {
        let marker = if param.enabled { "✓" } else { "✗" };
        println!("  {marker} {:width$}  {}", param.name, param.value);
    }
}

/// Format path parameters as aligned rows, prefixing names with `marker`
pub fn format_path_params(paths: &[PathParam], marker: char) -> Vec<String> {
    let width = paths.iter().map(|p| p.name.len()).max().unwrap_or(0);
    paths
        .iter()
        .map(|path| format!("  {marker}{:width$}  {}", path.name, path.value))
        .collect()
}

/// Print path parameters as an aligned table
pub fn print_path_params(paths: &[PathParam], marker: char) {
    if paths.is_empty() {
        println!("  (no path params)");
        return;
    }

    for line in format_path_params(paths, marker) {
        println!("{line}");
    }
}
