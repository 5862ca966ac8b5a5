use super::utils::{parse_param_arg, print_query_params};
use param_edit::{enabled_query_params, parse_query_params, stringify_query_params, QueryParam};

/// Handle `query parse`
pub fn handle_parse_command(query: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_query_params(query.strip_prefix('?').unwrap_or(query));

    if json {
        println!("{}", serde_json::to_string_pretty(&params)?);
    } else {
        println!("🔎 {} query params", params.len());
        print_query_params(&params);
    }

    Ok(())
}

/// Handle `query stringify`
pub fn handle_stringify_command(
    args: &[String],
    include_disabled: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let params: Vec<QueryParam> = args.iter().map(|arg| parse_param_arg(arg)).collect();

    // The serializer is not enabled-aware; filtering happens here.
    let params = if include_disabled {
        params
    } else {
        enabled_query_params(&params)
    };

    println!("{}", stringify_query_params(&params[..]));
    Ok(())
}
