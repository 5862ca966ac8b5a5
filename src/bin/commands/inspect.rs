use super::utils::{parse_assignment, print_path_params, print_query_params};
use param_edit::{ParamEditConfig, RequestParams};

/// Handle `inspect`: show both parameter lists and the resulting request URL.
pub fn handle_inspect_command(
    url: &str,
    values: &[String],
    config: &ParamEditConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut request = RequestParams::from_url_with(url, config.path_options());

    for assignment in values {
        let (name, value) = parse_assignment(assignment)?;
        let path = request
            .paths
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| format!("URL has no path param named '{name}'"))?;
        request.update_path_param(path.with_value(value))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    println!("🌐 {}", request.base_url());
    println!("\nQuery params:");
    print_query_params(&request.params);
    println!("\nPath params:");
    print_path_params(&request.paths, config.placeholder_marker);
    println!("\n➡️  {}", request.interpolated_url());

    Ok(())
}
