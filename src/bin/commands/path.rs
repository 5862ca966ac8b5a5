use super::utils::print_path_params;
use param_edit::{is_valid_url, parse_path_params_with, ParamEditConfig};

/// Handle `path`
pub fn handle_path_command(
    url: &str,
    config: &ParamEditConfig,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let paths = parse_path_params_with(url, &config.path_options())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        println!("🧩 {} path params", paths.len());
        print_path_params(&paths, config.placeholder_marker);
    }

    Ok(())
}

/// Handle `validate`
pub fn handle_validate_command(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if is_valid_url(url) {
        println!("✅ {url} is a valid URL");
        Ok(())
    } else {
        Err(format!("{url} is not a valid URL").into())
    }
}
