pub mod inspect;
pub mod path;
pub mod query;
pub mod utils;

use clap::Subcommand;
use param_edit::ParamEditConfig;

#[derive(Subcommand)]
pub enum QueryCommands {
    /// Parse a raw query string into parameters
    ///
    /// Usage examples:
    /// # Show the parsed pairs
    /// param-edit query parse "a=1&b=2&flag"
    ///
    /// # Print the parameters as JSON
    /// param-edit query parse "token=abc==" --json
    Parse {
        /// Raw query string, without the leading '?'
        query: String,

        /// Print the parameters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serialize parameters into a raw query string
    ///
    /// Each argument is NAME or NAME=VALUE. Prefix an argument with '!' to mark
    /// it disabled; disabled parameters are left out unless requested.
    ///
    /// Usage examples:
    /// param-edit query stringify a=1 b flag=
    /// param-edit query stringify a=1 '!debug=true' --include-disabled
    Stringify {
        /// Parameters as NAME[=VALUE], '!' prefix for disabled
        params: Vec<String>,

        /// Keep disabled parameters in the output
        #[arg(long)]
        include_disabled: bool,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query string operations
    #[command(subcommand)]
    Query(QueryCommands),

    /// Extract the placeholders of a URL path template
    ///
    /// Usage examples:
    /// param-edit path "https://api.example.com/users/:id/posts/:postId"
    /// param-edit path "localhost:3000/:tenant" --json
    Path {
        /// URL path template
        url: String,

        /// Print the parameters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a string is a valid absolute URL
    ///
    /// Exits with status 1 when the URL is invalid.
    Validate {
        /// Candidate URL
        url: String,
    },

    /// Show the query and path parameters of a URL
    ///
    /// Usage examples:
    /// param-edit inspect "https://api.example.com/users/:id?verbose" --set id=42
    Inspect {
        /// Request URL
        url: String,

        /// Path parameter values as NAME=VALUE
        #[arg(long = "set")]
        values: Vec<String>,

        /// Print the request parameters as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn execute_command(
    command: Commands,
    config: &ParamEditConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Query(QueryCommands::Parse { query, json }) => {
            query::handle_parse_command(&query, json)
        }

        Commands::Query(QueryCommands::Stringify {
            params,
            include_disabled,
        }) => query::handle_stringify_command(&params, include_disabled),

        Commands::Path { url, json } => path::handle_path_command(&url, config, json),

        Commands::Validate { url } => path::handle_validate_command(&url),

        Commands::Inspect { url, values, json } => {
            inspect::handle_inspect_command(&url, &values, config, json)
        }
    }
}
