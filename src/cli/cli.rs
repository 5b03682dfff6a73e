use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "specdock")]
#[command(about = "specdock CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OrderPaths {
    Route,
    Method,
    #[default]
    Tag,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a spec document and print the regrouped paths
    Check {
        /// File path or http(s) URL of the OpenAPI/Swagger document
        spec: String,

        /// Grouping applied to the paths map
        #[arg(long, value_enum, default_value = "tag")]
        order_paths: OrderPaths,

        /// Validate against the published JSON Schema instead of the ruleset
        #[arg(long, default_value_t = false)]
        schema: bool,

        /// Print the full result set as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}
