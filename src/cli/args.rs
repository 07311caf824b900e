// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for letterpress

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "letterpress")]
#[command(about = "Renders cached, compiled templates against a data model")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a named template from the template directory
    Render {
        #[arg(help = "Template name, relative to the template directory")]
        template: String,

        #[arg(
            short = 'V',
            long = "var",
            help = "Model variables for rendering (key=value)"
        )]
        vars: Vec<String>,

        #[arg(short, long, help = "Write output to a file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, help = "Base directory containing the template directory")]
        base_dir: Option<PathBuf>,

        #[arg(long, help = "Compile templates ahead of execution")]
        static_compile: bool,
    },

    /// Render the built-in error page
    ErrorPage {
        #[arg(
            short = 'V',
            long = "var",
            help = "Model variables for rendering (key=value)"
        )]
        vars: Vec<String>,

        #[arg(short, long, help = "Write output to a file instead of stdout")]
        output: Option<PathBuf>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format into a render model
    pub fn parse_model(vars: &[String]) -> anyhow::Result<serde_json::Value> {
        let mut model = serde_json::Map::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                model.insert(
                    key.to_string(),
                    serde_json::Value::String(value.to_string()),
                );
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(serde_json::Value::Object(model))
    }
}
