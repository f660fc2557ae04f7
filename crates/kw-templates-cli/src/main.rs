//! kw-templates CLI — render placeholder templates from the command line.
//!
//! Two commands:
//! - `render` fills a template from a file, a template directory, or the built-in
//!   set with `NAME=VALUE` items
//! - `list` shows the keys available in a template directory or the built-in set
//!
//! Both delegate to [`kw_templates_core::template::Template`] and its sources.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kw-templates",
    about = "Render {placeholder} templates from files, directories, or the built-in set",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one template to stdout or a file
    Render {
        #[command(flatten)]
        source: RenderSource,

        /// Template key to select (with --dir or --builtin)
        #[arg(long, short)]
        key: Option<String>,

        /// Item assignment, repeatable
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = commands::render::parse_assignment)]
        set: Vec<(String, String)>,

        /// JSON file with a flat object of string items
        #[arg(long)]
        items: Option<PathBuf>,

        /// Opening placeholder delimiter
        #[arg(long, env = "KW_TEMPLATES_OPEN", default_value = "{")]
        open: String,

        /// Closing placeholder delimiter
        #[arg(long, env = "KW_TEMPLATES_CLOSE", default_value = "}")]
        close: String,

        /// Write the result here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List the templates of a group
    List {
        #[command(flatten)]
        source: GroupSource,
    },
}

/// Where `render` takes its template from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct RenderSource {
    /// Template file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Directory of templates, selected with --key
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Built-in templates, selected with --key
    #[arg(long)]
    pub builtin: bool,
}

/// Which group `list` reads.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct GroupSource {
    /// Directory of templates
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Built-in templates
    #[arg(long)]
    pub builtin: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render {
            source,
            key,
            set,
            items,
            open,
            close,
            output,
        } => {
            commands::render::run(
                &source,
                key.as_deref(),
                &set,
                items.as_deref(),
                &open,
                &close,
                output.as_deref(),
            )?;
        }
        Commands::List { source } => {
            commands::list::run(&source)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_requires_one_source() {
        assert!(Cli::try_parse_from(["kw-templates", "render"]).is_err());
        assert!(Cli::try_parse_from([
            "kw-templates", "render", "--file", "a.tmpl", "--builtin"
        ])
        .is_err());
    }

    #[test]
    fn test_render_parses_assignments() {
        let cli = Cli::try_parse_from([
            "kw-templates", "render", "--builtin", "-k", "greeting", "--set", "name=World",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { source, key, set, open, close, .. } => {
                assert!(source.builtin);
                assert_eq!(key.as_deref(), Some("greeting"));
                assert_eq!(set, vec![("name".to_string(), "World".to_string())]);
                assert_eq!((open.as_str(), close.as_str()), ("{", "}"));
            }
            Commands::List { .. } => panic!("expected render"),
        }
    }
}
