//! Doclet layout inspection CLI
//!
//! Loads a builder layout (the bundled one, or a user file) and prints the
//! subtree for a root element.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use doclet_layout::{
    walk, DocletConfiguration, LayoutParser, NodeRef, Resources, XmlNode, DOCLET_ROOT,
};
use tracing_subscriber::EnvFilter;

/// Doclet builder layout inspector
#[derive(Parser)]
#[command(name = "doclet-layout")]
#[command(version)]
#[command(about = "Inspect documentation builder layouts", long_about = None)]
struct Cli {
    /// Layout file to read instead of the bundled layout
    #[arg(short, long, global = true)]
    layout: Option<PathBuf>,

    /// Message overrides in .properties format
    #[arg(short, long, global = true)]
    messages: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the subtree for each root as a single line of markup
    #[command(visible_alias = "s")]
    Show {
        /// Root element names
        #[arg(default_value = DOCLET_ROOT)]
        roots: Vec<String>,
    },

    /// Print the subtree for a root as an indented outline of build steps
    #[command(visible_alias = "o")]
    Outline {
        /// Root element name
        #[arg(default_value = DOCLET_ROOT)]
        root: String,

        /// Show attributes next to each step
        #[arg(short, long)]
        attributes: bool,
    },
}

fn main() -> std::process::ExitCode {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = build_parser(cli.layout, cli.messages).and_then(|mut parser| match cli.command {
        Commands::Show { roots } => run_show(&mut parser, &roots),
        Commands::Outline { root, attributes } => run_outline(&mut parser, &root, attributes),
    });

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

/// Builds a parser from the command line options.
fn build_parser(
    layout: Option<PathBuf>,
    messages: Option<PathBuf>,
) -> Result<LayoutParser<DocletConfiguration>, Box<dyn std::error::Error>> {
    let mut config = DocletConfiguration::new();
    if let Some(path) = messages {
        tracing::debug!(path = %path.display(), "loading messages");
        config = config.with_resources(Resources::load(&path)?);
    }
    if let Some(path) = layout {
        config = config.with_builder_xml(path);
    }
    Ok(LayoutParser::new(config))
}

/// Fetches `root`, turning an absent element into an error.
fn fetch_root(
    parser: &mut LayoutParser<DocletConfiguration>,
    root: &str,
) -> Result<NodeRef, Box<dyn std::error::Error>> {
    parser
        .fetch(root)?
        .ok_or_else(|| format!("No element <{}> in layout", root).into())
}

/// Prints each requested root on its own line.
fn run_show(
    parser: &mut LayoutParser<DocletConfiguration>,
    roots: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    for root in roots {
        let node = fetch_root(parser, root)?;
        println!("{}", node.borrow());
    }
    Ok(())
}

/// Prints the build steps under `root` in the order they run.
fn run_outline(
    parser: &mut LayoutParser<DocletConfiguration>,
    root: &str,
    attributes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let node = fetch_root(parser, root)?;
    walk(&node, &mut |step: &XmlNode, depth: usize| {
        println!("{}", outline_line(step, depth, attributes));
    });
    Ok(())
}

fn outline_line(step: &XmlNode, depth: usize, attributes: bool) -> String {
    let mut line = format!("{}{}", "  ".repeat(depth), step.tag());
    if attributes && !step.attributes().is_empty() {
        let mut pairs: Vec<_> = step
            .attributes()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        pairs.sort();
        line.push_str(&format!(" [{}]", pairs.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_outline_line() {
        let mut attrs = HashMap::new();
        attrs.insert("b".to_string(), "2".to_string());
        attrs.insert("a".to_string(), "1".to_string());
        let node = XmlNode::new_child(None, "Summary", attrs);

        assert_eq!(outline_line(&node.borrow(), 2, false), "    Summary");
        assert_eq!(outline_line(&node.borrow(), 0, true), "Summary [a=1, b=2]");
    }

    #[test]
    fn test_fetch_root_missing_is_error() {
        let mut parser = build_parser(None, None).unwrap();
        let err = fetch_root(&mut parser, "NoSuchBuilder").unwrap_err();
        assert!(err.to_string().contains("<NoSuchBuilder>"));
    }

    #[test]
    fn test_show_bundled_defaults() {
        let cli = Cli::parse_from(["doclet-layout", "show"]);
        match cli.command {
            Commands::Show { roots } => assert_eq!(roots, vec![DOCLET_ROOT.to_string()]),
            Commands::Outline { .. } => panic!("Expected show"),
        }
    }
}
