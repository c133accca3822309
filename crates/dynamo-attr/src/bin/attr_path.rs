use clap::{Parser, Subcommand};
use dynamo_attr::cli::{self, Result};
use dynamo_attr::{build_path_index, AttributeMap, AttributeNode, PathResolver};
use serde_json::json;

/// Build path indexes and resolve paths over JSON records or encoded items.
#[derive(Parser, Debug)]
#[command(name = "attr-path", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Token delimiter for joined paths
    #[arg(short, long, global = true, default_value = ".")]
    delimiter: String,

    /// JSON input; read from stdin when omitted
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Pretty-print the output
    #[arg(short, long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the path index of a plain record
    Index,
    /// Resolve a path against a plain record
    Get { path: String },
    /// Resolve a path against an encoded item in wire form
    Attr { path: String },
}

fn main() {
    cli::init_tracing();
    cli::exit_on_error(run);
}

fn run() -> Result<()> {
    let args = Cli::parse();
    let resolver = PathResolver::with_delimiter(args.delimiter.as_str())?;
    let input = cli::read_json(args.input.as_deref())?;

    match args.command {
        Command::Index => cli::print_json(&build_path_index(&input), args.pretty),
        Command::Get { path } => {
            let index = build_path_index(&input);
            let out = json!({
                "path": resolver.to_array_path(&index, path.as_str()),
                "value": resolver.value_at_path(&input, path.as_str()),
            });
            cli::print_json(&out, args.pretty)
        }
        Command::Attr { path } => {
            let item: AttributeMap = serde_json::from_value(input)?;
            let lookup = resolver.resolve_against_attribute_tree(&item, path.as_str());
            let node = lookup.node();
            let out = json!({
                "tag": node.map(AttributeNode::tag),
                "found": node,
            });
            cli::print_json(&out, args.pretty)
        }
    }
}
