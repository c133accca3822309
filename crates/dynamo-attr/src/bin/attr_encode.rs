use clap::Parser;
use dynamo_attr::cli::{self, CliError, Result};
use dynamo_attr::{decode, encode_json, encode_record_json, AttributeNode};

/// Encode a JSON value into tagged attributes, or decode attributes back.
#[derive(Parser, Debug)]
#[command(name = "attr-encode", version, about, long_about = None)]
struct Cli {
    /// JSON input; read from stdin when omitted
    input: Option<String>,

    /// Encode a whole record into a top-level item
    #[arg(short, long, conflicts_with = "decode")]
    record: bool,

    /// Decode a wire-form attribute back into plain JSON
    #[arg(short, long)]
    decode: bool,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    cli::init_tracing();
    cli::exit_on_error(run);
}

fn run() -> Result<()> {
    let args = Cli::parse();
    let input = cli::read_json(args.input.as_deref())?;

    if args.decode {
        let node: AttributeNode = serde_json::from_value(input)?;
        return cli::print_json(&decode(&node), args.pretty);
    }
    if args.record {
        let item = encode_record_json(&input)
            .ok_or_else(|| CliError::Usage("record must be an object with at least one field".into()))?;
        return cli::print_json(&item, args.pretty);
    }
    cli::print_json(&encode_json(&input), args.pretty)
}
