use clap::Parser;
use dynamo_attr::cli::{self, CliError, Result};
use dynamo_attr::size::{field_sizes, item_size_count};
use dynamo_attr::classify;
use serde_json::json;

/// Report the raw byte size of each field and the billed kilobytes of a record.
#[derive(Parser, Debug)]
#[command(name = "attr-size", version, about, long_about = None)]
struct Cli {
    /// JSON record; read from stdin when omitted
    input: Option<String>,

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
    let record = classify(&cli::read_json(args.input.as_deref())?);
    let billed = item_size_count(&record)
        .ok_or_else(|| CliError::Usage("record must be an object with at least one field".into()))?;
    let fields = field_sizes(&record).unwrap_or_default();
    let bytes: usize = fields.values().sum();
    cli::print_json(
        &json!({"fields": fields, "bytes": bytes, "billedKb": billed}),
        args.pretty,
    )
}
