//! Pretty print a markup tree given as JSON (in the format produced by the `serialization`
//! feature), either from a file or from stdin.
//!
//! Example: `cargo run --example xmlpp --features serialization -- --indent 4 --pre pre tree.json`

use clap::Parser;
use markup_pretty_printer::{DocType, Node, PrettyPrinter, Prolog};
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Pretty print a JSON-encoded markup tree")]
struct Args {
    /// Number of spaces per level of nesting.
    #[arg(short, long, default_value_t = 2)]
    indent: usize,

    /// Names of elements whose contents are printed verbatim. May be repeated.
    #[arg(short, long = "pre")]
    preformatted: Vec<String>,

    /// Start with an XML declaration.
    #[arg(long)]
    declaration: bool,

    /// Write a DOCTYPE declaration naming this root element.
    #[arg(long)]
    doctype: Option<String>,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file to read the tree from. Reads stdin if omitted.
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let json = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            json
        }
    };
    let doc: Node = serde_json::from_str(&json)?;

    let printer = PrettyPrinter::new(args.indent, args.preformatted)?;
    let mut prolog = Prolog::new();
    if args.declaration {
        prolog = prolog.with_xml_declaration();
    }
    if let Some(name) = args.doctype {
        prolog = prolog.with_doctype(DocType::new(name));
    }

    match &args.output {
        Some(path) => printer.write_to_path(&doc, path, &prolog)?,
        None => printer.write_to(&doc, io::stdout().lock(), &prolog)?,
    }
    Ok(())
}
