//! Command-line interface for textree
//! Parses a text file into a document tree, prints it in the chosen format and runs
//! analytic operations over it.
//!
//! Usage:
//!   textree `<path>` [--format `<format>`] [--operation `<op>`]... [--config `<file>`] [--min-words `<n>`]
//!   textree --list-formats                  - List output formats
//!   textree --list-operations               - List analytic operations

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use textree::textree::config::{Loader, TextreeConfig};
use textree::textree::formats::FormatRegistry;
use textree::textree::operations::OperationRegistry;
use textree::textree::{logging, ParserChain, TextreeError};
use tracing::info;

fn main() {
    let matches = Command::new("textree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse text into paragraphs, sentences, lexemes and words")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the text file")
                .required_unless_present_any(["list-formats", "list-operations"])
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: text)"),
        )
        .arg(
            Arg::new("operation")
                .long("operation")
                .short('o')
                .help("Operation to run, by number (1-5) or name; may be repeated")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("min-words")
                .long("min-words")
                .help("Minimum words per sentence for remove-short-sentences")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-operations")
                .long("list-operations")
                .help("List available operations")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), TextreeError> {
    let config = load_config(matches)?;
    // A subscriber may already be installed when embedded; keep going without ours
    let _ = logging::init(&config.logging.filter);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return Ok(());
    }
    if matches.get_flag("list-operations") {
        handle_list_operations_command(&config);
        return Ok(());
    }

    let Some(path) = matches.get_one::<String>("path") else {
        return Ok(());
    };
    let operations: Vec<&String> = matches
        .get_many::<String>("operation")
        .map(|values| values.collect())
        .unwrap_or_default();
    handle_execute_command(&config, path, &operations)
}

fn load_config(matches: &ArgMatches) -> Result<TextreeConfig, TextreeError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(min_words) = matches.get_one::<i64>("min-words") {
        loader = loader.set_override("operations.min_word_count", *min_words)?;
    }
    Ok(loader.build()?)
}

/// Parse the file, print it in the configured format, then run each operation
fn handle_execute_command(
    config: &TextreeConfig,
    path: &str,
    operations: &[&String],
) -> Result<(), TextreeError> {
    let text = std::fs::read_to_string(path).map_err(|e| TextreeError::read(path, e))?;
    info!(path, bytes = text.len(), "read input");

    let formats = FormatRegistry::from_config(&config.output);
    let registry = OperationRegistry::from_config(&config.operations);
    // Resolve every selector before doing any work
    for selector in operations {
        registry.get(selector)?;
    }

    let doc = ParserChain::from_config(&config.parsing).parse(&text);
    let formatted = formats.serialize(&doc, &config.output.format)?;
    print!("{}", formatted);
    if !formatted.ends_with('\n') {
        println!();
    }

    for selector in operations {
        let report = registry.execute(selector, &doc)?;
        println!();
        print!("{}", report);
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &TextreeConfig) {
    println!("Available output formats:\n");
    let registry = FormatRegistry::from_config(&config.output);
    for (name, description) in registry.describe_formats() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}

/// Handle the list-operations command
fn handle_list_operations_command(config: &TextreeConfig) {
    println!("Available operations:\n");
    for (number, name, description) in OperationRegistry::from_config(&config.operations).list() {
        println!("  {}. {}", number, name);
        println!("     {}", description);
        println!();
    }
}
