// Command-line interface for md2html
//
// The main role of the md2html program is to turn a restricted Markdown document into HTML.
// The conversion itself lives in md2html-babel; this binary only deals with arguments,
// configuration, files and exit codes.
//
// Usage:
//  md2html <input> <output>                      - Convert input to HTML (default)
//  md2html convert <input> <output>              - Same as above (explicit)
//  md2html inspect <input> [<view>]              - Show how the document is classified
//  md2html --list-views                          - List available inspect views
//
// Any failure (missing arguments, missing input file, unreadable config, I/O) prints one
// line on stderr and exits with status 1.

use md2html_cli::error::USAGE;
use md2html_cli::inspect::{self, AVAILABLE_VIEWS, DEFAULT_VIEW};
use md2html_cli::{logging, CliError};

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use md2html_babel::{ConvertOptions, HashEncoding};
use md2html_config::{Loader, Md2HtmlConfig, LOCAL_CONFIG_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("md2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a restricted Markdown dialect to HTML")
        .long_about(
            "md2html converts a line-oriented Markdown dialect to HTML fragments.\n\n\
            Supported syntax:\n  \
            - '#' headings, '* ' unordered items, '1. ' ordered items, paragraphs\n  \
            - **bold**, __emphasis__, [[md5 hash]], ((strip c and C))\n\n\
            Examples:\n  \
            md2html README.md README.html           # Convert to a file\n  \
            md2html inspect README.md fragments     # Show the generated fragments\n\n\
            An input file named like a subcommand (convert, inspect, help) needs the\n\
            explicit form: md2html convert inspect out.html",
        )
        .subcommand_required(false)
        .arg(
            Arg::new("list-views")
                .long("list-views")
                .help("List available inspect views")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2html.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("hash-encoding")
                .long("hash-encoding")
                .value_name("ENCODING")
                .help("Byte encoding used when hashing [[...]] contents")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    HashEncoding::NAMES,
                ))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document to HTML (default command)")
                .arg(
                    Arg::new("input")
                        .help("Markdown file to read")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .help("HTML file to write")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rest")
                        .help("Ignored extra arguments")
                        .index(3)
                        .num_args(1..)
                        .hide(true),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show how a document is classified and transduced")
                .arg(
                    Arg::new("input")
                        .help("Markdown file to read")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to print. Defaults to 'lines'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

/// Parse arguments, injecting `convert` when the first positional is not a subcommand.
///
/// Positionals after `<input> <output>` are accepted and ignored. A first positional
/// spelled like a subcommand is always taken as one.
fn parse_args(args: &[String]) -> Result<ArgMatches, CliError> {
    let cli = build_cli();
    let first_error = match cli.clone().try_get_matches_from(args) {
        Ok(matches) => return Ok(matches),
        Err(e) => e,
    };
    exit_on_display(&first_error);

    let names_subcommand = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .is_some_and(|arg| SUBCOMMANDS.contains(&arg.as_str()));
    if args.len() < 2 || names_subcommand {
        return Err(classify_parse_error(first_error));
    }

    let mut injected = vec![args[0].clone(), "convert".to_string()];
    injected.extend_from_slice(&args[1..]);

    cli.try_get_matches_from(&injected).map_err(|e| {
        exit_on_display(&e);
        classify_parse_error(e)
    })
}

/// `--help` and `--version` come back from clap as errors; let clap print them.
fn exit_on_display(error: &clap::Error) {
    if matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        error.exit();
    }
}

fn classify_parse_error(error: clap::Error) -> CliError {
    match error.kind() {
        ErrorKind::MissingRequiredArgument | ErrorKind::MissingSubcommand => CliError::Usage,
        _ => CliError::Arguments(error),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let matches = parse_args(args)?;

    if matches.get_flag("list-views") {
        handle_list_views_command();
        return Ok(());
    }
    if matches.subcommand().is_none() {
        return Err(CliError::Usage);
    }

    let config = load_cli_config(
        matches.get_one::<String>("config").map(Path::new),
        matches.get_one::<String>("hash-encoding").map(String::as_str),
    )?;
    logging::init_logger(matches.get_flag("verbose"), &config.logging.filter);
    let options = ConvertOptions::from(&config.convert);
    debug!(?options, "loaded configuration");

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = required_path(sub_matches, "input")?;
            let output = required_path(sub_matches, "output")?;
            handle_convert_command(&input, &output, &options)
        }
        Some(("inspect", sub_matches)) => {
            let input = required_path(sub_matches, "input")?;
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_VIEW);
            handle_inspect_command(&input, view, &options)
        }
        _ => Err(CliError::Usage),
    }
}

fn required_path(matches: &ArgMatches, name: &str) -> Result<PathBuf, CliError> {
    matches
        .get_one::<String>(name)
        .map(PathBuf::from)
        .ok_or(CliError::Usage)
}

/// Handle the convert command
fn handle_convert_command(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<(), CliError> {
    let source = read_input(input)?;
    let html = md2html_babel::convert(&source, options);

    fs::write(output, &html).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(output = %output.display(), bytes = html.len(), "wrote html");
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(
    input: &Path,
    view: &str,
    options: &ConvertOptions,
) -> Result<(), CliError> {
    let source = read_input(input)?;
    let output = inspect::execute_view(&source, view, options)?;
    print!("{output}");
    Ok(())
}

/// Handle the list-views command
fn handle_list_views_command() {
    println!("Available views:\n");
    for view in AVAILABLE_VIEWS {
        let marker = if *view == DEFAULT_VIEW { " (default)" } else { "" };
        println!("  {view}{marker}");
    }
    println!("\n{USAGE}");
}

fn read_input(path: &Path) -> Result<String, CliError> {
    if !path.exists() {
        return Err(CliError::MissingInput(path.to_path_buf()));
    }
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!(input = %path.display(), bytes = source.len(), "read input");
    Ok(normalize_newlines(&source))
}

/// Text files are read with universal newlines: `\r\n` and lone `\r` become `\n`.
fn normalize_newlines(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

fn load_cli_config(
    explicit_path: Option<&Path>,
    hash_encoding: Option<&str>,
) -> Result<Md2HtmlConfig, CliError> {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };
    let loader = match hash_encoding {
        Some(encoding) => loader.set_override("convert.hash_encoding", encoding)?,
        None => loader,
    };

    Ok(loader.build()?)
}
