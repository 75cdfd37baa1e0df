use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/inspect.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &["lines", "lines-json", "fragments", "fragments-json"];

const HASH_ENCODINGS: &[&str] = &["latin1", "utf8"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let input = || {
        Arg::new("input")
            .help("Markdown file to read")
            .required(true)
            .index(1)
            .value_hint(ValueHint::FilePath)
    };

    let mut cmd = Command::new("md2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a restricted Markdown dialect to HTML")
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("hash-encoding")
                .long("hash-encoding")
                .value_parser(clap::builder::PossibleValuesParser::new(HASH_ENCODINGS))
                .global(true),
        )
        .arg(
            Arg::new("list-views")
                .long("list-views")
                .help("List available inspect views")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert").arg(input()).arg(
                Arg::new("output")
                    .required(true)
                    .index(2)
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(
            Command::new("inspect").arg(input()).arg(
                Arg::new("view")
                    .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                    .index(2)
                    .value_hint(ValueHint::Other),
            ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2html", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2html", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2html", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
