//! Command-line interface for sqltext
//! This binary applies the text utilities to files: extracting
//! delimiter-bounded fragments, replacing substrings, and normalizing
//! whitespace, quotes, and case.
//!
//! Usage:
//!   sqltext extract `<path>` --prefix `<pre>` --suffix `<post>` [--format `<format>`]
//!   sqltext replace `<path>` --search `<search>` --replacement `<replacement>`
//!   sqltext normalize `<path>` [--trim] [--unquote] [--lower]

use clap::{Arg, ArgAction, Command};
use serde::Serialize;
use sqltext::text;

/// JSON report for the extract subcommand
#[derive(Serialize)]
struct Extraction {
    fragments: Vec<String>,
}

fn main() {
    let matches = Command::new("sqltext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Text utilities for parameterized SQL template rendering")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Extract every fragment found between a prefix and a suffix marker")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("prefix")
                        .long("prefix")
                        .short('p')
                        .help("Prefix marker bounding each fragment")
                        .required(true),
                )
                .arg(
                    Arg::new("suffix")
                        .long("suffix")
                        .short('s')
                        .help("Suffix marker bounding each fragment")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: 'lines' or 'json'")
                        .default_value("lines"),
                ),
        )
        .subcommand(
            Command::new("replace")
                .about("Replace every occurrence of a substring")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Substring to search for")
                        .required(true),
                )
                .arg(
                    Arg::new("replacement")
                        .long("replacement")
                        .help("Text inserted for each occurrence")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("normalize")
                .about("Trim, unquote, and lowercase file contents")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("trim")
                        .long("trim")
                        .help("Trim ASCII whitespace from both ends")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("unquote")
                        .long("unquote")
                        .help("Strip one layer of matching quotes")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("lower")
                        .long("lower")
                        .help("Lowercase ASCII letters")
                        .action(ArgAction::SetTrue),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let prefix = sub.get_one::<String>("prefix").unwrap();
            let suffix = sub.get_one::<String>("suffix").unwrap();
            let format = sub.get_one::<String>("format").unwrap();
            handle_extract_command(path, prefix, suffix, format);
        }
        Some(("replace", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let search = sub.get_one::<String>("search").unwrap();
            let replacement = sub.get_one::<String>("replacement").unwrap();
            handle_replace_command(path, search, replacement);
        }
        Some(("normalize", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let trim = sub.get_flag("trim");
            let unquote = sub.get_flag("unquote");
            let lower = sub.get_flag("lower");
            handle_normalize_command(path, trim, unquote, lower);
        }
        _ => unreachable!(),
    }
}

/// Read the input file, exiting with a diagnostic on failure
fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the extract command
fn handle_extract_command(path: &str, prefix: &str, suffix: &str, format: &str) {
    let source = read_source(path);
    let fragments = text::multi_find_between(&source, prefix, suffix);

    match format {
        "lines" => {
            for fragment in &fragments {
                println!("{}", fragment);
            }
        }
        "json" => {
            let report = Extraction { fragments };
            let output = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
                eprintln!("Error formatting report: {}", e);
                std::process::exit(1);
            });
            println!("{}", output);
        }
        other => {
            eprintln!("Format '{}' not supported", other);
            eprintln!("Available formats: lines, json");
            std::process::exit(1);
        }
    }
}

/// Handle the replace command
fn handle_replace_command(path: &str, search: &str, replacement: &str) {
    let source = read_source(path);
    print!("{}", text::replace_all(&source, search, replacement));
}

/// Handle the normalize command
///
/// Transforms apply in a fixed order: trim, then unquote, then lower.
/// Trimming first lets a quoted value surrounded by whitespace reach the
/// quote stripper with its quotes at the ends.
fn handle_normalize_command(path: &str, trim: bool, unquote: bool, lower: bool) {
    let source = read_source(path);
    let mut result = source;
    if trim {
        result = text::trim(&result);
    }
    if unquote {
        result = text::remove_parentheses(&result);
    }
    if lower {
        result = text::to_lower_case(&result);
    }
    print!("{}", result);
}
