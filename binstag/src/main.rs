//! Command-line tool for parsing and checking struct-field tag strings.
//!
//! Usage: stag [OPTIONS] [TAG ...]
//!
//! Each TAG operand is parsed as one tag string; with no operands, tag
//! strings are read from stdin, one per line. Valid tags print their
//! canonical rendering; the first invalid tag reports its error to stderr
//! and exits 1.
//!
//! Options:
//!   -c, --check            Validate only; print nothing for valid tags
//!   -s, --source <LABEL>   Source label embedded in error messages
//!   -h, --help             Print help
//!   -V, --version          Print version

use libstag::{encode_definitions, parse_tag};
use std::io::{self, BufRead};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut check_only = false;
    let mut source: Option<String> = None;
    let mut tags: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("stag {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-c" | "--check" => {
                check_only = true;
            }
            "-s" | "--source" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --source requires an argument");
                    process::exit(1);
                }
                source = Some(args[i].clone());
            }
            arg => {
                tags.push(arg.to_string());
            }
        }
        i += 1;
    }

    if tags.is_empty() {
        for (n, line) in io::stdin().lock().lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let label = match &source {
                Some(label) => label.clone(),
                None => format!("stdin:{}", n + 1),
            };
            run_one(&line, &label, check_only);
        }
    } else {
        for (n, tag) in tags.iter().enumerate() {
            let label = match &source {
                Some(label) => label.clone(),
                None => format!("arg:{}", n + 1),
            };
            run_one(tag, &label, check_only);
        }
    }
}

/// Parse one tag string, printing its canonical rendering unless checking.
/// The first failure terminates the process.
fn run_one(tag: &str, label: &str, check_only: bool) {
    match parse_tag(tag, label) {
        Ok(defs) => {
            if !check_only {
                println!("{}", encode_definitions(&defs));
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn print_help() {
    println!("stag - parse and check struct-field tag strings");
    println!();
    println!("Usage: stag [OPTIONS] [TAG ...]");
    println!();
    println!("Each TAG operand is parsed as one tag string; with no operands, tag");
    println!("strings are read from stdin, one per line. Valid tags print their");
    println!("canonical rendering; the first invalid tag exits with status 1.");
    println!();
    println!("Options:");
    println!("  -c, --check            Validate only; print nothing for valid tags");
    println!("  -s, --source <LABEL>   Source label embedded in error messages");
    println!("  -h, --help             Print help");
    println!("  -V, --version          Print version");
}
