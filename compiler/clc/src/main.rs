//! CustomLang CLI
//!
//! Validates and runs programs delivered as JSON by the parser front end.

use clc::commands::{check_file, parse_run_options, run_file};

fn main() {
    clc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let code = match args[1].as_str() {
        "run" => {
            let options = match parse_run_options(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: clc run <program.json> [--no-prompt] [--quiet-warnings]");
                    std::process::exit(1);
                }
            };
            let Some(path) = options.path.as_deref() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: clc run <program.json> [--no-prompt] [--quiet-warnings]");
                std::process::exit(1);
            };
            run_file(path, options.config())
        }
        "check" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: clc check <program.json>");
                std::process::exit(1);
            };
            check_file(path)
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("clc {}", env!("CARGO_PKG_VERSION"));
            0
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            1
        }
    };

    std::process::exit(code);
}

fn print_usage() {
    eprintln!("CustomLang driver");
    eprintln!();
    eprintln!("Usage: clc <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  run <program.json>     Validate, then execute");
    eprintln!("      --no-prompt        Read input without writing prompts");
    eprintln!("      --quiet-warnings   Drop input coercion warnings");
    eprintln!("  check <program.json>   Validate only");
    eprintln!("  help                   Show this message");
    eprintln!("  version                Show the version");
    eprintln!();
    eprintln!("Set RUST_LOG (e.g. RUST_LOG=cl_eval=debug) for tracing output.");
}
