//! RPN calculator CLI

use std::io;

use rpn_cli::commands::{eval_tokens, list_operators, run_repl};
use rpn_cli::tracing_setup::init_tracing;
use rpn_cli::{CliError, DriverOptions};
use rpn_eval::Evaluator;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let outcome = match command.as_str() {
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: rpn eval <token>... [--stack] [--precision=<n>]");
                eprintln!("Example: rpn eval 10 4 -");
                std::process::exit(1);
            }
            DriverOptions::parse(&args[2..]).and_then(|(options, tokens)| {
                eval_tokens(&tokens, &options, &mut io::stdout().lock()).map(|_| ())
            })
        }
        "repl" => DriverOptions::parse(&args[2..]).and_then(|(options, rest)| {
            if let Some(extra) = rest.first() {
                return Err(CliError::UnexpectedArgument(extra.clone()));
            }
            run_repl(io::stdin().lock(), &options, &mut io::stdout().lock())
        }),
        "ops" => list_operators(&Evaluator::new(), &mut io::stdout().lock()),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-v" => {
            println!("rpn {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("RPN calculator");
    println!();
    println!("Usage: rpn <command> [options]");
    println!();
    println!("Commands:");
    println!("  eval <token>...      Push tokens in order and print the result");
    println!("  repl                 Read tokens from stdin, one line at a time");
    println!("  ops                  List known operators");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options (eval, repl):");
    println!("  --stack, -s          Print the stack before each result");
    println!("  --precision=<n>      Print results with n decimal places");
    println!();
    println!("Operators:");
    println!("  ×  ÷  +  −  √        ASCII spellings: *  /  +  -  sqrt");
    println!();
    println!("Repl words:");
    println!("  clear, c             Empty the stack");
    println!("  quit, exit           End the session");
    println!();
    println!("Examples:");
    println!("  rpn eval 10 4 -                  # 6");
    println!("  rpn eval 3 4 + 2 '*'             # 14");
    println!("  rpn eval 2 sqrt --precision=4    # 1.4142");
    println!("  echo '9 sqrt' | rpn repl         # 3");
    println!();
    println!("Set RUST_LOG=rpn_eval=trace to trace evaluation on stderr.");
}
