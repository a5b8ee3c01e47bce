use std::fs;

use clap::Parser;
use shiftexpr::interpreter::{
    evaluator::core::eval,
    grammar::core::parse,
    lexer::tokenize,
};

/// shiftexpr evaluates arithmetic expressions with `+ - * /`, parentheses and
/// integer literals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells shiftexpr to read the expression from a file.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed tree, fully parenthesised, before the value.
    #[arg(short, long)]
    ast: bool,

    contents: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    if let Err(e) = run(&source, args.ast) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(source: &str, show_ast: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    if show_ast {
        println!("{expr}");
    }
    println!("{}", eval(&expr)?);
    Ok(())
}
