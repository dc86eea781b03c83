use std::{
    fs,
    io::{self, BufRead, Write},
    rc::Rc,
};

use clap::Parser;
use quill::{
    interpreter::{
        evaluator::core::eval_program,
        value::environment::Environment,
    },
    parse,
};

/// quill is an easy to use, expression-oriented scripting language with
/// first-class functions and closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quill to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode is a feature that automatically prints out the final value
    /// of a quill script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Script text, or a path to a script with --file. Omit to start the
    /// REPL.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let env = Environment::new();

    let Some(contents) = args.contents else {
        repl(&env);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    run_script(&script, args.pipe_mode, &env);
}

/// Runs a whole script, reporting every parse error up front and the first
/// runtime error with its line.
fn run_script(script: &str, pipe_mode: bool, env: &Rc<Environment>) {
    let program = match parse(script) {
        Ok(program) => program,
        Err(errors) => {
            for error in &errors {
                eprintln!("line {}: {error}", error.line());
            }
            std::process::exit(1);
        },
    };

    match eval_program(&program, env) {
        Ok(value) => {
            if pipe_mode {
                println!("{value}");
            }
        },
        Err(error) => {
            eprintln!("line {}: ERROR: {error}", error.line());
            std::process::exit(1);
        },
    }
}

/// A line-oriented read-eval-print loop. Bindings persist across lines
/// because every line evaluates in the same root environment.
fn repl(env: &Rc<Environment>) {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!(">> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let program = match parse(&line) {
            Ok(program) => program,
            Err(errors) => {
                for error in &errors {
                    println!("\t{error}");
                }
                continue;
            },
        };

        match eval_program(&program, env) {
            Ok(value) => println!("{value}"),
            Err(error) => println!("ERROR: {error}"),
        }
    }
}
