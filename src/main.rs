use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process,
};

use alg::{
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::Interpreter,
        options::{Associativity, Options},
        parser::statement::parse_statement,
    },
    run_script_with,
    util::binding::parse_binding,
};
use clap::Parser;
use log::info;

/// alg evaluates arithmetic assignments line by line, keeping every variable
/// for the lines that follow.
///
/// Without a file it starts an interactive session.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run, one statement per line.
    file: Option<PathBuf>,

    /// Initial variables for the script, as name=value.
    #[arg(value_parser = parse_binding, requires = "file")]
    bindings: Vec<(String, f64)>,

    /// Group chained `^` from the right, so `2 ^ 3 ^ 2` is `2 ^ 9`.
    #[arg(long)]
    right_assoc_pow: bool,

    /// Use the library results for sin, cos and tan at ±π/2 instead of the
    /// exact values.
    #[arg(long)]
    no_trig_snap: bool,
}

const HELP: &str = "commands:
\tenv - print all existing variables and their values
\thelp - print this message
\texit - exit the interactive repl";

fn main() {
    env_logger::init();
    let args = Args::parse();

    let power = if args.right_assoc_pow {
        Associativity::Right
    } else {
        Associativity::Left
    };
    let options = Options::default().with_power(power)
                                    .with_snap_trig(!args.no_trig_snap);

    let result = match args.file {
        Some(path) => run_file(&path, args.bindings, options),
        None => repl(options).map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run_file(path: &Path,
            bindings: Vec<(String, f64)>,
            options: Options)
            -> Result<(), Box<dyn std::error::Error>> {
    let source = fs::read_to_string(path).map_err(|e| {
                                              format!("failed to read the input file '{}': {e}",
                                                      path.display())
                                          })?;
    info!("running {}", path.display());

    let mut interpreter = Interpreter::with_environment(Environment::with_bindings(bindings),
                                                        options);
    run_script_with(&source, &mut interpreter, print_variable)?;
    Ok(())
}

/// Reads statements from stdin until `exit` or end of input.
fn repl(options: Options) -> io::Result<()> {
    let mut interpreter = Interpreter::with_environment(Environment::new(), options);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        match line.trim() {
            "exit" => return Ok(()),
            "env" => {
                let mut variables: Vec<_> = interpreter.iter().collect();
                variables.sort_by(|(a, _), (b, _)| a.cmp(b));
                for (name, value) in variables {
                    print_variable(name, value);
                }
            },
            "help" => println!("{HELP}"),
            "" => {},
            line => match run_line(&mut interpreter, line) {
                Ok((name, value)) => print_variable(&name, value),
                Err(e) => println!("{e}"),
            },
        }
    }
}

/// Parses and runs one REPL line. Errors are reported, never fatal.
fn run_line(interpreter: &mut Interpreter, line: &str) -> Result<(String, f64), Error> {
    let statement = parse_statement(line, interpreter.options())?;
    let value = interpreter.run(&statement)?;
    Ok((statement.target, value))
}

fn print_variable(name: &str, value: f64) {
    println!("{name} = {value:.6}");
}
