use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use log::LevelFilter;
use recur::Interpreter;

/// recur runs programs written in a tiny integer language where recursion is
/// the only way to loop.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The source file to load.
    file: PathBuf,

    /// The function to run. When omitted the file is only loaded and checked.
    function: Option<String>,

    /// Integer arguments passed to the function.
    #[arg(allow_negative_numbers = true)]
    args: Vec<i64>,

    /// Prints the parsed program before running it.
    #[arg(long)]
    dump_ast: bool,

    /// Increases log output; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Dropping the guard flushes buffered log records, so it lives until
    // `main` returns.
    let _guard = match ftlog::Builder::new().max_log_level(level_filter(args.verbose))
                                            .try_init()
    {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        },
    };

    let Ok(source) = fs::read_to_string(&args.file) else {
        eprintln!("Could not open file: {}", args.file.display());
        return ExitCode::FAILURE;
    };

    let interpreter = match Interpreter::new(&source) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            eprintln!("{}: {e}", e.kind());
            return ExitCode::FAILURE;
        },
    };

    if args.dump_ast {
        print!("{}", interpreter.program());
    }

    let Some(function) = args.function else {
        println!("No function specified to run.");
        return ExitCode::SUCCESS;
    };

    match interpreter.run(&function, &args.args) {
        Ok(result) => {
            println!("Result: {result}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{}: {e}", e.kind());
            ExitCode::FAILURE
        },
    }
}
