use std::{
    fs,
    process::{self, ExitCode},
};

use clap::Parser;
use fortall::{
    error::Error,
    interpreter::{
        analyzer::{CheckedProgram, analyze},
        evaluator::{ExecutionPolicy, Interpreter, Interrupt, StdConsole},
        lexer::tokenize,
        parser::parse,
    },
    printer::render,
};
use tracing::{Level, info, warn};

/// fortall compiles and runs programs written in Fortall, a small Pascal-like
/// teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The Fortall source file to compile.
    file: String,

    /// Runs the program after it compiled successfully.
    #[arg(short, long)]
    execute: bool,

    /// Logs every compilation stage to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Prints the syntax tree, annotated with inferred types.
    #[arg(long)]
    ast: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_target(false)
                             .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .init();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", args.file);
            return ExitCode::FAILURE;
        },
    };

    match compile_and_run(&source, &args) {
        Ok(()) => {
            info!(file = %args.file, "done");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the stages one by one so the tree can be shown before checking.
fn compile_and_run(source: &str, args: &Args) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    info!(tokens = tokens.len().saturating_sub(1), "lexical analysis");

    let program = parse(&tokens)?;
    info!(program = %program.name.name,
          declarations = program.declarations.len(),
          statements = program.statements.len(),
          "syntax analysis");

    let analysis = analyze(&program);
    if args.ast {
        print!("{}", render(&program, Some(&analysis.types)));
    }
    let checked = CheckedProgram::from_analysis(program, analysis)?;
    info!("semantic analysis found no errors");

    if args.execute {
        let policy = ExecutionPolicy::default();
        install_interrupt_handler(policy.interrupt.clone());
        Interpreter::new(&mut StdConsole, policy).execute(&checked)?;
        info!("program executed");
    }

    Ok(())
}

/// Routes Ctrl-C to the interpreter, which stops before its next statement
/// or after the pending line of input. A second Ctrl-C exits at once.
fn install_interrupt_handler(interrupt: Interrupt) {
    let installed = ctrlc::set_handler(move || {
        if interrupt.raise() {
            eprintln!("\nExecution interrupted by user");
            process::exit(1);
        }
    });

    if let Err(e) = installed {
        warn!("Ctrl-C handler not installed: {e}");
    }
}
