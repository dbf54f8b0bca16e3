use std::{
    io::{self, Read},
    process::ExitCode,
};

use clap::{CommandFactory, Parser, error::ErrorKind};
use msdscript::{Mode, logging, run, suite};

/// msdscript reads an MSDScript expression from standard input and
/// evaluates or prints it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[group(multiple = false)]
struct Args {
    /// Evaluates the expression and prints its value.
    #[arg(long)]
    interp: bool,

    /// Prints the expression fully parenthesized.
    #[arg(long)]
    print: bool,

    /// Pretty prints the expression with minimal parentheses.
    #[arg(long)]
    prettyprint: bool,

    /// Runs the built-in test cases.
    #[arg(long)]
    test: bool,
}

impl Args {
    const fn mode(&self) -> Option<Mode> {
        if self.interp {
            Some(Mode::Interp)
        } else if self.print {
            Some(Mode::Print)
        } else if self.prettyprint {
            Some(Mode::PrettyPrint)
        } else {
            None
        }
    }
}

fn main() -> ExitCode {
    logging::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        },
        Err(e) => {
            tracing::debug!(kind = ?e.kind(), "rejected arguments");
            println!("Unknown argument!");
            return ExitCode::FAILURE;
        },
    };

    if args.test {
        let report = suite::run();
        println!("{report}");
        return if report.all_passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let Some(mode) = args.mode() else {
        // Nothing to do; show what is available.
        if let Err(e) = Args::command().print_help() {
            eprintln!("Failed to print usage: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("Failed to read standard input: {e}");
        return ExitCode::FAILURE;
    }

    match run(mode, &source) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
