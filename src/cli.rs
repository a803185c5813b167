use clap::Parser;
use std::{process::exit, time::Instant};

use bfvm::vm::{Interpreter, Program, StandardDevice};

/// Run a brainfuck program on the virtual machine.
///
/// The program's output bytes go to stdout; everything human-readable
/// (the load diagnostic, the running banner, the completion time, and
/// all errors) goes to stderr, so piping the output stays clean.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// The program file to run.
    #[clap(value_parser)]
    input: String,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    let code = match Program::load(&args.input) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: could not open {}: {e}", args.input);
            exit(1);
        }
    };

    eprintln!("running, press ctrl+c to abort, press ctrl+d EOF");
    let start = Instant::now();
    match Interpreter::new(StandardDevice).run(&code) {
        Ok(_) => eprintln!("\ndone, took: {:?}", start.elapsed()),
        Err(e) => {
            eprintln!("\nerror: {e}");
            exit(1);
        }
    }
}
