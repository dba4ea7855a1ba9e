use std::fs;

use clap::Parser;
use log::{Level, debug};
use numora::interpreter::{evaluator::core::Context, value::core::Value};

/// numora is an interpreter for a compact numeric scripting language with
/// complex scalars, matrices, strings, ranges and scoped blocks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numora to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints out the last value of a numora script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Writes the last value of the script to this path in binary form.
    #[arg(short, long, value_name = "PATH")]
    save: Option<String>,

    /// Reads a value saved with `--save` from this path and prints it.
    #[arg(short, long, value_name = "PATH")]
    load: Option<String>,

    /// Increases log output; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: Option<String>,
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::Warn,
        1 => Level::Debug,
        _ => Level::Trace,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("Failed to initialise logging: {e}");
    }

    if let Some(path) = &args.load {
        let bytes = fs::read(path).unwrap_or_else(|_| {
                                      fail(&format!("Failed to read the value file '{path}'. Perhaps this file does not exist?"))
                                  });
        match Value::deserialize(&bytes) {
            Ok(value) => println!("{value}"),
            Err(e) => fail(&e.to_string()),
        }
        if args.contents.is_none() {
            return;
        }
    }

    let Some(contents) = args.contents else {
        fail("No script given. Pass a script, or a path together with --file.");
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         fail(&format!("Failed to read the input file '{contents}'. Perhaps this file does not exist?"))
                                     })
    } else {
        contents
    };

    let mut context = Context::new();
    let result = match context.run(&script) {
        Ok(result) => result,
        Err(e) => fail(&e.to_string()),
    };

    if args.pipe_mode
       && let Some(value) = &result
    {
        println!("{value}");
    }

    if let Some(path) = &args.save {
        let value = result.unwrap_or(Value::Void);
        let bytes = value.serialize();
        debug!("writing {} bytes to {path}", bytes.len());
        if let Err(e) = fs::write(path, bytes) {
            fail(&format!("Failed to write '{path}': {e}"));
        }
    }
}
