use anyhow::{Context, Result};
use clap::Parser;
use emmental_vm::config::DEFAULT_MAX_CALL_DEPTH;
use emmental_vm::{disassemble_redefined, VmConfig, VM};
use log::{debug, LevelFilter};
use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Emmental - self-modifying stack and queue language
#[derive(Parser)]
#[command(name = "emmental")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interpreter for the Emmental language", long_about = "Emmental Interpreter\n\nRuns an Emmental program file byte by byte. Standard input feeds the `,`\ninstruction and standard output receives the bytes written by `.`.")]
struct Cli {
    /// Program file to execute
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Run program text given on the command line
    #[arg(short, long, value_name = "PROGRAM", conflicts_with = "file")]
    eval: Option<String>,

    /// Maximum nesting of non-tail `?` calls
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Print every redefined symbol to stderr after the run
    #[arg(long)]
    dump_definitions: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (name, program) = match load_program(&cli) {
        Ok(Some(loaded)) => loaded,
        Ok(None) => {
            eprintln!("Error: No program file provided.");
            eprintln!();
            eprintln!("Usage: emmental <FILE>");
            eprintln!();
            eprintln!("Try 'emmental --help' for more information.");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    };

    let config = VmConfig::default().with_max_call_depth(cli.max_depth);
    if let Err(err) = run_program(&name, &program, config, cli.dump_definitions) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

/// Program bytes and a display name, or `None` when nothing was given
fn load_program(cli: &Cli) -> Result<Option<(String, Vec<u8>)>> {
    if let Some(text) = &cli.eval {
        return Ok(Some(("<eval>".to_string(), text.as_bytes().to_vec())));
    }

    let Some(path) = &cli.file else {
        return Ok(None);
    };
    let program =
        fs::read(path).with_context(|| format!("Unable to open {}", path.display()))?;
    debug!("loaded {} bytes from {}", program.len(), path.display());
    Ok(Some((path.display().to_string(), program)))
}

fn run_program(name: &str, program: &[u8], config: VmConfig, dump: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut vm = VM::with_config(io::stdin().lock(), BufWriter::new(stdout.lock()), config);

    let result = vm.run(program);

    if dump {
        for line in disassemble_redefined(vm.definitions()) {
            eprintln!("{}", line);
        }
    }
    debug!(
        "finished with {} cells on the stack, {} queued, max call depth {}",
        vm.stack().len(),
        vm.queue().len(),
        vm.call_depth_high_water()
    );

    result.with_context(|| format!("while running {}", name))
}
