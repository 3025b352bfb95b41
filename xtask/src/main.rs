// Licensed under the Apache-2.0 license

use clap::{Parser, Subcommand};
use lazy_static::lazy_static;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::{Path, PathBuf};

mod precheckin;
mod reg_gen;
mod reg_gen_driver;

lazy_static! {
    pub static ref PROJECT_ROOT: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Xtask {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    xtask: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate register bitfields from a register-definition XML file
    RegGen {
        /// Register-definition XML file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file; generated code is printed to stdout when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Only write the register blocks, without license header and imports
        #[arg(long, default_value_t = false)]
        no_header: bool,
    },
    /// Regenerate the registers-generated crate from hw/cc1200.xml
    RegGenDriver {
        /// Only check that the checked-in code is up to date
        #[arg(long, default_value_t = false)]
        check: bool,
    },
    /// Run the checks that must pass before committing
    Precheckin,
}

fn main() {
    let cli = Xtask::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = SimpleLogger::new().with_level(level).init();

    let result = match &cli.xtask {
        Commands::RegGen {
            input,
            output,
            no_header,
        } => reg_gen::generate(input, output.as_deref(), !no_header),
        Commands::RegGenDriver { check } => reg_gen_driver::generate(&PROJECT_ROOT, *check),
        Commands::Precheckin => precheckin::precheckin(),
    };
    if let Err(e) = result {
        error!("{e:#}");
        std::process::exit(1);
    }
}
