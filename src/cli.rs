//! Command line handling shared by the binaries

use std::{
    fmt::Display,
    io::{stdin, stdout},
    path::PathBuf,
    process::exit,
};

use clap::{error::ErrorKind, Parser};

use crate::{
    edit::{self, Decision, Rules},
    scan::{scan, Mode},
};

/// Report whether the Gaussian output files in a directory terminated normally,
/// converged, and have no imaginary frequencies
#[derive(Debug, Parser)]
#[command(version)]
pub struct ScanArgs {
    /// The directory to check. Defaults to the current directory
    pub directory: Option<PathBuf>,

    /// Print the results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Apply literal replacements to the contents and names of the Gaussian input
/// files in a directory
#[derive(Debug, Parser)]
#[command(version)]
pub struct EditArgs {
    /// The directory containing the input files. Defaults to the directory
    /// containing this program
    pub directory: Option<PathBuf>,

    /// JSON file containing an array of [old, new] replacement pairs
    #[arg(short, long)]
    pub rules: Option<PathBuf>,

    /// Delete the original files without asking
    #[arg(short, long, conflicts_with = "keep")]
    pub yes: bool,

    /// Keep the original files without asking
    #[arg(short, long)]
    pub keep: bool,
}

impl EditArgs {
    pub fn decision(&self) -> Decision {
        if self.yes {
            Decision::Delete
        } else if self.keep {
            Decision::Keep
        } else {
            Decision::Ask
        }
    }
}

/// help and version requests are successful exits, and every other parse error
/// is a usage error
pub fn exit_code(e: &clap::Error) -> i32 {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// parse the command line arguments, exiting with the appropriate code on
/// failure
pub fn parse<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            exit(exit_code(&e));
        }
    }
}

/// set up env_logger, showing warnings and errors unless `RUST_LOG` says
/// otherwise
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .init();
}

fn die(e: impl Display) -> ! {
    eprintln!("{e}");
    exit(1);
}

/// entry point for the output scanners
pub fn check_main(mode: Mode) {
    init_logging();
    let args: ScanArgs = parse();
    let dir = match args.directory {
        Some(d) => d,
        None => std::env::current_dir().unwrap_or_else(|e| {
            die(format!("failed to get current directory with `{e}`"))
        }),
    };
    let report = scan(&dir, mode).unwrap_or_else(|e| die(e));
    log::info!(
        "{} of {} files have problems",
        report.failures(),
        report.rows.len()
    );
    if args.json {
        println!("{}", report.to_json());
    } else {
        print!("{report}");
    }
}

/// the directory containing the running executable
fn exe_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map(PathBuf::from).unwrap_or_default())
}

/// entry point for the input file editor
pub fn modify_main() {
    init_logging();
    let args: EditArgs = parse();
    let dir = match &args.directory {
        // a missing directory is reported by edit::run
        Some(d) => d.canonicalize().unwrap_or_else(|_| d.clone()),
        None => exe_dir().unwrap_or_else(|e| {
            die(format!("failed to locate executable with `{e}`"))
        }),
    };
    let rules = match &args.rules {
        Some(path) => Rules::load(path).unwrap_or_else(|e| die(e)),
        None => Rules::default(),
    };
    if let Err(e) =
        edit::run(&dir, &rules, args.decision(), stdin().lock(), stdout())
    {
        die(e);
    }
}
