use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    error::Result,
    files::{base_name, list_files, read_lossy},
    output::{classify, terminated_normally, Issue, IssueSet},
};

mod table;

/// the extension of the Gaussian output files picked up by [scan]
pub const OUTPUT_EXT: &str = "out";

/// A single column of the scan table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Termination,
    Convergence,
    Frequency,
}

impl Check {
    pub fn header(&self) -> &'static str {
        match self {
            Check::Termination => "Termination",
            Check::Convergence => "Convergence",
            Check::Frequency => "Frequency",
        }
    }

    pub fn issue(&self) -> Issue {
        match self {
            Check::Termination => Issue::Termination,
            Check::Convergence => Issue::Convergence,
            Check::Frequency => Issue::Frequency,
        }
    }
}

/// Which checks to run on each file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// termination, convergence, and frequency checks via [classify]
    Full,

    /// only look for normal termination. suitable for single points and other
    /// jobs without optimizations
    TerminationOnly,
}

impl Mode {
    pub fn checks(&self) -> &'static [Check] {
        match self {
            Mode::Full => {
                &[Check::Termination, Check::Convergence, Check::Frequency]
            }
            Mode::TerminationOnly => &[Check::Termination],
        }
    }

    pub fn issues(&self, contents: &str) -> IssueSet {
        match self {
            Mode::Full => classify(contents),
            Mode::TerminationOnly => {
                if terminated_normally(contents) {
                    IssueSet::default()
                } else {
                    [Issue::Termination].into_iter().collect()
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Row {
    /// file name without the extension
    pub name: String,
    pub issues: IssueSet,
}

impl Row {
    pub fn passed(&self, check: Check) -> bool {
        !self.issues.contains(check.issue())
    }
}

/// The results of scanning one directory. The [Display] implementation renders
/// the table printed by the scanners.
///
/// [Display]: std::fmt::Display
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub dir: PathBuf,
    pub mode: Mode,
    pub rows: Vec<Row>,
}

impl Report {
    /// serialize the rows of `self` as a pretty-printed JSON array
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self.rows)
            .expect("rows are always representable as JSON")
    }

    /// return the number of rows with at least one problem
    pub fn failures(&self) -> usize {
        self.rows.iter().filter(|r| !r.issues.is_empty()).count()
    }
}

/// Check every `.out` file in `dir`, in order of file name. Any error reading
/// one of the files aborts the whole scan.
pub fn scan(dir: &Path, mode: Mode) -> Result<Report> {
    let files = list_files(dir, OUTPUT_EXT)?;
    log::info!("found {} output files in {}", files.len(), dir.display());
    let mut rows = Vec::with_capacity(files.len());
    for file in files {
        let contents = read_lossy(&file)?;
        let issues = mode.issues(&contents);
        log::debug!("{}: {issues}", file.display());
        rows.push(Row {
            name: base_name(&file),
            issues,
        });
    }
    Ok(Report {
        dir: dir.to_path_buf(),
        mode,
        rows,
    })
}
