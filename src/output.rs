use std::{collections::BTreeSet, fmt::Display, sync::OnceLock};

use regex::Regex;
use serde::Serialize;

pub use self::freq::Frequencies;
pub use self::route::Route;

mod freq;
mod route;


/// the number of lines after the last force constants line in which to look
/// for the first `Frequencies --` line, counting the force constants line
/// itself
pub const FREQ_WINDOW: usize = 20;

static CELL: OnceLock<[Regex; 5]> = OnceLock::new();

fn markers() -> &'static [Regex; 5] {
    CELL.get_or_init(|| {
        [
            Regex::new("Normal termination").unwrap(),
            Regex::new("(?i)converged").unwrap(),
            Regex::new("Stationary point found").unwrap(),
            Regex::new("(?i)force constants").unwrap(),
            Regex::new(r"^\s*Frequencies --").unwrap(),
        ]
    })
}

/// The problems [classify] can find in a Gaussian output file
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
pub enum Issue {
    #[serde(rename = "termination problem")]
    Termination,
    #[serde(rename = "convergence problem")]
    Convergence,
    #[serde(rename = "frequency problem")]
    Frequency,
}

impl Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Issue::Termination => "termination problem",
            Issue::Convergence => "convergence problem",
            Issue::Frequency => "frequency problem",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IssueSet(BTreeSet<Issue>);

impl IssueSet {
    pub fn contains(&self, issue: Issue) -> bool {
        self.0.contains(&issue)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Issue> + '_ {
        self.0.iter().copied()
    }

    fn insert(&mut self, issue: Issue) {
        self.0.insert(issue);
    }
}

impl FromIterator<Issue> for IssueSet {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for IssueSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "no problems");
        }
        let issues: Vec<_> = self.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", issues.join(", "))
    }
}

/// report whether `contents` contains the `Normal termination` marker anywhere
pub fn terminated_normally(contents: &str) -> bool {
    let [term_re, ..] = markers();
    term_re.is_match(contents)
}

/// Classify the full contents of a Gaussian output file. The termination check
/// always runs, while the convergence and frequency checks only run when the
/// first route section of the file asks for `opt` and `freq`, respectively.
pub fn classify(contents: &str) -> IssueSet {
    let mut issues = IssueSet::default();
    if !terminated_normally(contents) {
        issues.insert(Issue::Termination);
    }

    let lines: Vec<&str> = contents.lines().collect();
    let route = Route::from_lines(&lines);

    if route.is_opt() && !converged(&lines) {
        issues.insert(Issue::Convergence);
    }

    if route.is_freq() && !frequencies_real(&lines) {
        issues.insert(Issue::Frequency);
    }

    issues
}

/// the last line mentioning convergence has to be followed, on that line or any
/// later one, by a stationary point
fn converged(lines: &[&str]) -> bool {
    let [_, conv_re, stat_re, ..] = markers();
    let Some(last) = lines.iter().rposition(|l| conv_re.is_match(l)) else {
        return false;
    };
    lines[last..].iter().any(|l| stat_re.is_match(l))
}

/// look for the first `Frequencies --` line after the last force constants line
/// and make sure none of its values are negative
fn frequencies_real(lines: &[&str]) -> bool {
    let [.., fc_re, freq_re] = markers();
    let Some(last) = lines.iter().rposition(|l| fc_re.is_match(l)) else {
        return false;
    };
    let end = (last + FREQ_WINDOW).min(lines.len());
    let Some(line) = lines[last..end].iter().find(|l| freq_re.is_match(l))
    else {
        return false;
    };
    let freqs = Frequencies::parse(line);
    if !freqs.is_readable() {
        log::warn!("unable to read frequencies from `{}`", line.trim());
        return true;
    }
    let imag = freqs.imaginary();
    if !imag.is_empty() {
        log::debug!("imaginary frequencies: {imag:?}");
    }
    imag.is_empty()
}
