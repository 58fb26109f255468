use std::fmt::Display;

use super::Report;

/// width of each OK/FAIL column
const COL_WIDTH: usize = 12;

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let checks = self.mode.checks();
        let name_width =
            self.rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);

        writeln!(f)?;
        writeln!(f, "Checking files in: {}", self.dir.display())?;

        let headers: Vec<_> = checks.iter().map(|c| c.header()).collect();
        writeln!(f, "{}", line("Filename", name_width, &headers))?;
        writeln!(
            f,
            "{}",
            "-".repeat(name_width + (COL_WIDTH + 2) * checks.len())
        )?;

        for row in &self.rows {
            let cells: Vec<_> = checks
                .iter()
                .map(|&c| if row.passed(c) { "OK" } else { "FAIL" })
                .collect();
            writeln!(f, "{}", line(&row.name, name_width, &cells))?;
        }
        Ok(())
    }
}

/// left-align `name` and `cells` in their columns, leaving the last cell
/// unpadded
fn line(name: &str, name_width: usize, cells: &[&str]) -> String {
    let mut ret = format!("{name:<name_width$}");
    for cell in cells {
        ret.push_str(&format!("  {cell:<COL_WIDTH$}"));
    }
    ret.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use insta::assert_snapshot;

    use crate::output::Issue;
    use crate::scan::{Mode, Row};

    use super::*;

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "water_opt_freq".to_owned(),
                issues: Default::default(),
            },
            Row {
                name: "ts".to_owned(),
                issues: [Issue::Frequency].into_iter().collect(),
            },
            Row {
                name: "crashed".to_owned(),
                issues: [Issue::Termination, Issue::Convergence]
                    .into_iter()
                    .collect(),
            },
        ]
    }

    #[test]
    fn full_table() {
        let report = Report {
            dir: PathBuf::from("/scratch/jobs"),
            mode: Mode::Full,
            rows: rows(),
        };
        assert_snapshot!(report.to_string());
    }

    #[test]
    fn termination_table() {
        let report = Report {
            dir: PathBuf::from("/scratch/jobs"),
            mode: Mode::TerminationOnly,
            rows: rows(),
        };
        assert_snapshot!(report.to_string());
    }

    #[test]
    fn short_names() {
        let report = Report {
            dir: PathBuf::from("."),
            mode: Mode::TerminationOnly,
            rows: vec![Row {
                name: "a".to_owned(),
                issues: Default::default(),
            }],
        };
        let got = report.to_string();
        let want = "
Checking files in: .
Filename  Termination
---------------
a  OK
";
        assert_eq!(got, want);
    }

    #[test]
    fn no_rows() {
        let report = Report {
            dir: PathBuf::from("."),
            mode: Mode::Full,
            rows: Vec::new(),
        };
        let got: Vec<_> = report.to_string().lines().map(str::len).collect();
        assert_eq!(got, vec![0, 20, 47, 42]);
    }

    #[test]
    fn non_ascii_names() {
        let report = Report {
            dir: PathBuf::from("."),
            mode: Mode::TerminationOnly,
            rows: vec![
                Row {
                    name: "Ölsäure".to_owned(),
                    issues: Default::default(),
                },
                Row {
                    name: "ts".to_owned(),
                    issues: [Issue::Termination].into_iter().collect(),
                },
            ],
        };
        let got = report.to_string();
        let want = "
Checking files in: .
Filename  Termination
---------------------
Ölsäure  OK
ts       FAIL
";
        assert_eq!(got, want);
    }
}
