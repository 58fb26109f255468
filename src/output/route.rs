use std::fmt::Display;

/// The route section of a Gaussian job, lower-cased and with any continuation
/// lines joined onto the first line by single spaces. Only the first route
/// section in a file is ever read, so later steps of a multi-step job are
/// invisible here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route(String);

impl Route {
    pub fn parse(contents: &str) -> Self {
        let lines: Vec<&str> = contents.lines().collect();
        Self::from_lines(&lines)
    }

    pub(crate) fn from_lines(lines: &[&str]) -> Self {
        let Some(start) = lines.iter().position(|l| l.trim().starts_with('#'))
        else {
            return Self::default();
        };
        let mut pieces = Vec::new();
        for line in &lines[start..] {
            let line = line.trim();
            pieces.push(line);
            // a trailing backslash continues the route onto the next line
            if !line.ends_with('\\') {
                break;
            }
        }
        Self(pieces.join(" ").to_lowercase())
    }

    pub fn is_opt(&self) -> bool {
        self.0.contains("opt")
    }

    pub fn is_freq(&self) -> bool {
        self.0.contains("freq")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_route() {
        let got = Route::parse(" Normal termination of Gaussian 16\n");
        assert!(got.is_empty());
        assert!(!got.is_opt());
        assert!(!got.is_freq());
    }

    #[test]
    fn single_line() {
        let got = Route::parse("%mem=20GB\n # Opt Freq B3LYP/6-31G(d)\n\n");
        assert_eq!(got.as_str(), "# opt freq b3lyp/6-31g(d)");
        assert!(got.is_opt());
        assert!(got.is_freq());
    }

    #[test]
    fn continued() {
        let got = Route::parse(
            " #p b3lyp/6-31g(d) \\\n   opt=calcfc \\\n  freq\n #p later\n",
        );
        assert_eq!(got.as_str(), "#p b3lyp/6-31g(d) \\ opt=calcfc \\ freq");
        assert!(got.is_opt());
        assert!(got.is_freq());
    }

    #[test]
    fn continued_at_eof() {
        let got = Route::parse("# sp b3lyp \\");
        assert_eq!(got.as_str(), "# sp b3lyp \\");
    }

    #[test]
    fn only_first() {
        let got = Route::parse("# sp b3lyp\n\n# opt freq\n");
        assert_eq!(got.as_str(), "# sp b3lyp");
        assert!(!got.is_opt());
        assert!(!got.is_freq());
    }
}
