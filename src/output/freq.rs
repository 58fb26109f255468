/// The values read from a single `Frequencies --` line of a Gaussian output
/// file
#[derive(Clone, Debug, PartialEq)]
pub enum Frequencies {
    /// at least one number was found on the line
    Parsed(Vec<f64>),

    /// the line had nothing after `--` that looked like a number. this is not
    /// treated as a problem by the classifier, but it also means the
    /// frequencies were never actually checked
    Unreadable,
}

impl Frequencies {
    /// parse a line like
    ///
    /// ```text
    ///  Frequencies --    120.5012               340.2245
    /// ```
    ///
    /// Only the text between the first `--` and the next one (or the end of
    /// the line) is considered. Tokens that don't look like numbers are
    /// skipped.
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.split("--").nth(1) else {
            return Self::Unreadable;
        };
        let mut ret = Vec::new();
        for tok in rest.split_whitespace() {
            let tok = normalize_sign(tok);
            if !is_numeric(&tok) {
                continue;
            }
            match tok.parse::<f64>() {
                Ok(v) => ret.push(v),
                Err(_) => return Self::Unreadable,
            }
        }
        if ret.is_empty() {
            Self::Unreadable
        } else {
            Self::Parsed(ret)
        }
    }

    pub fn is_readable(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }

    /// return the negative (imaginary) frequencies on the line, if any
    pub fn imaginary(&self) -> Vec<f64> {
        match self {
            Self::Parsed(v) => v.iter().copied().filter(|&f| f < 0.0).collect(),
            Self::Unreadable => Vec::new(),
        }
    }
}

/// replace the unicode minus sign and en dash with an ascii hyphen
fn normalize_sign(tok: &str) -> String {
    tok.replace(['\u{2212}', '\u{2013}'], "-")
}

/// an optional leading sign, then digits with at most one decimal point
fn is_numeric(tok: &str) -> bool {
    let digits = tok.strip_prefix(['-', '+']).unwrap_or(tok);
    let digits = digits.replacen('.', "", 1);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
