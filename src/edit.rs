use std::{
    collections::{HashMap, HashSet},
    fs::{read_to_string, remove_file, write},
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    files::{file_name, list_files},
};

/// the extension of the Gaussian input files picked up by [run]
pub const INPUT_EXT: &str = "gjf";

pub const PROMPT: &str = "Do you want to delete the original files? (y/n): ";

/// An ordered list of literal `(old, new)` replacements. Each pair is applied
/// in turn, so a later rule sees the output of the earlier ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rules(Vec<(String, String)>);

impl Default for Rules {
    /// bump the processor count and memory of a batch of jobs
    fn default() -> Self {
        Self::new([
            ("%nprocshared=32", "%nprocshared=120"),
            ("%mem=20GB", "%mem=40GB"),
        ])
    }
}

impl Rules {
    pub fn new<S: Into<String>>(
        pairs: impl IntoIterator<Item = (S, S)>,
    ) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(old, new)| (old.into(), new.into()))
                .collect(),
        )
    }

    /// load rules from a JSON file containing an array of `[old, new]` pairs,
    /// like
    ///
    /// ```json
    /// [["%nprocshared=32", "%nprocshared=120"], ["%mem=20GB", "%mem=40GB"]]
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let s = read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&s).map_err(|source| Error::Rules {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// apply every rule, in order, to `s`
    pub fn apply(&self, s: &str) -> String {
        let mut ret = s.to_owned();
        for (old, new) in &self.0 {
            if !old.is_empty() {
                ret = ret.replace(old.as_str(), new);
            }
        }
        ret
    }

    /// apply the rules to each line of `contents` separately. lines keep their
    /// terminators, so a rule can match a trailing newline but never span two
    /// lines
    pub fn apply_lines(&self, contents: &str) -> String {
        contents
            .split_inclusive('\n')
            .map(|line| self.apply(line))
            .collect()
    }
}

/// A rewritten input file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Processed {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl Processed {
    /// the output was written over the source file
    pub fn in_place(&self) -> bool {
        self.source == self.output
    }
}

/// How to answer the question of deleting the original files
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// prompt and read the answer
    Ask,
    Delete,
    Keep,
}

/// Apply `rules` to the contents and name of the input file at `path`,
/// returning the new location next to it and the new contents. Nothing is
/// written yet.
pub fn rewrite(path: &Path, rules: &Rules) -> Result<(Processed, String)> {
    let contents = read_to_string(path).map_err(|e| Error::io(path, e))?;
    let new_name = rules.apply(&file_name(path));
    let p = Processed {
        source: path.to_path_buf(),
        output: path.with_file_name(new_name),
    };
    Ok((p, rules.apply_lines(&contents)))
}

/// rewrite every file in `files` before writing any of them, so that an output
/// landing on another input never clobbers it before it is read. two inputs
/// renamed to the same output are an error, and nothing is written in that
/// case
fn rewrite_all(
    files: &[PathBuf],
    rules: &Rules,
) -> Result<Vec<(Processed, String)>> {
    let mut ret = Vec::with_capacity(files.len());
    let mut seen: HashMap<PathBuf, PathBuf> = HashMap::new();
    for file in files {
        let (p, contents) = rewrite(file, rules)?;
        if let Some(first) = seen.insert(p.output.clone(), p.source.clone()) {
            return Err(Error::Collision {
                output: p.output,
                first,
                second: p.source,
            });
        }
        ret.push((p, contents));
    }
    Ok(ret)
}

/// print [PROMPT] to `out` and read a line from `input`. only `y`, ignoring
/// case and surrounding whitespace, counts as yes
pub fn confirm(
    mut input: impl BufRead,
    mut out: impl Write,
) -> std::io::Result<bool> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    Ok(buf.trim().eq_ignore_ascii_case("y"))
}

/// delete the source of each entry in `processed`, except for those that now
/// hold a rewritten file, either their own or another input's
pub fn delete_originals(
    processed: &[Processed],
    mut out: impl Write,
) -> Result<()> {
    let outputs: HashSet<&Path> =
        processed.iter().map(|p| p.output.as_path()).collect();
    for p in processed {
        let name = file_name(&p.source);
        if p.in_place() {
            writeln!(out, "Kept: {name} (rewritten in place)")
                .map_err(|e| Error::io(&p.source, e))?;
            continue;
        }
        if outputs.contains(p.source.as_path()) {
            writeln!(out, "Kept: {name} (replaced by a rewritten file)")
                .map_err(|e| Error::io(&p.source, e))?;
            continue;
        }
        remove_file(&p.source).map_err(|e| Error::io(&p.source, e))?;
        log::debug!("removed {}", p.source.display());
        writeln!(out, "Deleted: {name}")
            .map_err(|e| Error::io(&p.source, e))?;
    }
    Ok(())
}

/// Rewrite every `.gjf` file in `dir` with `rules`, reporting progress to
/// `out`, and then delete the originals according to `decision`. `input` is
/// only read when `decision` is [Decision::Ask]. Returns the processed files,
/// which is empty if there was nothing to do.
pub fn run(
    dir: &Path,
    rules: &Rules,
    decision: Decision,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<Vec<Processed>> {
    if !dir.exists() {
        return Err(Error::MissingDirectory(dir.to_path_buf()));
    }
    let files = list_files(dir, INPUT_EXT)?;
    let io_err = |e: std::io::Error| Error::io(dir, e);
    if files.is_empty() {
        writeln!(out, "No .{INPUT_EXT} files found in '{}'.", dir.display())
            .map_err(io_err)?;
        return Ok(Vec::new());
    }
    if rules.is_empty() {
        log::warn!("no replacement rules given, files are rewritten unchanged");
    }
    log::info!(
        "applying {} replacement rules to {} files",
        rules.len(),
        files.len()
    );

    let rewritten = rewrite_all(&files, rules)?;
    let mut processed = Vec::with_capacity(rewritten.len());
    for (p, contents) in rewritten {
        write(&p.output, contents).map_err(|e| Error::io(&p.output, e))?;
        writeln!(
            out,
            "Processed: {} -> {}",
            file_name(&p.source),
            file_name(&p.output)
        )
        .map_err(io_err)?;
        processed.push(p);
    }

    let delete = match decision {
        Decision::Ask => confirm(input, &mut out).map_err(io_err)?,
        Decision::Delete => true,
        Decision::Keep => false,
    };
    if delete {
        delete_originals(&processed, &mut out)?;
        writeln!(out, "All original files have been deleted.")
            .map_err(io_err)?;
    } else {
        writeln!(out, "Original files have been kept.").map_err(io_err)?;
    }
    writeln!(out, "Processing complete.").map_err(io_err)?;

    Ok(processed)
}
