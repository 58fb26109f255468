use std::{
    fs::{read, read_dir},
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// return the regular files directly inside `dir` whose names end with `.ext`,
/// sorted by file name
pub fn list_files(dir: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    let suffix = format!(".{ext}");
    let entries = read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut ret = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && file_name(&path).ends_with(&suffix) {
            ret.push(path);
        }
    }
    ret.sort_by_key(|p| file_name(p));
    Ok(ret)
}

/// read `path` as UTF-8, silently dropping any bytes that aren't valid
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = read(path).map_err(|e| Error::io(path, e))?;
    let mut ret = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        ret.push_str(chunk.valid());
    }
    Ok(ret)
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// the file name of `path` with its last extension removed
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
