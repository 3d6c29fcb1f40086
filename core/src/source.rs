//! File-backed document and noise-word sources.

use crate::error::{Error, Result};
use crate::keyword::NoiseWords;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

impl NoiseWords {
    /// Loads every whitespace-separated word in `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| Error::NoiseWords { path: path.to_path_buf(), source })?;
        let words: NoiseWords = text.split_whitespace().collect();
        tracing::debug!(path = %path.display(), count = words.len(), "loaded noise words");
        Ok(words)
    }
}

/// An ordered set of documents to index: id plus the file holding its text.
#[derive(Debug, Clone, Default)]
pub struct DocumentList {
    entries: Vec<(String, PathBuf)>,
}

impl DocumentList {
    /// Reads a list file naming one document per whitespace-separated entry.
    /// Relative entries resolve against the list file's directory; the entry as
    /// written becomes the document id.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| Error::DocumentList { path: path.to_path_buf(), source })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let entries = text
            .split_whitespace()
            .map(|name| (name.to_string(), base.join(name)))
            .collect();
        Ok(Self { entries })
    }

    /// Collects every `.txt` file under `dir`, sorted by path.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let p = entry.path();
            if p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("txt") {
                files.push(p.to_path_buf());
            }
        }
        files.sort();
        let entries = files
            .into_iter()
            .map(|p| {
                let id = p.strip_prefix(dir).unwrap_or(&p).to_string_lossy().replace('\\', "/");
                (id, p)
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Lazily reads each document's tokens, in list order.
    pub fn documents(&self) -> impl Iterator<Item = Result<(String, Vec<String>)>> + '_ {
        self.entries
            .iter()
            .map(|(id, path)| read_tokens(path).map(|tokens| (id.clone(), tokens)))
    }
}

/// Whitespace-delimited tokens of a document file.
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .map_err(|source| Error::Document { path: path.to_path_buf(), source })?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}
