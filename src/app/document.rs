use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::error::{Result, SessionError};

/// The one open document: its text and, once opened or saved, the file it
/// belongs to.
///
/// The session owns the canonical text. The UI shell copies the widget's
/// content in before a save and copies the session's content out after an
/// open or a new-file reset.
#[derive(Debug, Default)]
pub struct DocumentSession {
    buffer: String,
    path: Option<PathBuf>,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Replace the session text with the current widget content.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    /// The associated file, if the document has one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File name component of the associated path, for window titles.
    pub fn display_name(&self) -> Option<String> {
        self.path.as_deref().map(file_label)
    }

    /// "New": empty buffer, no associated file. No I/O.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.path = None;
    }

    /// "Open": replace the buffer with the file's content, read line by line
    /// with a `'\n'` appended to each line. A file without a trailing newline
    /// gains one; a trailing blank line survives as an appended empty line.
    ///
    /// The buffer is cleared before the read starts, so on failure it is left
    /// empty - not holding the previous document - and the file association
    /// is dropped along with it.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let name = file_label(path);

        self.buffer.clear();
        self.path = None;

        let file = File::open(path).map_err(|source| SessionError::NotFound {
            name: name.clone(),
            source,
        })?;

        for line in BufReader::new(file).lines() {
            match line {
                Ok(line) => {
                    self.buffer.push_str(&line);
                    self.buffer.push('\n');
                }
                Err(source) => {
                    self.buffer.clear();
                    return Err(SessionError::Read { name, source });
                }
            }
        }

        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// "Save": write the whole buffer to the associated file, overwriting it.
    ///
    /// Returns `Ok(Some(path))` with the path actually written, or `Ok(None)`
    /// when the document has no associated file yet - the caller then runs
    /// the Save As flow.
    pub fn save(&mut self) -> Result<Option<PathBuf>> {
        match self.path.clone() {
            Some(path) => {
                let written = self.write_to(&path)?;
                self.path = Some(written.clone());
                Ok(Some(written))
            }
            None => Ok(None),
        }
    }

    /// "Save As": write the whole buffer to the chosen destination and adopt
    /// the written path as the new association. Dialog cancellation never
    /// reaches the session; the shell treats it as a no-op.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let written = self.write_to(path.as_ref())?;
        self.path = Some(written.clone());
        Ok(written)
    }

    fn write_to(&self, path: &Path) -> Result<PathBuf> {
        let target = normalize_save_path(path);
        let name = file_label(&target);

        let mut file = File::create(&target).map_err(|source| SessionError::NotFound {
            name: name.clone(),
            source,
        })?;
        file.write_all(self.buffer.as_bytes())
            .map_err(|source| SessionError::Write { name, source })?;

        Ok(target)
    }
}

/// Resolve a save destination to the path actually written.
///
/// The target is made absolute, then checked for the substring ".txt"
/// anywhere in it - not just as a suffix. A match keeps the path as chosen;
/// otherwise ".txt" is appended. So "notes" becomes "notes.txt" while
/// "a.txtb" is written unchanged. This matches the editor's historical
/// behavior exactly; switching to an ends-with check would change which
/// files existing users' notes land in.
pub fn normalize_save_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let display = absolute.to_string_lossy();
    if display.contains(".txt") {
        absolute
    } else {
        PathBuf::from(format!("{}.txt", display))
    }
}

/// Extract the file name component of a path for titles and diagnostics.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
