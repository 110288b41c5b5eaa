//! Durable storage for a pattern and its stitch progress
//!
//! The two records are always written and read as a pair. On load, a missing,
//! unparseable or dimensionally inconsistent half causes both halves to be
//! discarded, leaving the caller in an unconfigured state instead of pairing
//! progress with the wrong chart.

use crate::io::configuration::{PATTERN_FILE, PROGRESS_FILE};
use crate::io::error::{Result, StitchError, WithPath};
use crate::pattern::{Pattern, Session, StitchProgress};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Storage medium for the pattern/progress pair
pub trait PatternStore {
    /// Load both records, or `None` if either is absent or invalid
    fn load(&self) -> Option<(Pattern, StitchProgress)>;

    /// Persist both records
    ///
    /// # Errors
    ///
    /// Returns an error if either record cannot be serialized or written
    fn save(&self, pattern: &Pattern, progress: &StitchProgress) -> Result<()>;

    /// Persist progress alone after a toggle or clear
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be serialized or written
    fn save_progress(&self, progress: &StitchProgress) -> Result<()>;

    /// Remove both records
    ///
    /// # Errors
    ///
    /// Returns an error if an existing record cannot be removed
    fn clear(&self) -> Result<()>;

    /// Load the pair as a session
    fn load_session(&self) -> Option<Session> {
        let (pattern, progress) = self.load()?;
        Session::from_parts(pattern, progress).ok()
    }

    /// Persist a session
    ///
    /// # Errors
    ///
    /// Returns an error if either record cannot be serialized or written
    fn save_session(&self, session: &Session) -> Result<()> {
        self.save(session.pattern(), session.progress())
    }
}

fn encode<T: Serialize>(value: &T, path: &Path) -> Result<String> {
    serde_json::to_string(value).map_err(|source| StitchError::Serialization {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a stored pair, applying the discard-both rule
pub fn decode_pair(
    pattern_json: Option<&str>,
    progress_json: Option<&str>,
) -> Option<(Pattern, StitchProgress)> {
    let (pattern_json, progress_json) = match (pattern_json, progress_json) {
        (Some(pattern), Some(progress)) => (pattern, progress),
        (None, None) => return None,
        _ => {
            tracing::warn!("only one of pattern and progress is stored; discarding both");
            return None;
        }
    };

    let pattern: Pattern = match serde_json::from_str(pattern_json) {
        Ok(pattern) => pattern,
        Err(error) => {
            tracing::warn!(%error, "stored pattern is unreadable; discarding both records");
            return None;
        }
    };
    let progress: StitchProgress = match serde_json::from_str(progress_json) {
        Ok(progress) => progress,
        Err(error) => {
            tracing::warn!(%error, "stored progress is unreadable; discarding both records");
            return None;
        }
    };

    if !progress.matches(&pattern) {
        tracing::warn!(
            pattern = ?pattern.dimensions(),
            progress = ?progress.dimensions(),
            "stored progress does not match stored pattern; discarding both records"
        );
        return None;
    }
    Some((pattern, progress))
}

/// Pattern and progress as two JSON files in one session directory
#[derive(Debug, Clone)]
pub struct JsonDirectoryStore {
    dir: PathBuf,
}

impl JsonDirectoryStore {
    /// Store rooted at `dir`; the directory is created on first save
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Session directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of the pattern record
    pub fn pattern_path(&self) -> PathBuf {
        self.dir.join(PATTERN_FILE)
    }

    /// Location of the progress record
    pub fn progress_path(&self) -> PathBuf {
        self.dir.join(PROGRESS_FILE)
    }

    fn read(path: &Path) -> Option<String> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Some(contents),
            Err(error) if error.kind() == ErrorKind::NotFound => None,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read session file");
                None
            }
        }
    }

    fn stage(&self, path: &Path, contents: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir).with_path(&self.dir, "create directory")?;
        let staging = path.with_extension("json.tmp");
        std::fs::write(&staging, contents).with_path(&staging, "write")?;
        Ok(staging)
    }

    fn discard(staged: &[&Path]) {
        for path in staged {
            if let Err(error) = std::fs::remove_file(path) {
                tracing::warn!(path = %path.display(), %error, "failed to remove staged session file");
            }
        }
    }

    fn commit(staging: &Path, path: &Path) -> Result<()> {
        std::fs::rename(staging, path).with_path(path, "rename")
    }

    fn remove(path: &Path) -> Result<()> {
        match std::fs::remove_file(path) {
            Err(error) if error.kind() != ErrorKind::NotFound => {
                Err::<(), _>(error).with_path(path, "remove")
            }
            _ => Ok(()),
        }
    }
}

impl PatternStore for JsonDirectoryStore {
    fn load(&self) -> Option<(Pattern, StitchProgress)> {
        let pattern = Self::read(&self.pattern_path());
        let progress = Self::read(&self.progress_path());
        let pair = decode_pair(pattern.as_deref(), progress.as_deref());
        if pair.is_some() {
            tracing::debug!(dir = %self.dir.display(), "session loaded");
        }
        pair
    }

    fn save(&self, pattern: &Pattern, progress: &StitchProgress) -> Result<()> {
        let pattern_path = self.pattern_path();
        let progress_path = self.progress_path();
        let pattern_json = encode(pattern, &pattern_path)?;
        let progress_json = encode(progress, &progress_path)?;

        let pattern_staging = self.stage(&pattern_path, &pattern_json)?;
        let progress_staging = self
            .stage(&progress_path, &progress_json)
            .inspect_err(|_| Self::discard(&[pattern_staging.as_path()]))?;

        // Old progress goes first: an interrupted swap leaves a lone pattern, which load discards
        Self::remove(&progress_path)
            .inspect_err(|_| Self::discard(&[pattern_staging.as_path(), progress_staging.as_path()]))?;
        Self::commit(&pattern_staging, &pattern_path)?;
        Self::commit(&progress_staging, &progress_path)?;
        tracing::debug!(dir = %self.dir.display(), "session saved");
        Ok(())
    }

    fn save_progress(&self, progress: &StitchProgress) -> Result<()> {
        let progress_path = self.progress_path();
        let progress_json = encode(progress, &progress_path)?;
        let staging = self.stage(&progress_path, &progress_json)?;
        Self::commit(&staging, &progress_path)
    }

    fn clear(&self) -> Result<()> {
        Self::remove(&self.pattern_path())?;
        Self::remove(&self.progress_path())
    }
}

#[derive(Debug, Default)]
struct Records {
    pattern: Option<String>,
    progress: Option<String>,
}

/// In-process store holding the two serialized records
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Records>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with raw serialized records
    pub fn from_records(pattern: Option<String>, progress: Option<String>) -> Self {
        Self {
            records: Mutex::new(Records { pattern, progress }),
        }
    }

    /// Raw serialized records (pattern, progress)
    pub fn records(&self) -> (Option<String>, Option<String>) {
        let records = self.lock();
        (records.pattern.clone(), records.progress.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PatternStore for MemoryStore {
    fn load(&self) -> Option<(Pattern, StitchProgress)> {
        let records = self.lock();
        decode_pair(records.pattern.as_deref(), records.progress.as_deref())
    }

    fn save(&self, pattern: &Pattern, progress: &StitchProgress) -> Result<()> {
        let pattern_json = encode(pattern, Path::new(PATTERN_FILE))?;
        let progress_json = encode(progress, Path::new(PROGRESS_FILE))?;
        let mut records = self.lock();
        records.pattern = Some(pattern_json);
        records.progress = Some(progress_json);
        Ok(())
    }

    fn save_progress(&self, progress: &StitchProgress) -> Result<()> {
        let progress_json = encode(progress, Path::new(PROGRESS_FILE))?;
        self.lock().progress = Some(progress_json);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut records = self.lock();
        records.pattern = None;
        records.progress = None;
        Ok(())
    }
}
