//! Atomic content writer.
//!
//! ## Write protocol
//!
//! 1. Normalise line endings to LF.
//! 2. If the target exists, SHA-256 both contents — identical ⇒ skip,
//!    different ⇒ error unless `force`.
//! 3. Write to a `<path>.hyperhash.tmp` sibling.
//! 4. Rename to the final path (atomic on POSIX).

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, PublishError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — rendered content matches what is already on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    /// The target path this result refers to.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

fn sha256_hex(content: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(content);
    hex::encode(h.finalize())
}

/// Atomically write a rendered post, honouring overwrite and dry-run rules.
///
/// Conflict detection runs before the dry-run check so `--dry-run` surfaces
/// the same errors a real run would.
pub fn atomic_write(
    path: &Path,
    content: &str,
    force: bool,
    dry_run: bool,
) -> Result<WriteResult, PublishError> {
    let tmp = PathBuf::from(format!("{}.hyperhash.tmp", path.display()));
    atomic_write_with_tmp(path, content, force, dry_run, &tmp)
}

fn atomic_write_with_tmp(
    path: &Path,
    content: &str,
    force: bool,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, PublishError> {
    // Normalise line endings to LF before comparing and writing.
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    if path.exists() {
        let existing = std::fs::read(path).map_err(|e| io_err(path, e))?;
        if sha256_hex(&existing) == sha256_hex(content.as_bytes()) {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
        if !force {
            return Err(PublishError::TargetExists {
                path: path.to_path_buf(),
            });
        }
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
