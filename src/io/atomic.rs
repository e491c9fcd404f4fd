//! All-or-nothing output files
//!
//! Each output is rendered into a temporary file next to its destination.
//! Only after every output rendered successfully are the temporary files
//! renamed over their targets, so a failed run leaves earlier outputs alone.
//!
//! A committed file gets the mode of the file it replaces. A new file gets
//! the mode a plain `File::create` would give it (0666 minus the umask).

use crate::types::QifError;
use log::debug;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Output rendered to a temporary file and waiting to be committed
#[derive(Debug)]
pub struct StagedFile {
    temp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// Destination this file will be moved to on commit
    pub fn target(&self) -> &Path {
        &self.target
    }
}

fn staging_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Create the staging file with the creation mode of an ordinary file
fn create_staging_file(target: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // The umask still applies on creation
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(staging_dir(target))
}

/// Render into a temporary file in the target's directory
///
/// The temporary file is removed if rendering fails or the returned value is
/// dropped without being committed.
pub fn stage<F>(target: &Path, render: F) -> Result<StagedFile, QifError>
where
    F: FnOnce(&mut dyn Write) -> Result<(), QifError>,
{
    let target_name = target.display().to_string();
    let mut temp =
        create_staging_file(target).map_err(|e| QifError::output(&target_name, e))?;

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        render(&mut writer).map_err(|e| e.with_output_path(&target_name))?;
        writer.flush().map_err(|e| QifError::output(&target_name, e))?;
    }

    debug!("Staged '{}' at '{}'", target_name, temp.path().display());
    Ok(StagedFile {
        temp,
        target: target.to_path_buf(),
    })
}

/// Move every staged file onto its target, in order
pub fn commit_all(staged: Vec<StagedFile>) -> Result<(), QifError> {
    for file in staged {
        let target_name = file.target.display().to_string();
        if let Ok(existing) = fs::metadata(&file.target) {
            file.temp
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| QifError::output(&target_name, e))?;
        }
        file.temp
            .persist(&file.target)
            .map_err(|e| QifError::output(&target_name, e.error))?;
        debug!("Committed '{}'", target_name);
    }
    Ok(())
}
