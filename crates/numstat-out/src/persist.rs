//! Result-file persistence

use numstat_core::NumstatError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `contents` to `dir/file_name`, creating `dir` if needed.
/// Overwrites an existing file.
pub fn write_report(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf, NumstatError> {
    std::fs::create_dir_all(dir).map_err(|e| NumstatError::io(dir.display().to_string(), e))?;

    let path = dir.join(file_name);
    std::fs::write(&path, contents).map_err(|e| NumstatError::io(path.display().to_string(), e))?;

    info!(path = %path.display(), bytes = contents.len(), "wrote result file");
    Ok(path)
}
