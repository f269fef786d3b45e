use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::{Error, Result};

/// Sibling path the document is staged in before it replaces the target.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replaces the whole file at `path` with `contents`, creating parent directories as needed.
/// Readers either see the previous file or the new one, never a partial write.
pub async fn write_replace(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io(parent, e))?;
    }

    let staging = staging_path(path);
    fs::write(&staging, contents)
        .await
        .map_err(|e| Error::io(&staging, e))?;
    if let Err(e) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(Error::io(path, e));
    }
    debug!("Wrote {} bytes to {path:?}", contents.len());
    Ok(())
}
