use std::{io, path::{Path, PathBuf}};

use async_trait::async_trait;
use derive_more::Display;
use tokio::{fs, io::AsyncWriteExt};

#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Writes the asset bytes under a name derived from `slug` and the
    /// extension of `file_name`, returning the public path of the asset.
    async fn save(&self, slug: &str, file_name: &str, bytes: &[u8]) -> Result<String, MediaError>;

    /// Deletes the asset behind a path previously returned by `save`.
    /// Removing an asset that is already gone is not an error.
    async fn remove(&self, relative_path: &str) -> Result<(), MediaError>;
}

/// Filesystem-backed media store. Assets live flat under `root` and are
/// addressed publicly as `<public_base>/<slug>.<ext>`.
#[derive(Clone)]
pub struct FsMediaStore {
    root: PathBuf,
    public_base: String,
}

impl FsMediaStore {
    pub fn new(root: impl Into<PathBuf>, public_base: &str) -> Self {
        FsMediaStore {
            root: root.into(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    async fn save(&self, slug: &str, file_name: &str, bytes: &[u8]) -> Result<String, MediaError> {
        let asset_name = format!("{}.{}", slug, file_extension(file_name));

        fs::create_dir_all(&self.root).await.map_err(MediaError::Io)?;

        let path = self.root.join(&asset_name);
        if let Err(e) = write_all_to(&path, bytes).await {
            // A truncated asset must never survive a failed write.
            let _ = fs::remove_file(&path).await;
            return Err(MediaError::Io(e));
        }

        Ok(format!("{}/{}", self.public_base, asset_name))
    }

    async fn remove(&self, relative_path: &str) -> Result<(), MediaError> {
        let asset_name = relative_path
            .strip_prefix(self.public_base.as_str())
            .unwrap_or(relative_path)
            .trim_start_matches('/');

        if asset_name.is_empty() || asset_name.contains('/') || asset_name.contains("..") {
            return Err(MediaError::InvalidPath(relative_path.to_string()));
        }

        match fs::remove_file(self.root.join(asset_name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MediaError::Io(e)),
        }
    }
}

async fn write_all_to(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    Ok(())
}

/// Lowercased extension after the last `.` of the original file name.
/// Falls back to `bin` when the name carries no usable extension.
fn file_extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            ext.to_ascii_lowercase()
        }
        _ => "bin".to_string(),
    }
}

#[derive(Debug, Display)]
pub enum MediaError {
    #[display("I/O error: {_0}")]
    Io(io::Error),

    #[display("Invalid asset path: {_0}")]
    InvalidPath(String),
}
