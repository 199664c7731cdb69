use crate::base::algorithms::sanitize_filename;
use crate::base::traits::DownloadSink;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes downloads into a directory on disk.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    create_dirs: bool,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            create_dirs: true,
        }
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.dir.join(sanitize_filename(filename))
    }
}

#[async_trait]
impl DownloadSink for FileSink {
    async fn download(&self, filename: &str, body: &str) -> Result<()> {
        if self.create_dirs {
            tokio::fs::create_dir_all(&self.dir).await?;
        }
        let path = self.target_path(filename);
        tokio::fs::write(&path, body).await?;
        tracing::info!(path = %path.display(), bytes = body.len(), "saved download");
        Ok(())
    }
}
