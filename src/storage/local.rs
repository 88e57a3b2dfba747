use super::{StorageBackend, StorageItem};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;

/// ローカルファイルシステム用のストレージバックエンド
#[derive(Clone)]
pub struct LocalStorageBackend;

impl Default for LocalStorageBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn path_to_storage_item(path: &Path) -> Result<StorageItem> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        let extension = if metadata.is_file() {
            path.extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_string())
        } else {
            None
        };

        Ok(StorageItem {
            id: path.to_string_lossy().to_string(),
            name,
            is_directory: metadata.is_dir(),
            extension,
        })
    }
}

#[async_trait]
impl StorageBackend for LocalStorageBackend {
    async fn validate_directory(&self, prefix: &str) -> Result<()> {
        let metadata = tokio::fs::metadata(prefix)
            .await
            .with_context(|| format!("Path inaccessible: {prefix}"))?;

        if !metadata.is_dir() {
            anyhow::bail!("Path is not a directory: {prefix}");
        }

        Ok(())
    }

    async fn list_items(&self, prefix: &str) -> Result<Vec<StorageItem>> {
        let path = Path::new(prefix);
        let mut items = Vec::new();

        // 非同期でディレクトリを読み込む
        let mut entries = tokio::fs::read_dir(path)
            .await
            .with_context(|| format!("Failed to read directory: {prefix}"))?;

        while let Some(entry) = entries.next_entry().await? {
            if let Ok(item) = Self::path_to_storage_item(&entry.path()) {
                items.push(item);
            }
        }

        Ok(items)
    }

    async fn rename_item(&self, old_id: &str, new_id: &str) -> Result<()> {
        tokio::fs::rename(old_id, new_id)
            .await
            .with_context(|| format!("Failed to rename: {old_id} -> {new_id}"))?;
        Ok(())
    }
}
