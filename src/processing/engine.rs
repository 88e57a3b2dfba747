// RenameEngine - 依存性注入によるリネームエンジン
// 全ての依存関係がコンストラクタで注入される

use super::config::RenameConfig;
use super::error::{RenameError, RenameResult};
use super::pipeline::RenamePipeline;
use super::reporting::ProgressReporter;
use super::types::RenameSummary;
use crate::identifier::IdentifierBackend;
use crate::storage::{StorageBackend, StorageItem};
use std::sync::Arc;

/// 依存性注入によるリネームエンジン
///
/// 実行全体の状態遷移を管理する:
/// 検証 → 列挙 → フィルタ → ディスパッチ → 全完了待ち → 最終報告。
/// 検証・列挙の失敗のみ致命的で、ディスパッチ後の失敗は部分失敗として
/// タリーに集計される。
pub struct RenameEngine<G, S, C, R> {
    generator: G,
    storage: S,
    config: C,
    reporter: R,
}

impl<G, S, C, R> RenameEngine<G, S, C, R>
where
    G: IdentifierBackend + 'static,
    S: StorageBackend + 'static,
    C: RenameConfig,
    R: ProgressReporter + 'static,
{
    /// 新しいエンジンを作成（コンストラクタインジェクション）
    pub fn new(generator: G, storage: S, config: C, reporter: R) -> Self {
        Self {
            generator,
            storage,
            config,
            reporter,
        }
    }

    /// 指定されたディレクトリ内のメディアファイルを一括リネームする
    pub async fn process_directory(&self, directory: &str) -> RenameResult<RenameSummary>
    where
        G: Clone,
        S: Clone,
        R: Clone,
    {
        let items = self.discover_media_files(directory).await?;

        // Pipelineが並列実行でArcを必要とするため、ここで参照からArc<T>を作成
        let pipeline = RenamePipeline::new(
            Arc::new(self.generator.clone()),
            Arc::new(self.storage.clone()),
        );

        pipeline
            .execute(
                directory,
                items,
                &self.config,
                Arc::new(self.reporter.clone()),
            )
            .await
            .map_err(|e| RenameError::channel(format!("Pipeline execution error: {e}")))
    }

    /// ディレクトリを検証し、対象メディアファイルを発見する
    ///
    /// 対象外のエントリ（ディレクトリ、未対応拡張子）はログなしで捨てる。
    async fn discover_media_files(&self, directory: &str) -> RenameResult<Vec<StorageItem>> {
        // 設定検証
        if self.config.max_concurrent_tasks() == 0 {
            return Err(RenameError::configuration(
                "max concurrent tasks must be at least 1",
            ));
        }

        if self.config.channel_buffer_size() == 0 {
            return Err(RenameError::configuration(
                "channel buffer size must be at least 1",
            ));
        }

        // 退化した識別子幅は衝突名への上書きにつながるため、ここで拒否する
        let id_byte_length = self.config.identifier_byte_length();
        if id_byte_length != 8 && id_byte_length != 16 {
            return Err(RenameError::configuration(
                "identifier byte length must be 8 or 16",
            ));
        }

        // ディレクトリ検証はディスパッチ前。失敗は実行全体の中断
        self.storage
            .validate_directory(directory)
            .await
            .map_err(|e| RenameError::directory_access(directory, e))?;

        let items = self
            .storage
            .list_items(directory)
            .await
            .map_err(|e| RenameError::directory_access(directory, e))?;

        let media_files = items
            .into_iter()
            .filter(|item| self.storage.is_media_file(item))
            .collect();

        Ok(media_files)
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }
}
