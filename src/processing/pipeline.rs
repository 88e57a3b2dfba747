// Pipeline - Producer-Worker-Collector パイプライン
// オーケストレーションと全タスク完了待ち

use super::collector::spawn_result_collector;
use super::config::RenameConfig;
use super::producer::spawn_producer;
use super::reporting::ProgressReporter;
use super::tally::OutcomeTally;
use super::types::RenameSummary;
use super::worker::spawn_workers;
use crate::identifier::IdentifierBackend;
use crate::storage::{StorageBackend, StorageItem};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたパイプライン
pub struct RenamePipeline<G, S> {
    generator: Arc<G>,
    storage: Arc<S>,
}

impl<G, S> RenamePipeline<G, S>
where
    G: IdentifierBackend + 'static,
    S: StorageBackend + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(generator: Arc<G>, storage: Arc<S>) -> Self {
        Self { generator, storage }
    }

    /// 対象エントリ群を並列リネームする
    ///
    /// 全ステージ（producer、worker pool、collector)のjoinを終えてから
    /// タリーを読む。タスク間の処理順序は保証しない。
    pub async fn execute<C, R>(
        &self,
        directory: &str,
        items: Vec<StorageItem>,
        config: &C,
        reporter: Arc<R>,
    ) -> Result<RenameSummary>
    where
        C: RenameConfig,
        R: ProgressReporter + 'static,
    {
        let start_time = Instant::now();

        // Producer-Workerチャンネル構築
        let (work_tx, work_rx) = mpsc::channel::<StorageItem>(config.channel_buffer_size());
        let (result_tx, result_rx) = mpsc::channel(config.channel_buffer_size());

        // 同期プリミティブ
        let semaphore = Arc::new(tokio::sync::Semaphore::new(config.max_concurrent_tasks()));
        let tally = OutcomeTally::new();

        let total_files = items.len();
        reporter.report_started(total_files).await;

        // Producer起動
        let producer_handle = spawn_producer(items, work_tx);

        // Worker Pool起動
        let worker_handles = spawn_workers(
            self.generator.clone(),
            self.storage.clone(),
            directory.to_string(),
            work_rx,
            result_tx.clone(),
            semaphore,
            config.max_concurrent_tasks(),
        );

        // Result Collector起動
        let collector_handle =
            spawn_result_collector(result_rx, tally.clone(), reporter.clone());

        // Producer完了を待機
        producer_handle.await??;

        // Worker完了を待機
        for handle in worker_handles {
            handle.await??;
        }

        // result_txを閉じてCollectorに完了を通知
        drop(result_tx);

        // Collector完了を待機
        collector_handle.await??;

        // 完了報告（全タスクjoin後に一度だけ読む）
        let (renamed_files, error_count) = tally.snapshot();
        reporter.report_completed(renamed_files, error_count).await;

        Ok(RenameSummary {
            total_files,
            renamed_files,
            error_count,
            total_processing_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
