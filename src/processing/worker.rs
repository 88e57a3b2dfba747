// 並列ワーカー機能

use super::error::RenameError;
use super::types::RenameOutcome;
use crate::identifier::IdentifierBackend;
use crate::storage::{StorageBackend, StorageItem};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 単一ファイルのリネーム処理
///
/// 識別子生成 → 新ファイル名構築（拡張子は小文字に正規化）→
/// アトミックなリネーム1回のみ。リトライはしない。
pub async fn rename_single_file<G, S>(
    generator: &G,
    storage: &S,
    directory: &str,
    item: &StorageItem,
) -> RenameOutcome
where
    G: IdentifierBackend,
    S: StorageBackend,
{
    let identifier = match generator.generate() {
        Ok(id) => id,
        Err(source) => {
            return RenameOutcome::Error {
                old_name: item.name.clone(),
                error: RenameError::entropy_source(source),
            };
        }
    };

    let new_name = match &item.extension {
        Some(ext) => format!("{identifier}.{}", ext.to_lowercase()),
        None => identifier,
    };

    let old_path = Path::new(directory).join(&item.name);
    let new_path = Path::new(directory).join(&new_name);

    match storage
        .rename_item(&old_path.to_string_lossy(), &new_path.to_string_lossy())
        .await
    {
        Ok(()) => RenameOutcome::Success {
            old_name: item.name.clone(),
            new_name,
        },
        Err(source) => RenameOutcome::Error {
            old_name: item.name.clone(),
            error: RenameError::filesystem(&item.name, source),
        },
    }
}

/// 単一ワーカー
///
/// 共有の作業チャンネルからエントリを取り出し、セマフォで同時実行数を
/// 制御しながらリネームを実行する。結果は結果チャンネルへ送る。
pub fn spawn_single_worker<G, S>(
    generator: Arc<G>,
    storage: Arc<S>,
    directory: String,
    work_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<StorageItem>>>,
    result_tx: mpsc::Sender<RenameOutcome>,
    semaphore: Arc<tokio::sync::Semaphore>,
) -> tokio::task::JoinHandle<Result<()>>
where
    G: IdentifierBackend + 'static,
    S: StorageBackend + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次の作業を取得
            let item = {
                let mut rx = work_rx.lock().await;
                match rx.recv().await {
                    Some(item) => item,
                    None => break, // チャンネル終了
                }
            };

            // セマフォで同時実行数制御
            let _permit = semaphore
                .acquire()
                .await
                .map_err(|e| anyhow::anyhow!("Semaphore error: {e}"))?;

            let outcome =
                rename_single_file(generator.as_ref(), storage.as_ref(), &directory, &item).await;

            // 結果送信
            if (result_tx.send(outcome).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
        }
        Ok(())
    })
}

/// 並列ワーカープール
pub fn spawn_workers<G, S>(
    generator: Arc<G>,
    storage: Arc<S>,
    directory: String,
    work_rx: mpsc::Receiver<StorageItem>,
    result_tx: mpsc::Sender<RenameOutcome>,
    semaphore: Arc<tokio::sync::Semaphore>,
    worker_count: usize,
) -> Vec<tokio::task::JoinHandle<Result<()>>>
where
    G: IdentifierBackend + 'static,
    S: StorageBackend + 'static,
{
    let work_rx = Arc::new(tokio::sync::Mutex::new(work_rx));
    let mut handles = Vec::new();

    for _ in 0..worker_count {
        let handle = spawn_single_worker(
            generator.clone(),
            storage.clone(),
            directory.clone(),
            work_rx.clone(),
            result_tx.clone(),
            semaphore.clone(),
        );
        handles.push(handle);
    }

    handles
}
