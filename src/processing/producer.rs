// Producer - 作業チャンネルへの投入

use crate::storage::StorageItem;
use anyhow::Result;
use tokio::sync::mpsc;

/// 対象エントリを作業チャンネルへ順に送る
///
/// バッファが埋まっている間は送信側が待つ。ワーカー側のセマフォと
/// 合わせて、未処理タスクの積み上げを抑える。
pub fn spawn_producer(
    items: Vec<StorageItem>,
    work_tx: mpsc::Sender<StorageItem>,
) -> tokio::task::JoinHandle<Result<()>> {
    tokio::spawn(async move {
        for item in items {
            if work_tx.send(item).await.is_err() {
                // 受信側が全て終了している場合は打ち切り
                break;
            }
        }
        Ok(())
    })
}
