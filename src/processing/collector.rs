// Result Collector - 結果の集計と報告

use super::reporting::ProgressReporter;
use super::tally::OutcomeTally;
use super::types::RenameOutcome;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 結果チャンネルを排出し、タリー更新と1行ログ出力を行う
///
/// タリーのロックはインクリメントの間だけ保持する。報告の
/// await中にロックを持ち越さない。
pub fn spawn_result_collector<R>(
    mut result_rx: mpsc::Receiver<RenameOutcome>,
    tally: OutcomeTally,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<Result<()>>
where
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        while let Some(outcome) = result_rx.recv().await {
            match outcome {
                RenameOutcome::Success { old_name, new_name } => {
                    tally.record_success();
                    reporter.report_renamed(&old_name, &new_name).await;
                }
                RenameOutcome::Error { old_name, error } => {
                    tally.record_failure();
                    reporter.report_error(&old_name, &error.to_string()).await;
                }
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::error::RenameError;
    use crate::processing::reporting::NoOpProgressReporter;

    #[tokio::test]
    async fn test_collector_tallies_mixed_outcomes() {
        let (result_tx, result_rx) = mpsc::channel::<RenameOutcome>(10);
        let tally = OutcomeTally::new();

        let handle = spawn_result_collector(
            result_rx,
            tally.clone(),
            Arc::new(NoOpProgressReporter::new()),
        );

        result_tx
            .send(RenameOutcome::Success {
                old_name: "a.jpg".to_string(),
                new_name: "0123abcd.jpg".to_string(),
            })
            .await
            .unwrap();
        result_tx
            .send(RenameOutcome::Error {
                old_name: "b.jpg".to_string(),
                error: RenameError::filesystem("b.jpg", anyhow::anyhow!("denied")),
            })
            .await
            .unwrap();
        result_tx
            .send(RenameOutcome::Success {
                old_name: "c.mp4".to_string(),
                new_name: "4567ef01.mp4".to_string(),
            })
            .await
            .unwrap();
        drop(result_tx);

        handle.await.unwrap().unwrap();
        assert_eq!(tally.snapshot(), (2, 1));
    }

    #[tokio::test]
    async fn test_collector_empty_channel() {
        let (result_tx, result_rx) = mpsc::channel::<RenameOutcome>(1);
        let tally = OutcomeTally::new();

        let handle = spawn_result_collector(
            result_rx,
            tally.clone(),
            Arc::new(NoOpProgressReporter::new()),
        );

        drop(result_tx);
        handle.await.unwrap().unwrap();
        assert_eq!(tally.snapshot(), (0, 0));
    }
}
