// 成功・失敗カウンターの共有集計

use std::sync::{Arc, Mutex};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Counts {
    success: usize,
    failure: usize,
}

/// 実行単位の共有タリー
///
/// 実行ごとに1インスタンスを作り、各タスク完了時に排他ロック下で
/// 加算する。ロックはインクリメントの間だけ保持し、awaitをまたがない。
#[derive(Debug, Clone, Default)]
pub struct OutcomeTally {
    counts: Arc<Mutex<Counts>>,
}

impl OutcomeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// 成功を1件記録する
    pub fn record_success(&self) {
        let mut counts = self.counts.lock().unwrap();
        counts.success += 1;
    }

    /// 失敗を1件記録する
    pub fn record_failure(&self) {
        let mut counts = self.counts.lock().unwrap();
        counts.failure += 1;
    }

    /// 現在の (成功数, 失敗数) を取得する
    ///
    /// 最終報告には全タスクのjoin後に一度だけ読むこと。
    pub fn snapshot(&self) -> (usize, usize) {
        let counts = self.counts.lock().unwrap();
        (counts.success, counts.failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_starts_at_zero() {
        let tally = OutcomeTally::new();
        assert_eq!(tally.snapshot(), (0, 0));
    }

    #[test]
    fn test_tally_records() {
        let tally = OutcomeTally::new();

        tally.record_success();
        tally.record_success();
        tally.record_failure();

        assert_eq!(tally.snapshot(), (2, 1));
    }

    #[test]
    fn test_tally_clone_shares_counts() {
        let tally = OutcomeTally::new();
        let shared = tally.clone();

        shared.record_success();
        tally.record_failure();

        assert_eq!(tally.snapshot(), (1, 1));
        assert_eq!(shared.snapshot(), (1, 1));
    }

    #[tokio::test]
    async fn test_tally_concurrent_increments() {
        let tally = OutcomeTally::new();

        let mut handles = Vec::new();
        for i in 0..100 {
            let tally = tally.clone();
            handles.push(tokio::spawn(async move {
                if i % 4 == 0 {
                    tally.record_failure();
                } else {
                    tally.record_success();
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let (success, failure) = tally.snapshot();
        assert_eq!(success, 75);
        assert_eq!(failure, 25);
        assert_eq!(success + failure, 100);
    }
}
