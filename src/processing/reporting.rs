// 進捗報告・結果出力

use async_trait::async_trait;

/// 進捗報告の抽象化トレイト
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, total_files: usize);

    /// リネーム成功の報告（旧名 → 新名）
    async fn report_renamed(&self, old_name: &str, new_name: &str);

    /// リネーム失敗の報告
    async fn report_error(&self, old_name: &str, cause: &str);

    /// 処理完了時の報告
    async fn report_completed(&self, renamed: usize, failures: usize);
}

/// コンソール出力による進捗報告実装
///
/// 1行単位のログプロトコル:
/// `Renamed: <old> -> <new>` / `Rename failed: <cause>` /
/// `Complete. Success: <n>, Failures: <m>`
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, _total_files: usize) {
        // スキップされたファイルと同様、開始時のノイズは出さない
    }

    async fn report_renamed(&self, old_name: &str, new_name: &str) {
        if !self.quiet {
            println!("Renamed: {old_name} -> {new_name}");
        }
    }

    async fn report_error(&self, _old_name: &str, cause: &str) {
        if !self.quiet {
            eprintln!("Rename failed: {cause}");
        }
    }

    async fn report_completed(&self, renamed: usize, failures: usize) {
        if !self.quiet {
            println!("Complete. Success: {renamed}, Failures: {failures}");
        }
    }
}

/// 何もしない進捗報告実装（テスト用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_files: usize) {
        // 何もしない
    }

    async fn report_renamed(&self, _old_name: &str, _new_name: &str) {
        // 何もしない
    }

    async fn report_error(&self, _old_name: &str, _cause: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _renamed: usize, _failures: usize) {
        // 何もしない
    }
}
