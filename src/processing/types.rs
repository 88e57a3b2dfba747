// リネーム処理のデータ構造定義

use super::error::RenameError;

/// 1ファイル分のリネーム結果
#[derive(Debug)]
pub enum RenameOutcome {
    /// リネーム成功（旧名 → 新名）
    Success { old_name: String, new_name: String },
    /// リネーム失敗。原因を型付きエラーとして保持する
    Error {
        old_name: String,
        error: RenameError,
    },
}

impl RenameOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct RenameSummary {
    /// ディスパッチされた対象ファイル数
    pub total_files: usize,
    /// リネーム成功数
    pub renamed_files: usize,
    /// リネーム失敗数
    pub error_count: usize,
    /// 総処理時間（ミリ秒）
    pub total_processing_time_ms: u64,
}

impl RenameSummary {
    /// 全タスク完了後の不変条件: success + failure == total
    pub fn is_consistent(&self) -> bool {
        self.renamed_files + self.error_count == self.total_files
    }
}
