// リネーム処理システムのモジュール
// 機能別ファイル構造によるアーキテクチャ

// コアモジュール
pub mod error; // エラー型定義
pub mod types; // データ構造定義

// 機能モジュール
pub mod collector; // 結果集計ステージ
pub mod config; // 設定管理
pub mod engine; // エンジン（検証・発見・実行）
pub mod pipeline; // Producer-Worker-Collectorオーケストレーション
pub mod producer; // 作業投入ステージ
pub mod reporting; // 進捗報告
pub mod tally; // 共有カウンター
pub mod worker; // 並列リネームワーカー

// 公開API - 各機能から再エクスポート
pub use config::{DefaultRenameConfig, RenameConfig, DEFAULT_MAX_CONCURRENT};
pub use engine::RenameEngine;
pub use error::{RenameError, RenameResult};
pub use pipeline::RenamePipeline;
pub use reporting::{ConsoleProgressReporter, NoOpProgressReporter, ProgressReporter};
pub use tally::OutcomeTally;
pub use types::{RenameOutcome, RenameSummary};
