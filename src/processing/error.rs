// リネーム処理専用のカスタムエラー型定義

use thiserror::Error;

/// リネーム処理固有のエラー型
#[derive(Error, Debug)]
pub enum RenameError {
    /// ディレクトリ検証・列挙の失敗。実行全体を中断する致命的エラー
    #[error("Directory access error: {path} - {source}")]
    DirectoryAccess {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    /// エントロピー源の失敗。該当タスクのみ失敗扱いで実行は継続する
    #[error("Identifier generation failed: {source}")]
    EntropySource {
        #[source]
        source: anyhow::Error,
    },

    /// ファイルシステムのリネーム失敗。該当タスクのみ失敗扱い
    #[error("Filesystem error: {file_name} - {source}")]
    Filesystem {
        file_name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Channel error: {message}")]
    Channel { message: String },

    #[error("Task error: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl RenameError {
    /// ディレクトリアクセスエラーの作成
    pub fn directory_access(path: impl Into<String>, source: anyhow::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// エントロピー源エラーの作成
    pub fn entropy_source(source: anyhow::Error) -> Self {
        Self::EntropySource { source }
    }

    /// ファイルシステムエラーの作成
    pub fn filesystem(file_name: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Filesystem {
            file_name: file_name.into(),
            source,
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::Channel {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::Task { source }
    }

    /// 実行全体を中断すべきエラーかどうか
    ///
    /// ディスパッチ前のセットアップ段階で起きるものだけが致命的。
    /// 個々のファイルの失敗は正常な部分失敗として扱う。
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::DirectoryAccess { .. } | Self::Configuration { .. } => true,
            Self::Channel { .. } | Self::Task { .. } => true,
            Self::EntropySource { .. } | Self::Filesystem { .. } => false,
        }
    }
}

impl From<tokio::task::JoinError> for RenameError {
    fn from(error: tokio::task::JoinError) -> Self {
        RenameError::Task { source: error }
    }
}

/// リネーム処理の結果型
pub type RenameResult<T> = std::result::Result<T, RenameError>;
