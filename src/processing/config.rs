// 設定管理

use crate::identifier::DEFAULT_ID_BYTE_LENGTH;

/// 同時実行リネームタスク数のデフォルト上限
///
/// 同時に開くファイルハンドル数とファイルシステム負荷を抑えるための値。
pub const DEFAULT_MAX_CONCURRENT: usize = 10;

/// リネーム処理の設定を抽象化するトレイト
pub trait RenameConfig: Send + Sync {
    /// 最大同時実行タスク数を取得
    fn max_concurrent_tasks(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 識別子のバイト長を取得
    fn identifier_byte_length(&self) -> usize;
}

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultRenameConfig {
    max_concurrent: usize,
    buffer_size: usize,
    id_byte_length: usize,
}

impl DefaultRenameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_id_byte_length(mut self, id_byte_length: usize) -> Self {
        self.id_byte_length = id_byte_length;
        self
    }
}

impl Default for DefaultRenameConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            buffer_size: 100,
            id_byte_length: DEFAULT_ID_BYTE_LENGTH,
        }
    }
}

impl RenameConfig for DefaultRenameConfig {
    fn max_concurrent_tasks(&self) -> usize {
        self.max_concurrent
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn identifier_byte_length(&self) -> usize {
        self.id_byte_length
    }
}
