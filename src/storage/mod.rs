use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod local;

/// ストレージ内のアイテムを表す構造体
///
/// 列挙時点のスナップショット。読み取り専用で扱う。
#[derive(Debug, Clone)]
pub struct StorageItem {
    /// アイテムの識別子（ローカルならフルパス）
    pub id: String,
    /// アイテム名（ファイル名）
    pub name: String,
    /// アイテムがディレクトリかどうか
    pub is_directory: bool,
    /// 拡張子（あれば、ドットなし）
    pub extension: Option<String>,
}

/// ストレージバックエンドのトレイト
#[automock]
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// 対象がアクセス可能なディレクトリであることを検証する
    async fn validate_directory(&self, prefix: &str) -> Result<()>;

    /// ディレクトリ直下のアイテムをリストする（再帰なし）
    async fn list_items(&self, prefix: &str) -> Result<Vec<StorageItem>>;

    /// アイテムをアトミックにリネームする（コピーなし、1回のみ）
    async fn rename_item(&self, old_id: &str, new_id: &str) -> Result<()>;

    /// リネーム対象のメディアファイルかどうかを判定
    ///
    /// ディレクトリはfalse。拡張子を小文字化してサポート集合と照合する。
    /// 拡張子なしや未対応の拡張子は単にfalse（エラーなし）。
    fn is_media_file(&self, item: &StorageItem) -> bool {
        if item.is_directory {
            return false;
        }

        if let Some(ext) = &item.extension {
            let ext_lower = ext.to_lowercase();
            matches!(
                ext_lower.as_str(),
                // 画像フォーマット
                "jpg" | "jpeg" | "png" | "gif" | "bmp" | "webp" | "tiff" | "svg"
                // 動画フォーマット
                | "mp4" | "mov" | "avi" | "mkv" | "flv" | "wmv" | "webm" | "mpeg" | "mpg" | "3gp"
            )
        } else {
            false
        }
    }
}
