pub mod cli;
pub mod identifier;
pub mod processing;
pub mod storage;

use identifier::HexIdentifierGenerator;
use processing::{
    ConsoleProgressReporter, DefaultRenameConfig, RenameConfig, RenameEngine, RenameResult,
    RenameSummary,
};
use storage::local::LocalStorageBackend;

/// デフォルト構成でディレクトリを一括リネームする高レベルAPI
///
/// ローカルファイルシステム + OS乱数 + コンソール出力の組み合わせ。
/// 個別の依存を差し替えたい場合は`RenameEngine::new`を直接使う。
pub async fn anonymize_directory(
    directory: &str,
    config: DefaultRenameConfig,
) -> RenameResult<RenameSummary> {
    let engine = RenameEngine::new(
        HexIdentifierGenerator::new(config.identifier_byte_length()),
        LocalStorageBackend::new(),
        config,
        ConsoleProgressReporter::new(),
    );

    engine.process_directory(directory).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_anonymize_empty_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let temp_path = temp_dir.path().to_str().unwrap();

        let summary = anonymize_directory(temp_path, DefaultRenameConfig::default())
            .await
            .unwrap();

        assert_eq!(summary.total_files, 0);
        assert_eq!(summary.renamed_files, 0);
        assert_eq!(summary.error_count, 0);
    }

    #[tokio::test]
    async fn test_anonymize_missing_directory_is_error() {
        let result =
            anonymize_directory("/no/such/place", DefaultRenameConfig::default()).await;

        assert!(matches!(
            result,
            Err(processing::RenameError::DirectoryAccess { .. })
        ));
    }
}
