use clap::Parser;

use media_anonymizer::{
    cli::Cli,
    identifier::HexIdentifierGenerator,
    processing::{ConsoleProgressReporter, DefaultRenameConfig, RenameConfig, RenameEngine},
    storage::local::LocalStorageBackend,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = DefaultRenameConfig::default()
        .with_max_concurrent(cli.max_concurrent)
        .with_id_byte_length(cli.id_bytes);

    let reporter = if cli.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    // ジェネレーターの幅は設定値から構築し、両者が食い違わないようにする
    let engine = RenameEngine::new(
        HexIdentifierGenerator::new(config.identifier_byte_length()),
        LocalStorageBackend::new(),
        config,
        reporter,
    );

    // 個別ファイルの失敗は部分失敗として終了コード0のまま。
    // セットアップ段階の失敗（ディレクトリ検証・列挙・設定）のみ非0で終了する
    if let Err(error) = engine
        .process_directory(&cli.directory.to_string_lossy())
        .await
    {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
