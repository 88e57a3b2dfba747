use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "media_anonymizer")]
#[command(about = "Bulk-rename media files to random collision-resistant identifiers")]
#[command(version)]
pub struct Cli {
    /// Target directory (defaults to the current working directory)
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Maximum number of concurrent rename operations
    #[arg(short = 'c', long, default_value_t = crate::processing::DEFAULT_MAX_CONCURRENT)]
    pub max_concurrent: usize,

    /// Random bytes per identifier (16 recommended, 8 for shorter names)
    #[arg(long, default_value_t = crate::identifier::DEFAULT_ID_BYTE_LENGTH, value_parser = parse_id_bytes)]
    pub id_bytes: usize,

    /// Suppress per-file output
    #[arg(short, long)]
    pub quiet: bool,
}

/// 識別子幅はサポートする2値のみ受け付ける
fn parse_id_bytes(value: &str) -> Result<usize, String> {
    let bytes: usize = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;

    if bytes == 8 || bytes == 16 {
        Ok(bytes)
    } else {
        Err("identifier byte length must be 8 or 16".to_string())
    }
}
