use anyhow::{Context, Result};
use mockall::automock;
use rand::RngCore;

/// 識別子生成のデフォルトバイト長（128ビット）
pub const DEFAULT_ID_BYTE_LENGTH: usize = 16;

/// 識別子生成バックエンドのトレイト
#[automock]
pub trait IdentifierBackend: Send + Sync {
    /// 新しいファイル名用識別子を生成する
    ///
    /// 出力は小文字16進文字列。衝突回避はランダム幅のみに依存し、
    /// 発行済み識別子の台帳は持たない。
    fn generate(&self) -> Result<String>;
}

/// OS CSPRNGによる16進識別子ジェネレーター
///
/// エントロピー源が失敗した場合はエラーを伝播する。
/// 弱い乱数源へのフォールバックはしない。
#[derive(Debug, Clone)]
pub struct HexIdentifierGenerator {
    byte_length: usize,
}

impl Default for HexIdentifierGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_BYTE_LENGTH)
    }
}

impl HexIdentifierGenerator {
    pub fn new(byte_length: usize) -> Self {
        Self { byte_length }
    }

    pub fn byte_length(&self) -> usize {
        self.byte_length
    }
}

impl IdentifierBackend for HexIdentifierGenerator {
    fn generate(&self) -> Result<String> {
        let mut bytes = vec![0_u8; self.byte_length];
        rand::rngs::OsRng
            .try_fill_bytes(&mut bytes)
            .context("Failed to read OS randomness")?;

        // 16バイトの場合はUUIDv4のversion/variantビットを立てて
        // 標準128ビットレイアウトと互換の見た目にする（一意性には無関係）
        if self.byte_length == DEFAULT_ID_BYTE_LENGTH {
            bytes[6] = (bytes[6] & 0x0f) | 0x40;
            bytes[8] = (bytes[8] & 0x3f) | 0x80;
        }

        Ok(hex::encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_length_16_bytes() {
        let generator = HexIdentifierGenerator::new(16);
        let id = generator.generate().unwrap();
        assert_eq!(id.len(), 32);
    }

    #[test]
    fn test_generate_length_8_bytes() {
        let generator = HexIdentifierGenerator::new(8);
        let id = generator.generate().unwrap();
        assert_eq!(id.len(), 16);
    }

    #[test]
    fn test_generate_is_lowercase_hex() {
        let generator = HexIdentifierGenerator::default();
        let id = generator.generate().unwrap();

        assert!(id
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_uuid_version_and_variant_bits() {
        let generator = HexIdentifierGenerator::new(16);

        for _ in 0..100 {
            let id = generator.generate().unwrap();
            let bytes = hex::decode(&id).unwrap();

            assert_eq!(bytes[6] & 0xf0, 0x40, "version nibble should be 4");
            assert_eq!(bytes[8] & 0xc0, 0x80, "variant bits should be 10");
        }
    }

    #[test]
    fn test_generate_no_uuid_bits_for_8_bytes() {
        let generator = HexIdentifierGenerator::new(8);

        // 8バイトではビット整形は行われない。長さだけ検証する
        let id = generator.generate().unwrap();
        assert_eq!(hex::decode(&id).unwrap().len(), 8);
    }

    #[test]
    fn test_generate_no_duplicates() {
        let generator = HexIdentifierGenerator::default();

        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = generator.generate().unwrap();
            assert!(seen.insert(id), "Generated identifiers must not repeat");
        }
    }

    #[test]
    fn test_default_byte_length() {
        let generator = HexIdentifierGenerator::default();
        assert_eq!(generator.byte_length(), DEFAULT_ID_BYTE_LENGTH);
    }
}
