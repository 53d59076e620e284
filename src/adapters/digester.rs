use crate::domain::HashAlgorithm;
use crate::error::Result;
use crate::ports::DigestPort;
use sha1::{Digest, Sha1};
use sha2::Sha256;

/// Stateless digest provider covering every supported algorithm. Output is
/// uppercase hex with no separators.
pub struct MultiAlgorithmDigester;

impl MultiAlgorithmDigester {
    pub fn new() -> Self {
        Self
    }
}

impl DigestPort for MultiAlgorithmDigester {
    fn digest_block(&self, algorithm: HashAlgorithm, block: &[u8]) -> Result<String> {
        let hex = match algorithm {
            HashAlgorithm::Md5 => hex::encode_upper(md5::compute(block).0),
            HashAlgorithm::Sha1 => hex::encode_upper(Sha1::digest(block)),
            HashAlgorithm::Sha256 => hex::encode_upper(Sha256::digest(block)),
        };
        Ok(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(algorithm: HashAlgorithm, block: &[u8]) -> String {
        MultiAlgorithmDigester::new()
            .digest_block(algorithm, block)
            .unwrap()
    }

    #[test]
    fn known_answers() {
        assert_eq!(
            digest(HashAlgorithm::Md5, b"hello"),
            "5D41402ABC4B2A76B9719D911017C592"
        );
        assert_eq!(
            digest(HashAlgorithm::Sha1, b"hello"),
            "AAF4C61DDCC5E8A2DABEDE0F3B482CD9AEA9434D"
        );
        assert_eq!(
            digest(HashAlgorithm::Sha256, b"hello"),
            "2CF24DBA5FB0A30E26E83B2AC5B9E29E1B161E5C1FA7425E73043362938B9824"
        );
    }

    #[test]
    fn hex_length_matches_algorithm_width() {
        for algorithm in [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256] {
            let hex = digest(algorithm, &[0u8; 512]);
            assert_eq!(hex.len(), algorithm.digest_len() * 2);
            assert!(hex.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn deterministic_for_identical_blocks() {
        let block = [0xABu8; 4096];
        for algorithm in [HashAlgorithm::Md5, HashAlgorithm::Sha1, HashAlgorithm::Sha256] {
            assert_eq!(digest(algorithm, &block), digest(algorithm, &block));
        }
    }
}
