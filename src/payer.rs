//! Fee payer keypair construction
//!
//! The normal mode is a fresh ephemeral keypair that lives only for the
//! process run. A fixed 32-byte seed can be supplied instead, which makes the
//! signed output byte-for-byte reproducible.

use solana_sdk::signature::Keypair;
use solana_sdk::signer::keypair::keypair_from_seed;

use crate::errors::{BuilderError, BuilderResult};

/// Required length of a keypair seed in bytes
pub const SEED_LEN: usize = 32;

/// Generate a fresh ephemeral fee payer
pub fn ephemeral() -> Keypair {
    Keypair::new()
}

/// Build a deterministic fee payer from 32 seed bytes
pub fn from_seed(seed: &[u8]) -> BuilderResult<Keypair> {
    if seed.len() != SEED_LEN {
        return Err(BuilderError::InvalidSeed(format!(
            "expected {} seed bytes, got {}",
            SEED_LEN,
            seed.len()
        )));
    }

    keypair_from_seed(seed).map_err(|e| BuilderError::InvalidSeed(e.to_string()))
}

/// Build a deterministic fee payer from a base58-encoded seed string
pub fn from_base58_seed(encoded: &str) -> BuilderResult<Keypair> {
    let seed = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| BuilderError::InvalidSeed(e.to_string()))?;

    from_seed(&seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::Signer;

    #[test]
    fn test_seeded_payer_is_deterministic() {
        let seed = [7u8; SEED_LEN];

        let a = from_seed(&seed).unwrap();
        let b = from_seed(&seed).unwrap();

        assert_eq!(a.pubkey(), b.pubkey());
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn test_seed_length_is_enforced() {
        assert!(matches!(
            from_seed(&[1u8; 16]),
            Err(BuilderError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_base58_seed_round_trip() {
        let seed = [9u8; SEED_LEN];
        let encoded = bs58::encode(seed).into_string();

        let from_bytes = from_seed(&seed).unwrap();
        let from_str = from_base58_seed(&encoded).unwrap();

        assert_eq!(from_bytes.pubkey(), from_str.pubkey());
    }

    #[test]
    fn test_ephemeral_payers_are_unique() {
        assert_ne!(ephemeral().pubkey(), ephemeral().pubkey());
    }
}
