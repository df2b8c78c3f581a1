//! Instruction discriminators for the vault program
//!
//! The program is Anchor-built, so each instruction is tagged with the first
//! 8 bytes of `sha256("global:<instruction_name>")`. The fixed constants below
//! must match the deployed program's interface exactly; `anchor_discriminator`
//! re-derives them from the instruction names so tests can prove they agree.

use sha2::{Digest, Sha256};

/// Length of an Anchor instruction discriminator in bytes
pub const DISCRIMINATOR_LEN: usize = 8;

/// Namespace Anchor prepends to instruction names before hashing
pub const ANCHOR_DISCRIMINATOR_NAMESPACE: &str = "global";

/// Discriminator for the `vault_reset` instruction
pub const VAULT_RESET: [u8; DISCRIMINATOR_LEN] = [162, 127, 159, 174, 179, 116, 127, 132];

/// Discriminator for the `vault_open` instruction
pub const VAULT_OPEN: [u8; DISCRIMINATOR_LEN] = [88, 119, 117, 99, 145, 1, 225, 154];

/// Generate an Anchor discriminator from an instruction name
pub fn anchor_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let namespace = format!("{}:{}", ANCHOR_DISCRIMINATOR_NAMESPACE, name);
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    let hash = hasher.finalize();

    let mut result = [0u8; DISCRIMINATOR_LEN];
    result.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    result
}
