//! PDA helpers for deriving vault program addresses

use solana_sdk::pubkey::Pubkey;

use crate::constants::VAULT_SEED;

/// Derive the vault PDA and bump for the given program
pub fn find_vault_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED], program_id)
}
