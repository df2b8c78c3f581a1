//! Instruction payload construction for the vault program
//!
//! Payloads follow the program's binary interface: the first 8 bytes are the
//! instruction discriminator, any remaining bytes are positional arguments.
//! Field order and widths must match the deployed program exactly.

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::{Pubkey, PUBKEY_BYTES};

use crate::constants::discriminator::{self, DISCRIMINATOR_LEN};

/// The vault program instructions this tool can invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultInstruction {
    /// Reset the vault admin to a new authority.
    Reset {
        /// Pubkey installed as the vault's new admin.
        new_admin: Pubkey,
    },
    /// Open the vault.
    Open,
}

impl VaultInstruction {
    /// Discriminator identifying this instruction to the program
    pub fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            VaultInstruction::Reset { .. } => discriminator::VAULT_RESET,
            VaultInstruction::Open => discriminator::VAULT_OPEN,
        }
    }

    /// Serialize the payload: discriminator followed by argument bytes
    pub fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(DISCRIMINATOR_LEN + PUBKEY_BYTES);
        data.extend_from_slice(&self.discriminator());

        if let VaultInstruction::Reset { new_admin } = self {
            data.extend_from_slice(new_admin.as_ref());
        }

        data
    }

    /// Build the full instruction with the account metas the program expects:
    /// the fee payer (signer, writable) followed by the vault PDA (writable)
    pub fn instruction(&self, program_id: &Pubkey, payer: &Pubkey, vault: &Pubkey) -> Instruction {
        Instruction {
            program_id: *program_id,
            accounts: vec![
                AccountMeta::new(*payer, true),
                AccountMeta::new(*vault, false),
            ],
            data: self.data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_payload_layout() {
        let new_admin = Pubkey::new_unique();
        let data = VaultInstruction::Reset { new_admin }.data();

        assert_eq!(data.len(), DISCRIMINATOR_LEN + 32);
        assert_eq!(&data[..DISCRIMINATOR_LEN], &discriminator::VAULT_RESET);
        assert_eq!(&data[DISCRIMINATOR_LEN..], new_admin.as_ref());
    }

    #[test]
    fn test_open_payload_is_bare_discriminator() {
        let data = VaultInstruction::Open.data();

        assert_eq!(data.len(), DISCRIMINATOR_LEN);
        assert_eq!(data, discriminator::VAULT_OPEN.to_vec());
    }

    #[test]
    fn test_instruction_account_metas() {
        let program_id = Pubkey::new_unique();
        let payer = Pubkey::new_unique();
        let vault = Pubkey::new_unique();

        let ix = VaultInstruction::Open.instruction(&program_id, &payer, &vault);

        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.accounts.len(), 2);
        assert_eq!(ix.accounts[0].pubkey, payer);
        assert!(ix.accounts[0].is_signer);
        assert!(ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[1].pubkey, vault);
        assert!(!ix.accounts[1].is_signer);
        assert!(ix.accounts[1].is_writable);
    }
}
