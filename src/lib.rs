//! A library for building, signing, and serializing vault program transactions
//!
//! This crate constructs the `vault_reset` and `vault_open` instruction calls
//! against the deployed vault program, signs them with a locally held fee
//! payer, and encodes them to base64 wire bytes ready for manual submission.

pub mod constants;
pub mod errors;
pub mod instruction;
pub mod payer;
pub mod pda;
pub mod rpc;
pub mod transaction;

use std::str::FromStr;

use log::info;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};

use crate::errors::BuilderResult;
use crate::instruction::VaultInstruction;

/// The signed, wire-ready output of one builder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultTransactions {
    /// Fee payer and signer of both transactions.
    pub payer: Pubkey,
    /// Derived vault PDA passed to both instructions.
    pub vault: Pubkey,
    /// Bump byte of the vault derivation.
    pub bump: u8,
    /// Blockhash anchoring the lifetime of both transactions.
    pub blockhash: Hash,
    /// Base64 wire bytes of the signed `vault_reset` transaction.
    pub reset_tx: String,
    /// Base64 wire bytes of the signed `vault_open` transaction.
    pub open_tx: String,
}

/// Main entry point: fetch a blockhash from the cluster and build both
/// signed transactions
pub async fn build_vault_transactions(
    rpc_url: &str,
    payer: &Keypair,
    new_admin: Option<Pubkey>,
) -> BuilderResult<VaultTransactions> {
    let cluster = rpc::Cluster::new(rpc_url);

    // Fetched once so both transactions share the same lifetime anchor.
    let blockhash = cluster.latest_blockhash().await?;

    build_with_blockhash(payer, new_admin, blockhash)
}

/// Build both signed transactions against a known blockhash, without any
/// network access
pub fn build_with_blockhash(
    payer: &Keypair,
    new_admin: Option<Pubkey>,
    blockhash: Hash,
) -> BuilderResult<VaultTransactions> {
    let program_id = Pubkey::from_str(constants::PROGRAM_ADDRESS)?;
    let payer_address = payer.pubkey();

    let (vault, bump) = pda::find_vault_address(&program_id);
    info!("Derived vault PDA {} with bump {}", vault, bump);

    // The reset instruction installs the payer as admin unless the caller
    // names someone else.
    let new_admin = new_admin.unwrap_or(payer_address);

    let reset_ix =
        VaultInstruction::Reset { new_admin }.instruction(&program_id, &payer_address, &vault);
    let open_ix = VaultInstruction::Open.instruction(&program_id, &payer_address, &vault);

    let reset_tx = transaction::sign_transaction(payer, reset_ix, blockhash)?;
    let open_tx = transaction::sign_transaction(payer, open_ix, blockhash)?;

    Ok(VaultTransactions {
        payer: payer_address,
        vault,
        bump,
        blockhash,
        reset_tx: transaction::encode_wire_transaction(&reset_tx)?,
        open_tx: transaction::encode_wire_transaction(&open_tx)?,
    })
}

/// Version of the transaction builder
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
