//! Error handling for the vault transaction builder.
//!
//! Library code returns [`BuilderError`] so callers can tell an RPC failure
//! apart from a local signing or encoding failure; the binary wraps these in
//! `anyhow` context at the boundary. There is no retry or partial recovery,
//! any error aborts the run.

use thiserror::Error;

/// Main error type for the transaction builder.
#[derive(Error, Debug)]
pub enum BuilderError {
    /// Errors from RPC communication, such as an unreachable cluster.
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    /// Errors from parsing a base58 address string.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] solana_sdk::pubkey::ParsePubkeyError),

    /// Errors from constructing a keypair out of caller-provided seed bytes.
    #[error("Invalid keypair seed: {0}")]
    InvalidSeed(String),

    /// Errors from signing a transaction message.
    #[error("Signing error: {0}")]
    Signing(#[from] solana_sdk::signer::SignerError),

    /// A signed transaction that failed the sendability check.
    #[error("Transaction is not sendable: {0}")]
    Unsendable(#[from] solana_sdk::transaction::TransactionError),

    /// Errors from encoding a transaction to wire bytes.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
}

/// Result type alias for the transaction builder.
pub type BuilderResult<T> = Result<T, BuilderError>;
