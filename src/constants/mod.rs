//! Constants owned by the vault program's on-chain interface

pub mod discriminator;

/// Base58 address of the deployed vault program
pub const PROGRAM_ADDRESS: &str = "uWGrWGNk4enkjkboj6ErEW8FKDQBaFCUGqtpcw7Ea5m";

/// Seed for the vault PDA, as defined in the program IDL ([118, 97, 117, 108, 116])
pub const VAULT_SEED: &[u8] = b"vault";

/// Default RPC endpoint, a local test validator
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
