//! Transaction assembly, signing, and wire encoding
//!
//! A fixed pipeline per transaction: build a message with the fee payer and
//! blockhash lifetime, attach the single instruction, sign, verify the result
//! is sendable, then encode to the base64 wire format.

use solana_sdk::hash::Hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;

use crate::errors::BuilderResult;

/// Build and sign a single-instruction transaction with the given lifetime
pub fn sign_transaction(
    payer: &Keypair,
    instruction: Instruction,
    blockhash: Hash,
) -> BuilderResult<Transaction> {
    let message = Message::new_with_blockhash(&[instruction], Some(&payer.pubkey()), &blockhash);

    let mut transaction = Transaction::new_unsigned(message);
    transaction.try_sign(&[payer], blockhash)?;

    // Reject anything that would bounce at submission time.
    transaction.verify()?;

    Ok(transaction)
}

/// Encode a signed transaction to base64 wire bytes
pub fn encode_wire_transaction(transaction: &Transaction) -> BuilderResult<String> {
    let bytes = bincode::serialize(transaction)?;

    Ok(base64::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::VaultInstruction;
    use solana_sdk::pubkey::Pubkey;

    fn open_instruction(payer: &Pubkey) -> Instruction {
        VaultInstruction::Open.instruction(&Pubkey::new_unique(), payer, &Pubkey::new_unique())
    }

    #[test]
    fn test_sign_transaction_sets_lifetime_and_fee_payer() {
        let payer = crate::payer::from_seed(&[3u8; 32]).unwrap();
        let blockhash = Hash::new_from_array([42u8; 32]);

        let tx = sign_transaction(&payer, open_instruction(&payer.pubkey()), blockhash).unwrap();

        assert_eq!(tx.message.recent_blockhash, blockhash);
        assert_eq!(tx.message.account_keys[0], payer.pubkey());
        assert_eq!(tx.signatures.len(), 1);
    }

    #[test]
    fn test_wire_encoding_round_trips() {
        let payer = crate::payer::from_seed(&[5u8; 32]).unwrap();
        let blockhash = Hash::new_from_array([1u8; 32]);

        let tx = sign_transaction(&payer, open_instruction(&payer.pubkey()), blockhash).unwrap();
        let encoded = encode_wire_transaction(&tx).unwrap();

        let bytes = base64::decode(&encoded).unwrap();
        let decoded: Transaction = bincode::deserialize(&bytes).unwrap();

        assert_eq!(decoded, tx);
    }
}
