//! Signed transfer arguments, the params object of the `mhc_send` call.

use serde::{Deserialize, Serialize};

use mhc_primitives::Key;

use crate::transaction::Transaction;
use crate::TransactionError;

/// A signed transfer as submitted to the network.
///
/// Amounts are decimal strings; `pubkey` is hex DER SubjectPublicKeyInfo and
/// `sign` is the hex DER signature over the canonical payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferArgs {
    pub to: String,
    pub value: String,
    pub fee: String,
    pub data: String,
    pub nonce: String,
    pub pubkey: String,
    pub sign: String,
}

impl TransferArgs {
    pub(crate) fn new(tx: &Transaction, pubkey: String, sign: String) -> Self {
        TransferArgs {
            to: tx.to.clone(),
            value: tx.value.to_string(),
            fee: tx.fee.to_string(),
            data: tx.data.clone(),
            nonce: tx.nonce.to_string(),
            pubkey,
            sign,
        }
    }

    /// Rebuild the transaction these arguments describe.
    ///
    /// # Returns
    /// The transaction, or `InvalidAmount` if an amount is not a decimal integer.
    pub fn transaction(&self) -> Result<Transaction, TransactionError> {
        Ok(Transaction {
            to: self.to.clone(),
            value: parse_amount("value", &self.value)?,
            fee: parse_amount("fee", &self.fee)?,
            data: self.data.clone(),
            nonce: parse_amount("nonce", &self.nonce)?,
        })
    }

    /// Check `sign` against the rebuilt payload and the embedded public key.
    ///
    /// # Returns
    /// `Ok(true)` when the signature matches, `Ok(false)` when it does not,
    /// and an error when any field cannot be decoded.
    pub fn verify(&self) -> Result<bool, TransactionError> {
        let payload = self.transaction()?.sign_payload()?;
        let key = Key::from_public_hex(&self.pubkey)?;
        Ok(key.verify(&payload, &self.sign)?)
    }
}

fn parse_amount(field: &str, value: &str) -> Result<i64, TransactionError> {
    value
        .parse::<i64>()
        .map_err(|e| TransactionError::InvalidAmount(format!("{field} {value:?}: {e}")))
}
