//! Transfer transaction and its canonical signing payload.
//!
//! A transaction is transient: it exists only while one transfer is built,
//! signed and handed to the transport.

use serde::{Deserialize, Serialize};

use mhc_primitives::util::Varint;
use mhc_primitives::{Address, Key};

use crate::transfer_args::TransferArgs;
use crate::TransactionError;

/// A value transfer to a single recipient.
///
/// # Signing payload
///
/// | Field     | Encoding                                     |
/// |-----------|----------------------------------------------|
/// | to        | raw address bytes (`0x` stripped, hex decoded) |
/// | value     | varint                                       |
/// | fee       | varint                                       |
/// | nonce     | varint                                       |
/// | data      | varint(len) + raw bytes, or `0x00` if empty  |
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Recipient address, optionally prefixed with `0x`.
    pub to: String,
    /// Amount in the smallest unit.
    pub value: i64,
    /// Fee in the smallest unit.
    pub fee: i64,
    /// Hex-encoded attached data, empty for a plain transfer.
    pub data: String,
    /// Sender's spent count plus one.
    pub nonce: i64,
}

impl Transaction {
    /// Create a plain transfer with no fee and no data.
    pub fn new(to: impl Into<String>, value: i64, nonce: i64) -> Self {
        Transaction {
            to: to.into(),
            value,
            fee: 0,
            data: String::new(),
            nonce,
        }
    }

    /// Set the fee, builder style.
    pub fn with_fee(mut self, fee: i64) -> Self {
        self.fee = fee;
        self
    }

    /// Set the hex-encoded data, builder style.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = data.into();
        self
    }

    /// Build the exact byte sequence that is hashed and signed.
    ///
    /// # Returns
    /// The canonical payload, or:
    /// - `InvalidAddress` if the recipient is not hex
    /// - `InvalidData` if the data field is not hex
    /// - `Primitives(InvalidInput)` if value, fee or nonce is negative
    pub fn sign_payload(&self) -> Result<Vec<u8>, TransactionError> {
        let to = Address::from(self.to.as_str())
            .to_bytes()
            .map_err(|e| TransactionError::InvalidAddress(format!("{}: {}", self.to, e)))?;
        let data = hex::decode(&self.data).map_err(|e| TransactionError::InvalidData(e.to_string()))?;

        let mut vrt = Varint::with_capacity(to.len() + data.len() + 16);
        vrt.append_bytes(&to);
        vrt.append_i64(self.value)?;
        vrt.append_i64(self.fee)?;
        vrt.append_i64(self.nonce)?;

        if !data.is_empty() {
            vrt.append_u64(data.len() as u64)?;
        }
        vrt.append_bytes(&data);

        Ok(vrt.into_bytes())
    }

    /// Sign the canonical payload and produce the `mhc_send` arguments.
    ///
    /// # Returns
    /// The signed arguments, or an error if the payload cannot be built or
    /// the key cannot sign.
    pub fn sign(&self, key: &Key) -> Result<TransferArgs, TransactionError> {
        let payload = self.sign_payload()?;
        let sign = key.sign(&payload)?;
        let pubkey = key.public_hex()?;
        Ok(TransferArgs::new(self, pubkey, sign))
    }
}
