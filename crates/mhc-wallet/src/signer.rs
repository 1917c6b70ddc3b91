//! Wallet signer: balance check, transfer construction, signing, submission.

use mhc_primitives::{Address, Key};
use mhc_transaction::{Transaction, TransferArgs};

use crate::transport::{Balance, Transport};
use crate::WalletError;

/// Smallest units per whole coin.
pub const MICROS_PER_COIN: i64 = 1_000_000;

/// A signing key bound to its account address and a node transport.
#[derive(Debug)]
pub struct WalletSigner<T> {
    key: Key,
    address: Address,
    transport: T,
}

impl<T: Transport> WalletSigner<T> {
    /// Initialize a wallet from an account address and a tagged private key.
    ///
    /// # Returns
    /// The signer, or a primitives error if the private key cannot be parsed.
    pub fn new(
        address: impl Into<Address>,
        private_key_hex: &str,
        transport: T,
    ) -> Result<Self, WalletError> {
        let address = address.into();
        let key = Key::from_private_hex(private_key_hex)?.with_address(address.clone());
        Ok(WalletSigner {
            key,
            address,
            transport,
        })
    }

    /// Wrap an existing key that already carries an address.
    ///
    /// # Returns
    /// `MissingAddress` if no address was set on the key.
    pub fn from_key(key: Key, transport: T) -> Result<Self, WalletError> {
        let address = key.address().cloned().ok_or(WalletError::MissingAddress)?;
        Ok(WalletSigner {
            key,
            address,
            transport,
        })
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch this wallet's balance.
    pub fn balance(&self) -> Result<Balance, WalletError> {
        self.transport
            .fetch_balance(&self.address)
            .map_err(|source| WalletError::Balance {
                address: self.address.clone(),
                source,
            })
    }

    /// Transfer `amount` whole coins to `to`.
    ///
    /// The amount is converted to smallest units by multiplying with
    /// [`MICROS_PER_COIN`] and truncating.
    ///
    /// # Returns
    /// The transaction identifier reported by the node.
    pub fn transfer(&self, to: &str, amount: f64) -> Result<String, WalletError> {
        self.transfer_units(to, coins_to_units(amount)?)
    }

    /// Transfer `value` smallest units to `to`.
    ///
    /// Nothing is submitted when the balance does not cover `value`.
    ///
    /// # Returns
    /// The transaction identifier, `InsufficientBalance`, or the first
    /// transport, encoding or signing error encountered.
    pub fn transfer_units(&self, to: &str, value: i64) -> Result<String, WalletError> {
        if value < 0 {
            return Err(WalletError::InvalidAmount(format!(
                "negative transfer value {value}"
            )));
        }

        let balance = self.balance()?;
        let available = balance.available();
        if available < value {
            tracing::warn!(
                address = %self.address,
                available,
                required = value,
                "Insufficient balance for transfer"
            );
            return Err(WalletError::InsufficientBalance {
                available,
                required: value,
            });
        }

        let tx = Transaction::new(to, value, balance.next_nonce());
        self.send_transaction(&tx)
    }

    /// Build and sign the `mhc_send` arguments for `tx`.
    pub fn sign_transaction(&self, tx: &Transaction) -> Result<TransferArgs, WalletError> {
        Ok(tx.sign(&self.key)?)
    }

    /// Sign `tx` and submit it through the transport.
    ///
    /// # Returns
    /// The transaction identifier reported by the node.
    pub fn send_transaction(&self, tx: &Transaction) -> Result<String, WalletError> {
        let args = self.sign_transaction(tx)?;
        let tx_hash = self.transport.send_transaction(&args)?;
        tracing::info!(
            from = %self.address,
            to = %tx.to,
            value = tx.value,
            nonce = tx.nonce,
            tx_hash = %tx_hash,
            "Transfer submitted"
        );
        Ok(tx_hash)
    }
}

/// Convert a whole-coin amount to smallest units, truncating toward zero.
fn coins_to_units(amount: f64) -> Result<i64, WalletError> {
    let units = amount * MICROS_PER_COIN as f64;
    if !units.is_finite() || units < 0.0 || units >= i64::MAX as f64 {
        return Err(WalletError::InvalidAmount(format!(
            "amount {amount} is not representable"
        )));
    }
    Ok(units as i64)
}
