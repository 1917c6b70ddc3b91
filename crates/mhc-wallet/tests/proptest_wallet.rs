use std::sync::Mutex;

use proptest::prelude::*;
use serde_json::{json, Value};

use mhc_transaction::TransferArgs;
use mhc_wallet::transport::{METHOD_FETCH_BALANCE, METHOD_SEND};
use mhc_wallet::{Transport, TransportError, WalletError, WalletSigner};

const PRIV_HEX: &str = "307702010104201f2e3d4c5b6a79880123456789abcdeffedcba98765432100a0b0c0d0e0f1011a00a06082a8648ce3d030107a144034200040fd8ce49cd2f5ad68affa36aec338d4975069fd80cddf727b333f982a30e8327f62becbec0ec9b0850b3d919437f5784289a1836f4d66540c726519109f2c00a";
const FROM: &str = "0x00fa2a5279f8f0fd2f0f9d3280ad70403f01f9d62f52373833";
const TO: &str = "0x009806da73b1589f38630649bdee48467946d118059efd6aab";

struct Node {
    received: i64,
    spent: i64,
    count_spent: i64,
    sent: Mutex<Vec<TransferArgs>>,
}

impl Transport for Node {
    fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        match method {
            METHOD_FETCH_BALANCE => Ok(json!({
                "received": self.received,
                "spent": self.spent,
                "count_spent": self.count_spent
            })),
            METHOD_SEND => {
                let args: TransferArgs = serde_json::from_value(params)?;
                self.sent.lock().unwrap().push(args);
                Ok(json!("hash"))
            }
            _ => unreachable!(),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn transfer_respects_balance(
        received in 0i64..1_000_000_000,
        spent_fraction in 0.0f64..=1.0,
        count_spent in 0i64..10_000,
        value in 0i64..1_000_000_000,
    ) {
        let spent = (received as f64 * spent_fraction) as i64;
        let node = Node { received, spent, count_spent, sent: Mutex::new(Vec::new()) };
        let wallet = WalletSigner::new(FROM, PRIV_HEX, &node).unwrap();

        let result = wallet.transfer_units(TO, value);
        let sent = node.sent.lock().unwrap();

        if received - spent < value {
            let insufficient = matches!(result, Err(WalletError::InsufficientBalance { .. }));
            prop_assert!(insufficient);
            prop_assert!(sent.is_empty());
        } else {
            prop_assert_eq!(result.unwrap(), "hash");
            prop_assert_eq!(sent.len(), 1);
            prop_assert_eq!(&sent[0].nonce, &(count_spent + 1).to_string());
            prop_assert_eq!(&sent[0].value, &value.to_string());
            prop_assert!(sent[0].verify().unwrap());
        }
    }
}
