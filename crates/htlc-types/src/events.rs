//! HTLC event definitions

use bitcoin::Txid;
use serde::{Deserialize, Serialize};

/// On-chain HTLC state transitions recognized by the watcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum HtlcEvent {
    Deposit(DepositInfo),
    Receipt(ReceiptInfo),
    Refund(RefundInfo),
}

/// Funds locked into a covenant output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositInfo {
    pub tx_hash: Txid,
    #[serde(with = "hex::serde")]
    pub recipient_pkh: [u8; 20],
    #[serde(with = "hex::serde")]
    pub sender_pkh: [u8; 20],
    /// sha256 of the swap secret
    #[serde(with = "hex::serde")]
    pub hash_lock: [u8; 32],
    pub expiration: u16,
    pub penalty_bps: u16,
    /// Sender's address on the counterpart chain
    #[serde(with = "hex::serde")]
    pub sender_evm_addr: [u8; 20],
    /// hash160 of the covenant redeem script, as observed on chain
    #[serde(with = "hex::serde")]
    pub script_hash: [u8; 20],
    /// Locked amount in satoshis
    pub value: u64,
}

/// Funds claimed by revealing the secret before expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptInfo {
    /// Hash of the deposit transaction being claimed
    pub prev_tx_hash: Txid,
    pub tx_hash: Txid,
    /// The revealed 32-byte secret, hex encoded
    pub secret: String,
}

/// Funds reclaimed by the original sender after expiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundInfo {
    /// Hash of the deposit transaction being reclaimed
    pub prev_tx_hash: Txid,
    pub tx_hash: Txid,
}
