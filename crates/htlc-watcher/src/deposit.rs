use bitcoin::{Block, Script, Transaction};
use cashbridge_htlc_types::DepositInfo;

use crate::{
    covenant::{CovenantOracle, CovenantParams, CovenantVersion},
    script,
};

/// Scans confirmed transactions for covenant-funding outputs.
///
/// A deposit locks funds under P2SH in output #0 and declares the swap
/// parameters in a NULL DATA output #1. The declared parameters are fed to
/// the covenant oracle and the derived redeem-script hash must equal the one
/// committed to on chain; anything short of a full match is silently skipped.
pub struct DepositScanner<O> {
    oracle: O,
    covenant: CovenantVersion,
}

impl<O: CovenantOracle> DepositScanner<O> {
    pub fn new(oracle: O, covenant: CovenantVersion) -> Self {
        Self { oracle, covenant }
    }

    pub fn scan_block(&self, block: &Block) -> Vec<DepositInfo> {
        let mut deposits = Vec::new();
        for tx in &block.txdata {
            if let Some(deposit) = self.scan_transaction(tx) {
                tracing::debug!(tx_hash = %deposit.tx_hash, "HTLC deposit detected");
                deposits.push(deposit);
            }
        }
        deposits
    }

    /// output#0: fund lock, output#1: swap metadata
    pub fn scan_transaction(&self, tx: &Transaction) -> Option<DepositInfo> {
        if tx.output.len() < 2 {
            return None;
        }

        let script_hash = script::p2sh_script_hash(&tx.output[0].script_pubkey)?;
        let (params, sender_evm_addr) = self.decode_metadata(&tx.output[1].script_pubkey)?;

        let expected_hash = self.oracle.redeem_script_hash(&params).ok()?;
        if expected_hash != script_hash {
            return None;
        }

        Some(DepositInfo {
            tx_hash: tx.compute_txid(),
            recipient_pkh: params.recipient_pkh,
            sender_pkh: params.sender_pkh,
            hash_lock: params.hash_lock,
            expiration: params.expiration,
            penalty_bps: params.penalty_bps,
            sender_evm_addr,
            script_hash,
            value: tx.output[0].value.to_sat(),
        })
    }

    /// OP_RETURN <tag> <recipient pkh> <sender pkh> <hash lock> <expiration>
    /// <penalty bps> <sender evm addr>
    fn decode_metadata(&self, pk_script: &Script) -> Option<(CovenantParams, [u8; 20])> {
        let pushes = script::op_return_data(pk_script)?;
        if pushes.len() != 7 || pushes[0] != self.covenant.proto_tag().as_slice() {
            return None;
        }

        let params = CovenantParams {
            recipient_pkh: pushes[1].try_into().ok()?,
            sender_pkh: pushes[2].try_into().ok()?,
            hash_lock: pushes[3].try_into().ok()?,
            expiration: u16::from_be_bytes(pushes[4].try_into().ok()?),
            penalty_bps: u16::from_be_bytes(pushes[5].try_into().ok()?),
        };
        let sender_evm_addr = pushes[6].try_into().ok()?;

        Some((params, sender_evm_addr))
    }
}
