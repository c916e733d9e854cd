use bitcoin::{Block, Script, Transaction};
use cashbridge_htlc_types::ReceiptInfo;

use crate::{covenant::CovenantVersion, script};

/// Scans confirmed transactions for secret-reveal spends of a covenant.
///
/// Only input #0 is inspected; a second input, when present, is assumed to be
/// an unrelated fee or change input. The redeem script's embedded constructor
/// arguments are not checked against the deposit being spent, only the
/// version suffix and the push layout are.
pub struct ReceiptScanner {
    covenant: CovenantVersion,
}

impl ReceiptScanner {
    pub fn new(covenant: CovenantVersion) -> Self {
        Self { covenant }
    }

    pub fn scan_block(&self, block: &Block) -> Vec<ReceiptInfo> {
        let mut receipts = Vec::new();
        for tx in &block.txdata {
            if let Some(receipt) = self.scan_transaction(tx) {
                tracing::debug!(tx_hash = %receipt.tx_hash, "HTLC receipt detected");
                receipts.push(receipt);
            }
        }
        receipts
    }

    pub fn scan_transaction(&self, tx: &Transaction) -> Option<ReceiptInfo> {
        if tx.input.len() != 1 && tx.input.len() != 2 {
            return None;
        }

        let secret = self.decode_sig_script(&tx.input[0].script_sig)?;
        Some(ReceiptInfo {
            prev_tx_hash: tx.input[0].previous_output.txid,
            tx_hash: tx.compute_txid(),
            secret,
        })
    }

    /// `<secret> <selector> <redeem script>`
    fn decode_sig_script(&self, sig_script: &Script) -> Option<String> {
        if !script::has_redeem_script_suffix(sig_script, self.covenant.redeem_script_suffix()) {
            return None;
        }

        let pushes = script::pushed_data(sig_script)?;
        if pushes.len() != 3 || pushes[0].len() != 32 {
            return None;
        }

        // The selector (pushes[1]) and redeem script (pushes[2]) are accepted
        // as-is; their constructor arguments are not verified against the
        // referenced deposit.
        Some(hex::encode(pushes[0]))
    }
}
