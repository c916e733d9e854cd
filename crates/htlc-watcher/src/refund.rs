use bitcoin::{Block, Script, Transaction};
use cashbridge_htlc_types::RefundInfo;

use crate::{covenant::CovenantVersion, script};

/// Scans confirmed transactions for timeout-reclaim spends of a covenant.
///
/// Same input preconditions as [`crate::receipt::ReceiptScanner`], and the
/// same unverified-constructor-arguments limitation. The refund spending path
/// is recognized by its disassembly: the small-integer selector `1` followed
/// by the single redeem-script push.
pub struct RefundScanner {
    covenant: CovenantVersion,
}

impl RefundScanner {
    pub fn new(covenant: CovenantVersion) -> Self {
        Self { covenant }
    }

    pub fn scan_block(&self, block: &Block) -> Vec<RefundInfo> {
        let mut refunds = Vec::new();
        for tx in &block.txdata {
            if let Some(refund) = self.scan_transaction(tx) {
                tracing::debug!(tx_hash = %refund.tx_hash, "HTLC refund detected");
                refunds.push(refund);
            }
        }
        refunds
    }

    pub fn scan_transaction(&self, tx: &Transaction) -> Option<RefundInfo> {
        if tx.input.len() != 1 && tx.input.len() != 2 {
            return None;
        }

        if !self.matches_refund_path(&tx.input[0].script_sig) {
            return None;
        }
        Some(RefundInfo {
            prev_tx_hash: tx.input[0].previous_output.txid,
            tx_hash: tx.compute_txid(),
        })
    }

    /// `OP_1 <redeem script>`
    fn matches_refund_path(&self, sig_script: &Script) -> bool {
        if !script::has_redeem_script_suffix(sig_script, self.covenant.redeem_script_suffix()) {
            return false;
        }

        let Some(asm) = script::disasm(sig_script) else {
            return false;
        };
        let opcodes: Vec<&str> = asm.split(' ').collect();
        opcodes.len() == 2 && opcodes[0] == "1"
    }
}
