use bitcoin::Block;
use cashbridge_htlc_types::HtlcEvent;

use crate::{
    covenant::{CovenantOracle, CovenantVersion},
    deposit::DepositScanner,
    receipt::ReceiptScanner,
    refund::RefundScanner,
};

/// Runs all three detectors over each transaction of a block.
///
/// Detectors are independent; each emits at most one event per transaction
/// and non-matches are silent. Event order follows block order, with the
/// deposit, receipt and refund checks applied in that order per transaction.
pub struct HtlcScanner<O> {
    deposits: DepositScanner<O>,
    receipts: ReceiptScanner,
    refunds: RefundScanner,
}

impl<O: CovenantOracle> HtlcScanner<O> {
    pub fn new(oracle: O, covenant: CovenantVersion) -> Self {
        Self {
            deposits: DepositScanner::new(oracle, covenant.clone()),
            receipts: ReceiptScanner::new(covenant.clone()),
            refunds: RefundScanner::new(covenant),
        }
    }

    pub fn scan_block(&self, block: &Block) -> Vec<HtlcEvent> {
        let mut events = Vec::new();
        for tx in &block.txdata {
            if let Some(deposit) = self.deposits.scan_transaction(tx) {
                tracing::debug!(tx_hash = %deposit.tx_hash, "HTLC deposit detected");
                events.push(HtlcEvent::Deposit(deposit));
            }
            if let Some(receipt) = self.receipts.scan_transaction(tx) {
                tracing::debug!(tx_hash = %receipt.tx_hash, "HTLC receipt detected");
                events.push(HtlcEvent::Receipt(receipt));
            }
            if let Some(refund) = self.refunds.scan_transaction(tx) {
                tracing::debug!(tx_hash = %refund.tx_hash, "HTLC refund detected");
                events.push(HtlcEvent::Refund(refund));
            }
        }
        events
    }
}
