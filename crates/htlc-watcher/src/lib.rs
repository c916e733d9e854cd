pub mod covenant;
pub mod deposit;
pub mod error;
pub mod receipt;
pub mod refund;
pub mod scan;
pub mod script;

#[cfg(test)]
pub(crate) mod testutil;

pub mod prelude {
    pub use crate::covenant::{CovenantOracle, CovenantParams, CovenantVersion};
    pub use crate::deposit::DepositScanner;
    pub use crate::error::{Error, Result};
    pub use crate::receipt::ReceiptScanner;
    pub use crate::refund::RefundScanner;
    pub use crate::scan::HtlcScanner;
    pub use cashbridge_htlc_types::{DepositInfo, HtlcEvent, ReceiptInfo, RefundInfo};
}
