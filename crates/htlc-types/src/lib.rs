//! Shared type definitions for the CashBridge HTLC watcher
//!
//! This crate provides the event records emitted when the watcher recognizes
//! an on-chain HTLC state transition: a deposit, a receipt (secret reveal) or
//! a refund. Records are created whole during a block scan and never mutated
//! afterwards; correlating receipts and refunds back to the deposit that
//! funded them is left to the relayer.

pub mod events;

pub use events::*;
