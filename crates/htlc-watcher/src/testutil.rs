//! Fixtures shared by the detector tests.

use bitcoin::{
    Amount, Block, BlockHash, CompactTarget, OutPoint, ScriptBuf, Sequence, Transaction, TxIn,
    TxMerkleNode, TxOut, Txid, Witness,
    block::Header as BlockHeader,
    hashes::{Hash, hash160},
    opcodes::all::{OP_EQUAL, OP_HASH160, OP_PUSHNUM_1, OP_RETURN},
    script::{Builder, PushBytesBuf},
};

use crate::{
    covenant::{CovenantOracle, CovenantParams, CovenantVersion, PROTO_TAG_V1},
    error::{Error, Result},
};

/// Stand-in redeem-script tail used where tests need a version suffix.
pub(crate) const REDEEM_SUFFIX: &[u8] = &[0x88, 0xad, 0x67, 0x75, 0x68, 0x87];

/// Deterministic covenant oracle: hash160 over the encoded parameters.
pub(crate) struct FixtureOracle;

impl CovenantOracle for FixtureOracle {
    fn redeem_script_hash(&self, params: &CovenantParams) -> Result<[u8; 20]> {
        if params.penalty_bps > 10_000 {
            return Err(Error::InvalidCovenantParams(format!(
                "penalty {} bps above 100%",
                params.penalty_bps
            )));
        }
        let mut preimage = Vec::with_capacity(76);
        preimage.extend_from_slice(&params.sender_pkh);
        preimage.extend_from_slice(&params.recipient_pkh);
        preimage.extend_from_slice(&params.hash_lock);
        preimage.extend_from_slice(&params.expiration.to_be_bytes());
        preimage.extend_from_slice(&params.penalty_bps.to_be_bytes());
        Ok(hash160::Hash::hash(&preimage).to_byte_array())
    }
}

pub(crate) fn covenant_v1() -> CovenantVersion {
    CovenantVersion::v1(REDEEM_SUFFIX.to_vec())
}

pub(crate) fn swap_params() -> CovenantParams {
    CovenantParams {
        sender_pkh: [0x01; 20],
        recipient_pkh: [0x02; 20],
        hash_lock: [0x03; 32],
        expiration: 100,
        penalty_bps: 50,
    }
}

pub(crate) fn transaction(input: Vec<TxIn>, output: Vec<TxOut>) -> Transaction {
    Transaction {
        version: bitcoin::transaction::Version::TWO,
        lock_time: bitcoin::absolute::LockTime::ZERO,
        input,
        output,
    }
}

pub(crate) fn block(txdata: Vec<Transaction>) -> Block {
    Block {
        header: BlockHeader {
            version: bitcoin::block::Version::ONE,
            prev_blockhash: BlockHash::all_zeros(),
            merkle_root: TxMerkleNode::all_zeros(),
            time: 1234567890,
            bits: CompactTarget::from_consensus(0x1d00ffff),
            nonce: 2083236893,
        },
        txdata,
    }
}

pub(crate) fn input_spending(prev_txid: Txid, script_sig: ScriptBuf) -> TxIn {
    TxIn {
        previous_output: OutPoint::new(prev_txid, 0),
        script_sig,
        sequence: Sequence::ENABLE_RBF_NO_LOCKTIME,
        witness: Witness::new(),
    }
}

pub(crate) fn p2sh_output(script_hash: [u8; 20], value: Amount) -> TxOut {
    TxOut {
        value,
        script_pubkey: Builder::new()
            .push_opcode(OP_HASH160)
            .push_slice(script_hash)
            .push_opcode(OP_EQUAL)
            .into_script(),
    }
}

pub(crate) fn metadata_output(params: &CovenantParams, sender_evm_addr: [u8; 20]) -> TxOut {
    TxOut {
        value: Amount::ZERO,
        script_pubkey: Builder::new()
            .push_opcode(OP_RETURN)
            .push_slice(*PROTO_TAG_V1)
            .push_slice(params.recipient_pkh)
            .push_slice(params.sender_pkh)
            .push_slice(params.hash_lock)
            .push_slice(params.expiration.to_be_bytes())
            .push_slice(params.penalty_bps.to_be_bytes())
            .push_slice(sender_evm_addr)
            .into_script(),
    }
}

/// A fully valid deposit transaction for the fixture oracle.
pub(crate) fn deposit_tx(
    params: &CovenantParams,
    sender_evm_addr: [u8; 20],
    value: u64,
) -> Transaction {
    let script_hash = FixtureOracle.redeem_script_hash(params).unwrap();
    transaction(
        vec![input_spending(Txid::all_zeros(), ScriptBuf::new())],
        vec![
            p2sh_output(script_hash, Amount::from_sat(value)),
            metadata_output(params, sender_evm_addr),
        ],
    )
}

/// A redeem script whose bytes end with the fixture suffix.
pub(crate) fn redeem_script() -> Vec<u8> {
    let mut script = vec![0x04, 0xaa, 0xbb, 0xcc, 0xdd];
    script.extend_from_slice(REDEEM_SUFFIX);
    script
}

/// `<secret> <selector> <redeem script>`, three pushes ending in the suffix.
pub(crate) fn receipt_sig_script(secret: [u8; 32]) -> ScriptBuf {
    let redeem = PushBytesBuf::try_from(redeem_script()).unwrap();
    Builder::new()
        .push_slice(secret)
        .push_int(0)
        .push_slice(redeem)
        .into_script()
}

/// `OP_1 <redeem script>`, the timeout spending path.
pub(crate) fn refund_sig_script() -> ScriptBuf {
    let redeem = PushBytesBuf::try_from(redeem_script()).unwrap();
    Builder::new()
        .push_opcode(OP_PUSHNUM_1)
        .push_slice(redeem)
        .into_script()
}
