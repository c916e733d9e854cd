use crate::error::Result;

/// Protocol tag carried in the first OP_RETURN push of a deposit, v1 family.
pub const PROTO_TAG_V1: &[u8; 4] = b"SBAS";

/// Swap parameters baked into a covenant instance's redeem script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CovenantParams {
    pub sender_pkh: [u8; 20],
    pub recipient_pkh: [u8; 20],
    pub hash_lock: [u8; 32],
    pub expiration: u16,
    pub penalty_bps: u16,
}

/// Derives the expected redeem-script hash for a set of swap parameters.
///
/// Implemented by the covenant toolchain; the watcher only consumes it to
/// cross-check P2SH outputs against their OP_RETURN-declared parameters.
/// Implementations must be deterministic and side-effect free.
pub trait CovenantOracle {
    fn redeem_script_hash(&self, params: &CovenantParams) -> Result<[u8; 20]>;
}

impl<O: CovenantOracle + ?Sized> CovenantOracle for &O {
    fn redeem_script_hash(&self, params: &CovenantParams) -> Result<[u8; 20]> {
        (**self).redeem_script_hash(params)
    }
}

/// Constants of one covenant protocol version, shared by all detectors.
///
/// The suffix is the redeem script with its constructor arguments stripped.
/// It is produced by the covenant toolchain for a given version and injected
/// here, so watchers for multiple covenant versions can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CovenantVersion {
    proto_tag: [u8; 4],
    redeem_script_suffix: Vec<u8>,
}

impl CovenantVersion {
    pub fn new(proto_tag: [u8; 4], redeem_script_suffix: Vec<u8>) -> Self {
        Self {
            proto_tag,
            redeem_script_suffix,
        }
    }

    /// Version with the v1 protocol tag and the given redeem-script suffix.
    pub fn v1(redeem_script_suffix: Vec<u8>) -> Self {
        Self::new(*PROTO_TAG_V1, redeem_script_suffix)
    }

    pub fn proto_tag(&self) -> &[u8; 4] {
        &self.proto_tag
    }

    pub fn redeem_script_suffix(&self) -> &[u8] {
        &self.redeem_script_suffix
    }
}
