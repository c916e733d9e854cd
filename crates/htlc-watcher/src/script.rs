//! Byte-pattern utilities shared by the detectors.
//!
//! All functions here are pure and total over script bytes: malformed input
//! yields `None` (or `false`), never an error.

use bitcoin::{
    Script,
    opcodes::{
        Opcode,
        all::{
            OP_EQUAL, OP_HASH160, OP_PUSHBYTES_20, OP_PUSHNUM_1, OP_PUSHNUM_16, OP_PUSHNUM_NEG1,
            OP_RETURN,
        },
    },
    script::Instruction,
};

/// Ordered data pushes of a script.
///
/// OP_0 counts as an empty push; OP_1 through OP_16 and every other opcode
/// are skipped. Returns `None` if the push encoding is malformed.
pub fn pushed_data(script: &Script) -> Option<Vec<&[u8]>> {
    let mut pushes = Vec::new();
    for instruction in script.instructions() {
        match instruction.ok()? {
            Instruction::PushBytes(bytes) => pushes.push(bytes.as_bytes()),
            Instruction::Op(_) => {}
        }
    }
    Some(pushes)
}

/// Data pushes of a NULL DATA (OP_RETURN) locking script.
pub fn op_return_data(script: &Script) -> Option<Vec<&[u8]>> {
    if script.as_bytes().first() != Some(&OP_RETURN.to_u8()) {
        return None;
    }
    pushed_data(script)
}

/// Script hash of a canonical P2SH locking script.
///
/// Only the exact 23-byte `OP_HASH160 <20-byte hash> OP_EQUAL` form matches.
pub fn p2sh_script_hash(script: &Script) -> Option<[u8; 20]> {
    let bytes = script.as_bytes();
    if bytes.len() != 23
        || bytes[0] != OP_HASH160.to_u8()
        || bytes[1] != OP_PUSHBYTES_20.to_u8()
        || bytes[22] != OP_EQUAL.to_u8()
    {
        return None;
    }
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&bytes[2..22]);
    Some(hash)
}

/// Whether a script's raw bytes end with the given redeem-script suffix.
pub fn has_redeem_script_suffix(script: &Script, suffix: &[u8]) -> bool {
    script.as_bytes().ends_with(suffix)
}

/// Space-separated textual form of a script.
///
/// Pushed data is rendered as lowercase hex, small-integer opcodes as their
/// decimal value, everything else by opcode name. `None` on malformed input.
pub fn disasm(script: &Script) -> Option<String> {
    let mut tokens = Vec::new();
    for instruction in script.instructions() {
        match instruction.ok()? {
            Instruction::PushBytes(bytes) if bytes.is_empty() => tokens.push("0".to_owned()),
            Instruction::PushBytes(bytes) => tokens.push(hex::encode(bytes.as_bytes())),
            Instruction::Op(op) => tokens.push(opcode_token(op)),
        }
    }
    Some(tokens.join(" "))
}

fn opcode_token(op: Opcode) -> String {
    let value = op.to_u8();
    if value == OP_PUSHNUM_NEG1.to_u8() {
        "-1".to_owned()
    } else if (OP_PUSHNUM_1.to_u8()..=OP_PUSHNUM_16.to_u8()).contains(&value) {
        (value - OP_PUSHNUM_1.to_u8() + 1).to_string()
    } else {
        format!("{op:?}")
    }
}
