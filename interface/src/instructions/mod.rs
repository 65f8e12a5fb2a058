//! Instruction tags and payload encoding.
//!
//! Every instruction's data is a single tag byte followed by the borsh encoding of its parameters.
//! Borsh's layout is the program's ABI here: `u64` as 8 little-endian bytes, `u8` as one byte,
//! byte strings as a little-endian `u32` length followed by the raw bytes, and `[u8; 32]` as the
//! raw 32 bytes. Field order is declaration order.

use borsh::BorshSerialize;

use crate::error::{
    CrowdfundError,
    InterfaceError,
    InterfaceResult,
};

pub mod compliment;
pub mod create_project;

pub use compliment::ComplimentParams;
pub use create_project::CreateProjectParams;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum InstructionTag {
    CreateProject,
    ComplimentProject,
    WithdrawFunds,
}

impl TryFrom<u8> for InstructionTag {
    type Error = CrowdfundError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::CreateProject),
            1 => Ok(Self::ComplimentProject),
            2 => Ok(Self::WithdrawFunds),
            _ => Err(CrowdfundError::InvalidInstruction),
        }
    }
}

/// Parameter payloads tied to the instruction that consumes them.
pub trait InstructionParams: BorshSerialize {
    const TAG: InstructionTag;
}

/// Encodes `params` into its untagged payload bytes.
pub fn encode<T: BorshSerialize>(params: &T) -> InterfaceResult<Vec<u8>> {
    borsh::to_vec(params).map_err(|e| InterfaceError::Encoding(e.to_string()))
}

/// Encodes `params` and prepends its instruction tag, producing complete instruction data.
pub fn pack_tagged<T: InstructionParams>(params: &T) -> InterfaceResult<Vec<u8>> {
    let payload = encode(params)?;
    let mut data = Vec::with_capacity(1 + payload.len());
    data.push(T::TAG as u8);
    data.extend_from_slice(&payload);
    Ok(data)
}

/// Instruction data for instructions without parameters.
pub fn tag_only(tag: InstructionTag) -> Vec<u8> {
    vec![tag as u8]
}
