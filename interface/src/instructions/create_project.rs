use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

use crate::instructions::{
    InstructionParams,
    InstructionTag,
};

/// Parameters for initializing a new project and its bank.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct CreateProjectParams {
    /// The funding milestone in lamports.
    pub target: u64,
    /// The project name. Also used as a bank seed, so it must be unique per owner.
    pub name: String,
    /// The bump of the project PDA, checked on-chain against its own derivation.
    pub project_bump: u8,
}

impl CreateProjectParams {
    pub fn new(target: u64, name: impl Into<String>, project_bump: u8) -> Self {
        Self {
            target,
            name: name.into(),
            project_bump,
        }
    }

    /// The length of the encoded payload, excluding the tag byte.
    pub fn packed_len(&self) -> usize {
        size_of::<u64>() + size_of::<u32>() + self.name.len() + size_of::<u8>()
    }
}

impl InstructionParams for CreateProjectParams {
    const TAG: InstructionTag = InstructionTag::CreateProject;
}
