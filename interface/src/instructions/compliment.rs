use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use static_assertions::const_assert_eq;

use crate::instructions::{
    InstructionParams,
    InstructionTag,
};

pub const COMPLIMENT_PARAMS_LEN: usize = 8;

/// Parameters for contributing lamports to a project's bank.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Eq, PartialEq)]
pub struct ComplimentParams {
    /// The contribution in lamports.
    pub amount: u64,
}

const_assert_eq!(COMPLIMENT_PARAMS_LEN, size_of::<ComplimentParams>());

impl ComplimentParams {
    pub const fn new(amount: u64) -> Self {
        Self { amount }
    }
}

impl InstructionParams for ComplimentParams {
    const TAG: InstructionTag = InstructionTag::ComplimentProject;
}
