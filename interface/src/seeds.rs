//! PDA seed conventions shared with the on-chain program.
//!
//! - bank: `[owner, name]`
//! - project: `[bank, [bank_bump]]`, with the bank bump as a single raw byte.

use solana_sdk::pubkey::Pubkey;

use crate::error::{
    InterfaceError,
    InterfaceResult,
};

/// The maximum length of a single PDA seed. Project names are used as seeds directly.
pub const MAX_NAME_LEN: usize = 32;

#[macro_export]
macro_rules! bank_seeds {
    ($owner:expr, $name:expr) => {
        &[$owner.as_ref(), $name.as_bytes()]
    };
}

#[macro_export]
macro_rules! project_seeds {
    ($bank:expr, $bank_bump:expr) => {
        &[$bank.as_ref(), &[$bank_bump]]
    };
}

/// A derived program address and the bump that took it off the curve.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

impl From<(Pubkey, u8)> for DerivedAddress {
    fn from((address, bump): (Pubkey, u8)) -> Self {
        Self { address, bump }
    }
}

/// Derives a program address from `seeds`, failing instead of panicking when no bump in
/// `255..=0` yields an off-curve address or a seed is too long.
pub fn derive(
    seeds: &[&[u8]],
    program_id: &Pubkey,
    which: &'static str,
) -> InterfaceResult<DerivedAddress> {
    Pubkey::try_find_program_address(seeds, program_id)
        .map(DerivedAddress::from)
        .ok_or(InterfaceError::Derivation(which))
}

pub fn find_bank_address(
    owner: &Pubkey,
    name: &str,
    program_id: &Pubkey,
) -> InterfaceResult<DerivedAddress> {
    if name.len() > MAX_NAME_LEN {
        return Err(InterfaceError::NameTooLong(name.len()));
    }
    derive(bank_seeds!(owner, name), program_id, "bank")
}

pub fn find_project_address(
    bank: &Pubkey,
    bank_bump: u8,
    program_id: &Pubkey,
) -> InterfaceResult<DerivedAddress> {
    derive(project_seeds!(bank, bank_bump), program_id, "project")
}

/// The bank and project addresses for a project owned by `owner` with the given `name`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProjectAddresses {
    pub bank: DerivedAddress,
    pub project: DerivedAddress,
}

impl ProjectAddresses {
    pub fn derive(owner: &Pubkey, name: &str, program_id: &Pubkey) -> InterfaceResult<Self> {
        let bank = find_bank_address(owner, name, program_id)?;
        let project = find_project_address(&bank.address, bank.bump, program_id)?;
        Ok(Self { bank, project })
    }
}
