use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_sdk::pubkey::Pubkey;

use crate::{
    error::{
        InterfaceError,
        InterfaceResult,
    },
    state::{
        PUBKEY_SIZE,
        U32_SIZE,
        U64_SIZE,
    },
};

/// The smallest possible encoded project: two pubkeys, two u64s and an empty name.
pub const MIN_PROJECT_INFO_LEN: usize = PUBKEY_SIZE * 2 + U64_SIZE * 2 + U32_SIZE;

/// The state stored in a project account.
///
/// Fields are laid out positionally: bank, owner, milestone, raised, then the length-prefixed
/// name. The account is allocated with a fixed size, so any bytes after the name are ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectInfo {
    /// The PDA holding the contributed lamports.
    pub bank: Pubkey,
    /// The project creator, the only account allowed to withdraw.
    pub owner: Pubkey,
    /// The funding target in lamports.
    pub milestone: u64,
    /// The total contributed so far in lamports.
    pub raised: u64,
    pub name: String,
}

#[derive(BorshSerialize, BorshDeserialize)]
struct PackedProjectInfo {
    bank: [u8; PUBKEY_SIZE],
    owner: [u8; PUBKEY_SIZE],
    milestone: u64,
    raised: u64,
    name: String,
}

impl ProjectInfo {
    /// Decodes a project from raw account data.
    pub fn unpack(data: &[u8]) -> InterfaceResult<Self> {
        if data.len() < MIN_PROJECT_INFO_LEN {
            return Err(InterfaceError::CorruptedProjectData(format!(
                "expected at least {MIN_PROJECT_INFO_LEN} bytes, got {}",
                data.len()
            )));
        }

        let mut remaining = data;
        let packed = PackedProjectInfo::deserialize(&mut remaining)
            .map_err(|e| InterfaceError::CorruptedProjectData(e.to_string()))?;

        Ok(Self {
            bank: Pubkey::new_from_array(packed.bank),
            owner: Pubkey::new_from_array(packed.owner),
            milestone: packed.milestone,
            raised: packed.raised,
            name: packed.name,
        })
    }

    /// Encodes the project in the same layout the program writes.
    pub fn pack(&self) -> InterfaceResult<Vec<u8>> {
        let packed = PackedProjectInfo {
            bank: self.bank.to_bytes(),
            owner: self.owner.to_bytes(),
            milestone: self.milestone,
            raised: self.raised,
            name: self.name.clone(),
        };
        borsh::to_vec(&packed).map_err(|e| InterfaceError::Encoding(e.to_string()))
    }

    pub fn is_funded(&self) -> bool {
        self.raised >= self.milestone
    }

    /// Lamports still needed to reach the milestone.
    pub fn remaining(&self) -> u64 {
        self.milestone.saturating_sub(self.raised)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectInfo {
        ProjectInfo {
            bank: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            milestone: 10_000_000_000,
            raised: 2_500,
            name: "crowdfund".into(),
        }
    }

    #[test]
    fn positional_prefix() {
        let project = sample();
        let bytes = project.pack().unwrap();
        assert_eq!(&bytes[0..32], project.bank.as_ref());
        assert_eq!(&bytes[32..64], project.owner.as_ref());
        assert_eq!(bytes.len(), MIN_PROJECT_INFO_LEN + project.name.len());
    }

    #[test]
    fn unpack_all_fields() {
        let project = sample();
        let decoded = ProjectInfo::unpack(&project.pack().unwrap()).unwrap();
        assert_eq!(decoded.bank, project.bank);
        assert_eq!(decoded.owner, project.owner);
        assert_eq!(decoded.milestone, project.milestone);
        assert_eq!(decoded.raised, project.raised);
        assert_eq!(decoded.name, project.name);
    }

    #[test]
    fn trailing_account_bytes_are_ignored() {
        let project = sample();
        let mut bytes = project.pack().unwrap();
        bytes.extend_from_slice(&[0; 40]);
        assert_eq!(ProjectInfo::unpack(&bytes).unwrap(), project);
    }

    #[test]
    fn truncated_data_is_flagged() {
        let bytes = sample().pack().unwrap();
        // Cut the name short of its declared length.
        let truncated = &bytes[..bytes.len() - 1];
        assert!(matches!(
            ProjectInfo::unpack(truncated),
            Err(InterfaceError::CorruptedProjectData(_))
        ));
        assert!(matches!(
            ProjectInfo::unpack(&bytes[..64]),
            Err(InterfaceError::CorruptedProjectData(_))
        ));
    }

    #[test]
    fn invalid_utf8_name_is_flagged() {
        let mut bytes = ProjectInfo {
            name: "ab".into(),
            ..sample()
        }
        .pack()
        .unwrap();
        let len = bytes.len();
        bytes[len - 2] = 0xff;
        assert!(matches!(
            ProjectInfo::unpack(&bytes),
            Err(InterfaceError::CorruptedProjectData(_))
        ));
    }

    #[test]
    fn funding_progress() {
        let mut project = sample();
        assert!(!project.is_funded());
        assert_eq!(project.remaining(), 10_000_000_000 - 2_500);

        project.raised = project.milestone + 1;
        assert!(project.is_funded());
        assert_eq!(project.remaining(), 0);
    }
}
