use std::fmt;

/// Custom error codes returned by the on-chain `crowdfund` program as
/// `InstructionError::Custom(code)`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::FromRepr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum CrowdfundError {
    InvalidInstruction,
    IllegalCreator,
    InvalidProject,
    UnexpectedBankAddress,
    UnexpectedProjectAddress,
    UnexpectedBump,
    BankAddressCollision,
    ProjectAddressCollision,
    LargeProjectInfo,
    IllegalDonator,
    CorruptedProjectData,
    InactiveProject,
    BankAddressMismatch,
    IllegalProjectAddressOwner,
    IllegalWithdrawer,
    UnfulfilledMilestone,
}

impl CrowdfundError {
    /// Maps a raw `InstructionError::Custom` code back to a [`CrowdfundError`].
    pub fn from_code(code: u32) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }
}

impl From<CrowdfundError> for &'static str {
    fn from(value: CrowdfundError) -> Self {
        match value {
            CrowdfundError::InvalidInstruction => "Unexpected instruction",
            CrowdfundError::IllegalCreator => "Project creator must sign",
            CrowdfundError::InvalidProject => "No such project exists",
            CrowdfundError::UnexpectedBankAddress => "Bank address doesn't match its seeds",
            CrowdfundError::UnexpectedProjectAddress => "Project address doesn't match its seeds",
            CrowdfundError::UnexpectedBump => "Project bump doesn't match the derived bump",
            CrowdfundError::BankAddressCollision => "Bank account already exists",
            CrowdfundError::ProjectAddressCollision => "Project account already exists",
            CrowdfundError::LargeProjectInfo => "Project info is too large",
            CrowdfundError::IllegalDonator => "Creditor must sign",
            CrowdfundError::CorruptedProjectData => "Project account data is corrupted",
            CrowdfundError::InactiveProject => "Project has already been withdrawn",
            CrowdfundError::BankAddressMismatch => "Bank doesn't belong to the project",
            CrowdfundError::IllegalProjectAddressOwner => "Project isn't owned by the program",
            CrowdfundError::IllegalWithdrawer => "Only the project owner can withdraw",
            CrowdfundError::UnfulfilledMilestone => "Project hasn't reached its milestone",
        }
    }
}

impl fmt::Display for CrowdfundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self, <&'static str>::from(*self))
    }
}

/// Errors produced while encoding instructions, deriving addresses, or decoding account data on
/// the client side.
#[derive(Debug)]
pub enum InterfaceError {
    /// A parameter value couldn't be represented in the instruction's binary layout.
    Encoding(String),
    /// No off-curve address exists for the given seeds.
    Derivation(&'static str),
    /// A project name is longer than a single seed allows, in bytes.
    NameTooLong(usize),
    /// Account bytes don't decode into the expected fixed layout.
    CorruptedProjectData(String),
}

impl fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(reason) => write!(f, "failed to encode instruction data: {reason}"),
            Self::Derivation(which) => write!(f, "no valid program address for the {which} seeds"),
            Self::NameTooLong(len) => write!(
                f,
                "project name is {len} bytes, the maximum is {}",
                crate::seeds::MAX_NAME_LEN
            ),
            Self::CorruptedProjectData(reason) => write!(f, "corrupted project data: {reason}"),
        }
    }
}

impl std::error::Error for InterfaceError {}

pub type InterfaceResult<T> = Result<T, InterfaceError>;
