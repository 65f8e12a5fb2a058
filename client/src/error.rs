use std::{
    fmt,
    path::PathBuf,
};

use crowdfund_interface::{
    error::{
        CrowdfundError,
        InterfaceError,
    },
    Pubkey,
};

/// The failure kinds surfaced by client operations.
///
/// Operations return `anyhow::Result` with context attached; recover the kind with
/// `error.downcast_ref::<ClientError>()`.
#[derive(Debug)]
pub enum ClientError {
    /// A keypair file is missing or malformed.
    FileRead { path: PathBuf, reason: String },
    /// A parameter couldn't be encoded into instruction data.
    Encoding(String),
    /// No valid program address exists for a set of seeds.
    Derivation(String),
    /// The RPC node rejected a request, timed out, or returned a transaction error.
    Submission {
        reason: String,
        /// Set when the failure is a custom error returned by the `crowdfund` program.
        program_error: Option<CrowdfundError>,
    },
    /// An account fetched from the ledger isn't a valid project.
    AccountData {
        address: Option<Pubkey>,
        reason: String,
    },
}

impl ClientError {
    pub fn submission(reason: impl fmt::Display) -> Self {
        Self::Submission {
            reason: reason.to_string(),
            program_error: None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileRead { path, reason } => {
                write!(f, "failed to read {}: {reason}", path.display())
            }
            Self::Encoding(reason) => write!(f, "encoding error: {reason}"),
            Self::Derivation(reason) => write!(f, "derivation error: {reason}"),
            Self::Submission {
                reason,
                program_error: Some(program_error),
            } => write!(f, "submission error: {program_error} ({reason})"),
            Self::Submission {
                reason,
                program_error: None,
            } => write!(f, "submission error: {reason}"),
            Self::AccountData {
                address: Some(address),
                reason,
            } => write!(f, "invalid project account {address}: {reason}"),
            Self::AccountData {
                address: None,
                reason,
            } => write!(f, "invalid project account: {reason}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<InterfaceError> for ClientError {
    fn from(error: InterfaceError) -> Self {
        match error {
            InterfaceError::Encoding(_) => Self::Encoding(error.to_string()),
            InterfaceError::Derivation(_) | InterfaceError::NameTooLong(_) => {
                Self::Derivation(error.to_string())
            }
            InterfaceError::CorruptedProjectData(reason) => Self::AccountData {
                address: None,
                reason,
            },
        }
    }
}
