//! Client for the `crowdfund` program: derives project addresses, encodes instructions, and
//! submits them over JSON-RPC.
//!
//! Every operation takes an explicit [`context::CrowdfundContext`] instead of relying on
//! process-wide connection or keypair state.

pub mod context;
pub mod error;
pub mod keypair;
pub mod logs;
pub mod pretty;
pub mod project;
pub mod transactions;

pub use error::ClientError;
pub use logs::{
    fmt_kv,
    LogColor,
};
