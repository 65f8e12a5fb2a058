//! The explicit context every operation receives: an RPC connection, the target program, and the
//! default payer.

use std::path::PathBuf;

use anyhow::Context;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
};

use crate::keypair::{
    default_payer_path,
    read_keypair_file,
};

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";
pub const DEFAULT_PROGRAM_KEYPAIR_PATH: &str = "target/deploy/crowdfund-keypair.json";

/// Where the `crowdfund` program's address comes from.
#[derive(Clone, Debug)]
pub enum ProgramSource {
    /// The program's deploy keypair, as written by `cargo build-sbf`.
    KeypairFile(PathBuf),
    Id(Pubkey),
}

impl ProgramSource {
    pub fn resolve(&self) -> anyhow::Result<Pubkey> {
        match self {
            Self::KeypairFile(path) => Ok(read_keypair_file(path)
                .context("Failed to load the program keypair")?
                .pubkey()),
            Self::Id(id) => Ok(*id),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub json_rpc_url: String,
    pub program: ProgramSource,
    pub payer_keypair: PathBuf,
    pub commitment: CommitmentConfig,
    /// Log signatures and submission details as transactions land.
    pub debug_logs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            json_rpc_url: DEFAULT_RPC_URL.to_string(),
            program: ProgramSource::KeypairFile(DEFAULT_PROGRAM_KEYPAIR_PATH.into()),
            payer_keypair: default_payer_path(),
            commitment: CommitmentConfig::confirmed(),
            debug_logs: true,
        }
    }
}

pub struct CrowdfundContext {
    pub rpc: RpcClient,
    pub program_id: Pubkey,
    /// Funds airdrops and transfers, and acts as the default owner or creditor. Absent for
    /// read-only contexts.
    payer: Option<Keypair>,
    pub debug_logs: bool,
}

impl CrowdfundContext {
    /// Loads the program id and payer keypair from `config` and connects to its RPC endpoint.
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let program_id = config.program.resolve()?;
        let payer =
            read_keypair_file(&config.payer_keypair).context("Failed to load the payer keypair")?;

        Ok(Self::from_parts(
            &config.json_rpc_url,
            config.commitment,
            program_id,
            Some(payer),
            config.debug_logs,
        ))
    }

    /// Like [`CrowdfundContext::new`], but never touches the payer keypair file. Only account
    /// reads are possible with the result.
    pub fn read_only(config: ClientConfig) -> anyhow::Result<Self> {
        let program_id = config.program.resolve()?;

        Ok(Self::from_parts(
            &config.json_rpc_url,
            config.commitment,
            program_id,
            None,
            config.debug_logs,
        ))
    }

    pub fn from_parts(
        json_rpc_url: &str,
        commitment: CommitmentConfig,
        program_id: Pubkey,
        payer: Option<Keypair>,
        debug_logs: bool,
    ) -> Self {
        Self::with_rpc_client(
            RpcClient::new_with_commitment(json_rpc_url.to_string(), commitment),
            program_id,
            payer,
            debug_logs,
        )
    }

    pub fn with_rpc_client(
        rpc: RpcClient,
        program_id: Pubkey,
        payer: Option<Keypair>,
        debug_logs: bool,
    ) -> Self {
        Self {
            rpc,
            program_id,
            payer,
            debug_logs,
        }
    }

    pub fn payer(&self) -> anyhow::Result<&Keypair> {
        self.payer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("No payer keypair was loaded for this context"))
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.rpc.commitment()
    }
}
