use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
    ValueEnum,
};
use crowdfund_client::{
    context::{
        ClientConfig,
        ProgramSource,
        DEFAULT_PROGRAM_KEYPAIR_PATH,
        DEFAULT_RPC_URL,
    },
    keypair::default_payer_path,
    transactions::DEFAULT_FUND_AMOUNT,
};
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Parser)]
#[command(name = "crowdfund", version, about = "Create and fund crowdfund projects")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// JSON RPC URL for the cluster.
    #[arg(short = 'u', long = "url", global = true, default_value = DEFAULT_RPC_URL)]
    pub json_rpc_url: String,

    /// Keypair that pays for airdrops and transfers, and the default owner or creditor.
    /// Defaults to ~/.config/solana/id.json.
    #[arg(short = 'k', long = "payer", global = true, value_name = "KEYPAIR")]
    pub payer: Option<PathBuf>,

    /// The program's deploy keypair.
    #[arg(
        long,
        global = true,
        value_name = "KEYPAIR",
        default_value = DEFAULT_PROGRAM_KEYPAIR_PATH,
        conflicts_with = "program_id"
    )]
    pub program_keypair: PathBuf,

    /// The program id, used instead of reading the deploy keypair.
    #[arg(long, global = true, value_name = "PUBKEY")]
    pub program_id: Option<Pubkey>,

    #[arg(long, global = true, value_enum, default_value_t = Commitment::Confirmed)]
    pub commitment: Commitment,

    /// Only print results.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Commitment {
    Processed,
    Confirmed,
    Finalized,
}

impl From<Commitment> for CommitmentConfig {
    fn from(value: Commitment) -> Self {
        match value {
            Commitment::Processed => CommitmentConfig::processed(),
            Commitment::Confirmed => CommitmentConfig::confirmed(),
            Commitment::Finalized => CommitmentConfig::finalized(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a project and its bank.
    Create {
        name: String,
        /// Funding target in lamports.
        target: u64,
        /// Project owner keypair. Defaults to the payer.
        #[arg(long, value_name = "KEYPAIR")]
        owner: Option<PathBuf>,
    },
    /// Contribute lamports to a project.
    Compliment {
        project: Pubkey,
        /// Contribution in lamports.
        amount: u64,
        /// Contributor keypair. Defaults to the payer.
        #[arg(long, value_name = "KEYPAIR")]
        creditor: Option<PathBuf>,
    },
    /// Withdraw a funded project's bank to its owner.
    Withdraw {
        project: Pubkey,
        /// Project owner keypair. Defaults to the payer.
        #[arg(long, value_name = "KEYPAIR")]
        owner: Option<PathBuf>,
    },
    /// Show a project's on-chain state.
    Show { project: Pubkey },
    /// Airdrop lamports to the payer.
    Airdrop {
        #[arg(default_value_t = DEFAULT_FUND_AMOUNT)]
        lamports: u64,
    },
    /// Fund a fresh creator from the payer and create a sample project with it.
    Demo {
        #[arg(long, default_value = "crowdfund")]
        name: String,
        #[arg(long, default_value_t = DEFAULT_FUND_AMOUNT)]
        target: u64,
    },
}

impl GlobalArgs {
    pub fn client_config(&self) -> ClientConfig {
        let program = match self.program_id {
            Some(id) => ProgramSource::Id(id),
            None => ProgramSource::KeypairFile(self.program_keypair.clone()),
        };

        ClientConfig {
            json_rpc_url: self.json_rpc_url.clone(),
            program,
            payer_keypair: self.payer.clone().unwrap_or_else(default_payer_path),
            commitment: self.commitment.into(),
            debug_logs: !self.quiet,
        }
    }
}
