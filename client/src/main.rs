//! `crowdfund`: command-line client for creating and funding crowdfund projects.

use clap::Parser;
use crowdfund_client::{
    context::CrowdfundContext,
    keypair::read_keypair_file,
    logs::{
        log_error,
        log_info,
        log_success,
    },
    pretty::PrettyProject,
    print_kv,
    project::{
        compliment_project,
        create_project,
        fetch_project,
        withdraw_funds,
        CreatedProject,
    },
    transactions::{
        fund_account,
        transfer,
        LAMPORTS_PER_SOL,
    },
};
use solana_sdk::signature::{
    Keypair,
    Signer,
};

use crate::cli::{
    Cli,
    Command,
};

mod cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        log_error("Error", format!("{error:?}"));
        std::process::exit(-1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.global.client_config();
    let ctx = match cli.command {
        Command::Show { .. } => CrowdfundContext::read_only(config)?,
        _ => CrowdfundContext::new(config)?,
    };

    match cli.command {
        Command::Create {
            name,
            target,
            owner,
        } => {
            let owner = signer_or_payer(&ctx, owner)?;
            let created = create_project(&ctx, &name, target, owner.as_ref()).await?;
            print_created(&created);
        }
        Command::Compliment {
            project,
            amount,
            creditor,
        } => {
            let creditor = signer_or_payer(&ctx, creditor)?;
            let signature = compliment_project(&ctx, &project, amount, creditor.as_ref()).await?;
            print_kv!("Signature", signature);
        }
        Command::Withdraw { project, owner } => {
            let owner = signer_or_payer(&ctx, owner)?;
            let signature = withdraw_funds(&ctx, &project, owner.as_ref()).await?;
            print_kv!("Signature", signature);
        }
        Command::Show { project } => {
            let info = fetch_project(&ctx, &project).await?;
            println!(
                "{}",
                PrettyProject {
                    address: &project,
                    project: &info,
                }
            );
        }
        Command::Airdrop { lamports } => {
            let signature = fund_account(&ctx, &ctx.payer()?.pubkey(), lamports).await?;
            print_kv!("Signature", signature);
        }
        Command::Demo { name, target } => {
            // Cover the transfer plus the payer's own fees.
            let airdrop = target.saturating_add(LAMPORTS_PER_SOL);
            let payer = ctx.payer()?;
            fund_account(&ctx, &payer.pubkey(), airdrop).await?;

            let creator = Keypair::new();
            log_info("Project creator", creator.pubkey());
            transfer(&ctx, payer, &creator.pubkey(), target).await?;

            let created = create_project(&ctx, &name, target, &creator).await?;
            log_success("Created project", created.signature);
            print_created(&created);
        }
    }

    Ok(())
}

/// A signer loaded from `path`, or the context's payer when no path is given.
enum CliSigner<'a> {
    Payer(&'a Keypair),
    Loaded(Keypair),
}

impl AsRef<Keypair> for CliSigner<'_> {
    fn as_ref(&self) -> &Keypair {
        match self {
            Self::Payer(keypair) => keypair,
            Self::Loaded(keypair) => keypair,
        }
    }
}

fn signer_or_payer(
    ctx: &CrowdfundContext,
    path: Option<std::path::PathBuf>,
) -> anyhow::Result<CliSigner<'_>> {
    match path {
        Some(path) => Ok(CliSigner::Loaded(read_keypair_file(path)?)),
        None => Ok(CliSigner::Payer(ctx.payer()?)),
    }
}

fn print_created(created: &CreatedProject) {
    print_kv!("Signature", created.signature);
    print_kv!("Project", created.project);
    print_kv!("Bank", created.bank);
}
