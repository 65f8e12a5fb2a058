//! The `crowdfund` operations: create a project, contribute to it, and withdraw its funds.
//!
//! Each operation derives the addresses it needs, encodes the instruction, submits it in a single
//! transaction, and waits for confirmation. Nothing is retried.

use anyhow::Context;
use crowdfund_interface::{
    instructions::{
        pack_tagged,
        tag_only,
        ComplimentParams,
        CreateProjectParams,
        InstructionTag,
    },
    seeds::ProjectAddresses,
    state::ProjectInfo,
};
use solana_sdk::{
    instruction::{
        AccountMeta,
        Instruction,
    },
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
};

use crate::{
    context::CrowdfundContext,
    error::ClientError,
    logs::log_info,
    transactions::send_transaction,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CreatedProject {
    pub signature: Signature,
    pub project: Pubkey,
    pub bank: Pubkey,
}

/// Builds the create instruction for a project owned by `owner`, returning the derived addresses
/// alongside it.
///
/// Accounts: system program, owner (signer, writable), bank (writable), project (writable).
pub fn create_project_instruction(
    program_id: &Pubkey,
    owner: &Pubkey,
    name: &str,
    target: u64,
) -> Result<(Instruction, ProjectAddresses), ClientError> {
    let addresses = ProjectAddresses::derive(owner, name, program_id)?;
    let data = pack_tagged(&CreateProjectParams::new(
        target,
        name,
        addresses.project.bump,
    ))?;

    let instruction = Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(solana_system_interface::program::ID, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new(addresses.bank.address, false),
            AccountMeta::new(addresses.project.address, false),
        ],
        data,
    };

    Ok((instruction, addresses))
}

/// Builds the contribute instruction for the project at `project_address`.
///
/// Accounts: system program, creditor (signer, writable), project (writable), bank (writable).
pub fn compliment_instruction(
    program_id: &Pubkey,
    creditor: &Pubkey,
    project_address: &Pubkey,
    project: &ProjectInfo,
    amount: u64,
) -> Result<Instruction, ClientError> {
    let data = pack_tagged(&ComplimentParams::new(amount))?;

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(solana_system_interface::program::ID, false),
            AccountMeta::new(*creditor, true),
            AccountMeta::new(*project_address, false),
            AccountMeta::new(project.bank, false),
        ],
        data,
    })
}

/// Builds the withdraw instruction, which moves the bank's lamports to the project owner.
///
/// Accounts: system program, owner (signer, writable), project (writable), bank (writable).
pub fn withdraw_instruction(
    program_id: &Pubkey,
    owner: &Pubkey,
    project_address: &Pubkey,
    project: &ProjectInfo,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(solana_system_interface::program::ID, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new(*project_address, false),
            AccountMeta::new(project.bank, false),
        ],
        data: tag_only(InstructionTag::WithdrawFunds),
    }
}

pub async fn create_project(
    ctx: &CrowdfundContext,
    name: &str,
    target: u64,
    owner: &Keypair,
) -> anyhow::Result<CreatedProject> {
    let (instruction, addresses) =
        create_project_instruction(&ctx.program_id, &owner.pubkey(), name, target)
            .with_context(|| format!("Failed to build the create instruction for {name:?}"))?;

    if ctx.debug_logs {
        log_info(
            "Project",
            format!(
                "{} funded through {}",
                addresses.project.address, addresses.bank.address
            ),
        );
    }

    let signature = send_transaction(ctx, owner, &[], &[instruction]).await?;

    Ok(CreatedProject {
        signature,
        project: addresses.project.address,
        bank: addresses.bank.address,
    })
}

pub async fn compliment_project(
    ctx: &CrowdfundContext,
    project_address: &Pubkey,
    amount: u64,
    creditor: &Keypair,
) -> anyhow::Result<Signature> {
    let project = fetch_project(ctx, project_address).await?;
    let instruction = compliment_instruction(
        &ctx.program_id,
        &creditor.pubkey(),
        project_address,
        &project,
        amount,
    )?;

    send_transaction(ctx, creditor, &[], &[instruction]).await
}

pub async fn withdraw_funds(
    ctx: &CrowdfundContext,
    project_address: &Pubkey,
    owner: &Keypair,
) -> anyhow::Result<Signature> {
    let project = fetch_project(ctx, project_address).await?;
    let instruction =
        withdraw_instruction(&ctx.program_id, &owner.pubkey(), project_address, &project);

    send_transaction(ctx, owner, &[], &[instruction]).await
}

/// Fetches and decodes the project account at `address`.
pub async fn fetch_project(
    ctx: &CrowdfundContext,
    address: &Pubkey,
) -> anyhow::Result<ProjectInfo> {
    let account = ctx
        .rpc
        .get_account(address)
        .await
        .map_err(ClientError::submission)
        .with_context(|| format!("Failed to fetch project account {address}"))?;

    if account.owner != ctx.program_id {
        return Err(ClientError::AccountData {
            address: Some(*address),
            reason: format!("owned by {}, not {}", account.owner, ctx.program_id),
        }
        .into());
    }

    ProjectInfo::unpack(&account.data)
        .map_err(|e| ClientError::AccountData {
            address: Some(*address),
            reason: e.to_string(),
        })
        .map_err(anyhow::Error::from)
}
