use std::time::Duration;

use anyhow::Context;
use crowdfund_interface::{
    error::CrowdfundError,
    instructions::InstructionTag,
};
use solana_client::{
    client_error::{
        ClientError as RpcClientError,
        ClientErrorKind,
    },
    rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction_error::InstructionError;
use solana_sdk::{
    instruction::Instruction,
    message::Message,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};
use solana_transaction_error::TransactionError;

use crate::{
    context::CrowdfundContext,
    error::ClientError,
    fmt_kv,
    logs::{
        log_error,
        log_info,
        log_success,
    },
};

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
pub const DEFAULT_FUND_AMOUNT: u64 = 10 * LAMPORTS_PER_SOL;
const AIRDROP_CONFIRMATION_ATTEMPTS: usize = 10;
const AIRDROP_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Signs and submits `instructions` in a single transaction paid for by `payer`, then waits for
/// confirmation at the context's commitment level.
///
/// `payer` always signs; `signers` only needs to hold the additional signers. Failures are not
/// retried and surface as [`ClientError::Submission`].
pub async fn send_transaction(
    ctx: &CrowdfundContext,
    payer: &Keypair,
    signers: &[&Keypair],
    instructions: &[Instruction],
) -> anyhow::Result<Signature> {
    let blockhash = ctx
        .rpc
        .get_latest_blockhash()
        .await
        .map_err(ClientError::submission)
        .context("Failed to get the latest blockhash")?;

    let msg = Message::new(instructions, Some(&payer.pubkey()));
    let all_signers = std::iter::once(payer)
        .chain(
            signers
                .iter()
                .copied()
                .filter(|signer| signer.pubkey() != payer.pubkey()),
        )
        .collect::<Vec<_>>();

    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(&all_signers, blockhash)
        .map_err(ClientError::submission)
        .context("Failed to sign transaction")?;

    match ctx.rpc.send_and_confirm_transaction(&tx).await {
        Ok(sig) => {
            if ctx.debug_logs {
                let sender_info = fmt_kv("sender", payer.pubkey());
                log_success("Signature", format!("{sig}\n{sender_info}"));
            }
            Ok(sig)
        }
        Err(error) => {
            let program_error = log_instruction_error(&error, instructions, &ctx.program_id);
            log_info("Payer", payer.pubkey());

            Err(ClientError::Submission {
                reason: error.to_string(),
                program_error,
            })
            .context("Failed transaction submission")
        }
    }
}

/// Airdrops `lamports` to `recipient` and polls for confirmation a bounded number of times.
pub async fn fund_account(
    ctx: &CrowdfundContext,
    recipient: &Pubkey,
    lamports: u64,
) -> anyhow::Result<Signature> {
    let airdrop_signature = ctx
        .rpc
        .request_airdrop(recipient, lamports)
        .await
        .map_err(ClientError::submission)
        .context("Failed to request airdrop")?;

    await_confirmation(
        ctx,
        &airdrop_signature,
        AIRDROP_CONFIRMATION_ATTEMPTS,
        AIRDROP_POLL_INTERVAL,
    )
    .await
    .context("Airdrop timed out")?;

    if ctx.debug_logs {
        log_success("Airdrop", fmt_kv(recipient, lamports));
    }
    Ok(airdrop_signature)
}

/// Polls `signature` up to `attempts` times, sleeping `interval` between polls.
async fn await_confirmation(
    ctx: &CrowdfundContext,
    signature: &Signature,
    attempts: usize,
    interval: Duration,
) -> anyhow::Result<()> {
    for _ in 0..attempts {
        let confirmed = ctx
            .rpc
            .confirm_transaction(signature)
            .await
            .map_err(ClientError::submission)
            .context("Couldn't confirm airdrop")?;
        if confirmed {
            return Ok(());
        }
        tokio::time::sleep(interval).await;
    }

    Err(ClientError::submission(format!("airdrop not confirmed after {attempts} attempts")).into())
}

/// Moves `lamports` from `from` to `to` with a system transfer.
pub async fn transfer(
    ctx: &CrowdfundContext,
    from: &Keypair,
    to: &Pubkey,
    lamports: u64,
) -> anyhow::Result<Signature> {
    let instruction = solana_system_interface::instruction::transfer(&from.pubkey(), to, lamports);
    send_transaction(ctx, from, &[], &[instruction]).await
}

/// Extracts the transaction error from either a failed preflight simulation or a failed
/// confirmation.
fn transaction_error(error: &RpcClientError) -> Option<TransactionError> {
    match error.kind() {
        ClientErrorKind::RpcError(RpcResponseError {
            data:
                RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                    err: Some(ui_err),
                    ..
                }),
            ..
        }) => Some(ui_err.clone().into()),
        ClientErrorKind::TransactionError(err) => Some(err.clone()),
        _ => None,
    }
}

/// Logs a readable description of an instruction failure and returns the `crowdfund` program
/// error, if that's what caused it.
pub fn log_instruction_error(
    error: &RpcClientError,
    instructions: &[Instruction],
    program_id: &Pubkey,
) -> Option<CrowdfundError> {
    let Some(TransactionError::InstructionError(ixn_idx, ixn_error)) = transaction_error(error)
    else {
        log_error("Submission error", error);
        return None;
    };

    let instruction = instructions.get(ixn_idx as usize);
    match (instruction, ixn_error) {
        (Some(instruction), InstructionError::Custom(code))
            if instruction.program_id == *program_id =>
        {
            let tag = instruction
                .data
                .first()
                .and_then(|tag| InstructionTag::try_from(*tag).ok());
            let program_error = CrowdfundError::from_code(code);
            match (tag, program_error) {
                (Some(tag), Some(program_error)) => {
                    log_error("Crowdfund error", format!("({tag}, {program_error})"))
                }
                _ => log_error("Crowdfund error", format!("unknown custom error code {code}")),
            }
            program_error
        }
        (_, ixn_error) => {
            log_error("Instruction error", format!("#{ixn_idx}: {ixn_error}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use solana_client::nonblocking::rpc_client::RpcClient;

    use super::*;

    fn failed_instruction(index: u8, code: u32) -> RpcClientError {
        RpcClientError::from(TransactionError::InstructionError(
            index,
            InstructionError::Custom(code),
        ))
    }

    fn withdraw_at(program_id: Pubkey) -> Instruction {
        Instruction::new_with_bytes(program_id, &[InstructionTag::WithdrawFunds as u8], vec![])
    }

    #[test]
    fn custom_code_from_the_program_is_decoded() {
        let program_id = Pubkey::new_unique();
        let error = failed_instruction(0, 15);

        assert_eq!(
            log_instruction_error(&error, &[withdraw_at(program_id)], &program_id),
            Some(CrowdfundError::UnfulfilledMilestone)
        );
    }

    #[test]
    fn custom_code_from_another_program_is_ignored() {
        let program_id = Pubkey::new_unique();
        let error = failed_instruction(0, 15);

        assert_eq!(
            log_instruction_error(&error, &[withdraw_at(Pubkey::new_unique())], &program_id),
            None
        );
    }

    #[test]
    fn out_of_range_instruction_index_is_ignored() {
        let program_id = Pubkey::new_unique();
        let error = failed_instruction(5, 15);

        assert_eq!(
            log_instruction_error(&error, &[withdraw_at(program_id)], &program_id),
            None
        );
    }

    #[test]
    fn unknown_code_and_non_instruction_errors_are_ignored() {
        let program_id = Pubkey::new_unique();
        let instructions = [withdraw_at(program_id)];

        let unknown_code = failed_instruction(0, 200);
        assert_eq!(log_instruction_error(&unknown_code, &instructions, &program_id), None);

        let transport = RpcClientError::from(ClientErrorKind::Custom("connection reset".into()));
        assert_eq!(log_instruction_error(&transport, &instructions, &program_id), None);
    }

    #[tokio::test]
    async fn unconfirmed_airdrop_is_a_submission_error() {
        let ctx = CrowdfundContext::with_rpc_client(
            RpcClient::new_mock("sig_not_found".to_string()),
            Pubkey::new_unique(),
            None,
            false,
        );

        let error = await_confirmation(&ctx, &Signature::default(), 3, Duration::ZERO)
            .await
            .unwrap_err();
        match error.downcast_ref::<ClientError>() {
            Some(ClientError::Submission {
                reason,
                program_error: None,
            }) => assert_eq!(reason, "airdrop not confirmed after 3 attempts"),
            other => panic!("expected a submission error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fund_account_returns_the_confirmed_signature() {
        let ctx = CrowdfundContext::with_rpc_client(
            RpcClient::new_mock("succeeds".to_string()),
            Pubkey::new_unique(),
            None,
            false,
        );

        let signature = fund_account(&ctx, &Pubkey::new_unique(), LAMPORTS_PER_SOL)
            .await
            .unwrap();
        assert_eq!(signature, Signature::from([8; 64]));
    }
}
