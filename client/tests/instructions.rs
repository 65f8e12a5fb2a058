use crowdfund_client::project::{
    create_project_instruction,
    withdraw_instruction,
};
use crowdfund_interface::{
    instructions::InstructionTag,
    seeds::ProjectAddresses,
    state::ProjectInfo,
};
use solana_sdk::pubkey::Pubkey;

#[test]
fn create_project_accounts_and_data() {
    let program_id = Pubkey::new_unique();
    let owner = Pubkey::new_unique();

    let (ix, addresses) =
        create_project_instruction(&program_id, &owner, "crowdfund", 10_000_000_000).unwrap();
    assert_eq!(
        addresses,
        ProjectAddresses::derive(&owner, "crowdfund", &program_id).unwrap()
    );
    assert_eq!(ix.program_id, program_id);

    let metas: Vec<_> = ix
        .accounts
        .iter()
        .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
        .collect();
    assert_eq!(
        metas,
        vec![
            (solana_system_interface::program::ID, false, false),
            (owner, true, true),
            (addresses.bank.address, false, true),
            (addresses.project.address, false, true),
        ]
    );

    assert_eq!(ix.data[0], InstructionTag::CreateProject as u8);
    assert_eq!(ix.data.len(), 1 + 8 + 4 + "crowdfund".len() + 1);
    assert_eq!(&ix.data[1..9], &10_000_000_000u64.to_le_bytes());
    assert_eq!(&ix.data[13..22], b"crowdfund");
    assert_eq!(*ix.data.last().unwrap(), addresses.project.bump);
}

#[test]
fn create_project_instruction_is_deterministic() {
    let program_id = Pubkey::new_unique();
    let owner = Pubkey::new_unique();

    let (first, _) = create_project_instruction(&program_id, &owner, "crowdfund", 1).unwrap();
    let (second, _) = create_project_instruction(&program_id, &owner, "crowdfund", 1).unwrap();
    assert_eq!(first, second);
}

#[test]
fn withdraw_accounts_and_data() {
    let program_id = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let project_address = Pubkey::new_unique();
    let project = ProjectInfo {
        bank: Pubkey::new_unique(),
        owner,
        milestone: 10,
        raised: 10,
        name: "crowdfund".into(),
    };

    let ix = withdraw_instruction(&program_id, &owner, &project_address, &project);
    let metas: Vec<_> = ix
        .accounts
        .iter()
        .map(|meta| (meta.pubkey, meta.is_signer, meta.is_writable))
        .collect();
    assert_eq!(
        metas,
        vec![
            (solana_system_interface::program::ID, false, false),
            (owner, true, true),
            (project_address, false, true),
            (project.bank, false, true),
        ]
    );
    assert_eq!(ix.data, vec![InstructionTag::WithdrawFunds as u8]);
}
