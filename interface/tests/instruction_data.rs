use borsh::BorshDeserialize;
use crowdfund_interface::instructions::{
    pack_tagged,
    tag_only,
    ComplimentParams,
    CreateProjectParams,
    InstructionTag,
};

#[test]
fn create_project_scenario_decodes_back() {
    let params = CreateProjectParams::new(10_000_000_000, "crowdfund", 7);
    let data = pack_tagged(&params).unwrap();

    let (tag, mut payload) = data.split_first().unwrap();
    assert_eq!(InstructionTag::try_from(*tag), Ok(InstructionTag::CreateProject));

    let decoded = CreateProjectParams::deserialize(&mut payload).unwrap();
    assert!(payload.is_empty());
    assert_eq!(decoded.target, 10_000_000_000);
    assert_eq!(decoded.name, "crowdfund");
    assert_eq!(decoded.project_bump, 7);
}

#[test]
fn create_project_length_formula() {
    for (target, name) in [
        (0, ""),
        (1, "a"),
        (u64::MAX, "crowdfund"),
        (42, "a name with thirty-two bytes...."),
    ] {
        let data = pack_tagged(&CreateProjectParams::new(target, name, 254)).unwrap();
        assert_eq!(data.len(), 1 + 8 + 4 + name.len() + 1);
        assert_eq!(&data[1..9], &target.to_le_bytes());
        assert_eq!(&data[9..13], &(name.len() as u32).to_le_bytes());
        assert_eq!(&data[13..13 + name.len()], name.as_bytes());
        assert_eq!(data[data.len() - 1], 254);
    }
}

#[test]
fn compliment_scenario() {
    let data = pack_tagged(&ComplimentParams::new(500_000_000)).unwrap();
    assert_eq!(data[0], InstructionTag::ComplimentProject as u8);
    assert_eq!(
        ComplimentParams::try_from_slice(&data[1..]).unwrap(),
        ComplimentParams::new(500_000_000)
    );
}

#[test]
fn withdraw_is_tag_only() {
    assert_eq!(tag_only(InstructionTag::WithdrawFunds), vec![2]);
}
