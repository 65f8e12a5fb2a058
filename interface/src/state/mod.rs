pub mod project_info;

pub use project_info::ProjectInfo;

pub const PUBKEY_SIZE: usize = 32;
pub const U64_SIZE: usize = core::mem::size_of::<u64>();
pub const U32_SIZE: usize = core::mem::size_of::<u32>();
