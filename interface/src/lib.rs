//! Client-side view of the `crowdfund` program's ABI: instruction tags and payloads, PDA seed
//! conventions, the project account layout, and the program's custom error codes.

pub mod error;
pub mod instructions;
pub mod seeds;
pub mod state;

pub use solana_sdk::pubkey::Pubkey;
