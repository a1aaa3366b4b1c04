pub mod admin;
pub mod plan_chunk;
pub mod token_info;
pub mod vesting_account;

pub use admin::*;
pub use plan_chunk::*;
pub use token_info::*;
pub use vesting_account::*;
