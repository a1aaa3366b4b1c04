pub mod initialize_deployer;
pub mod initialize;
pub mod remove_admin;
pub mod init_token_info;
pub mod lockup_vault;
pub mod create_vesting;
pub mod user_create_vesting;
pub mod append_yearly_plan;
pub mod update_plan_chunk;
pub mod do_vesting;
pub mod emergency_stop;
pub mod close_vesting_account;
pub mod emit_vesting_info;

pub use initialize_deployer::*;
pub use initialize::*;
pub use remove_admin::*;
pub use init_token_info::*;
pub use lockup_vault::*;
pub use create_vesting::*;
pub use user_create_vesting::*;
pub use append_yearly_plan::*;
pub use update_plan_chunk::*;
pub use do_vesting::*;
pub use emergency_stop::*;
pub use close_vesting_account::*;
pub use emit_vesting_info::*;
