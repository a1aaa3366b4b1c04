use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{PlanEntry, TokenInfoArgs, VestingParams};

declare_id!("DcjmKSSKNxbSAwBQZx8wSAhosxBxQoyz3DdXuysMiPTy");

#[program]
pub mod chunked_vesting {
    use super::*;

    /// Binds the deploy admin singleton to the caller.
    pub fn initialize_deployer(ctx: Context<InitializeDeployer>) -> Result<()> {
        instructions::initialize_deployer(ctx)
    }

    /// Binds the scheduler admin; deployer only.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// Rebinds (`Some`) or disables (`None`) the scheduler admin; deployer only.
    pub fn remove_admin(ctx: Context<RemoveAdmin>, new_admin: Option<Pubkey>) -> Result<()> {
        instructions::remove_admin(ctx, new_admin)
    }

    pub fn init_token_info(ctx: Context<InitTokenInfo>, args: TokenInfoArgs) -> Result<()> {
        instructions::init_token_info(ctx, args)
    }

    /// Funds the admin token vault for a registered mint.
    pub fn lockup_vault(ctx: Context<LockupVault>, amount: u64) -> Result<()> {
        instructions::lockup_vault(ctx, amount)
    }

    pub fn create_vesting(ctx: Context<CreateVesting>, params: VestingParams) -> Result<()> {
        instructions::create_vesting(ctx, params)
    }

    /// Opens a child record carved out of a parent's escrowed pool.
    pub fn user_create_vesting(
        ctx: Context<UserCreateVesting>,
        params: VestingParams,
    ) -> Result<()> {
        instructions::user_create_vesting(ctx, params)
    }

    pub fn append_yearly_plan(
        ctx: Context<AppendYearlyPlan>,
        entries: Vec<PlanEntry>,
    ) -> Result<()> {
        instructions::append_yearly_plan(ctx, entries)
    }

    /// Replaces the stored schedule; released history must be preserved.
    pub fn update_plan_chunk(ctx: Context<UpdatePlanChunk>, entries: Vec<PlanEntry>) -> Result<()> {
        instructions::update_plan_chunk(ctx, entries)
    }

    pub fn do_vesting(
        ctx: Context<DoVesting>,
        amount: u64,
        vesting_time: i64,
        params: VestingParams,
    ) -> Result<()> {
        instructions::do_vesting(ctx, amount, vesting_time, params)
    }

    pub fn emergency_stop(ctx: Context<EmergencyStop>) -> Result<()> {
        instructions::emergency_stop(ctx)
    }

    /// Closes a drained record together with its plan chunk.
    pub fn close_vesting_account(ctx: Context<CloseVestingAccount>) -> Result<()> {
        instructions::close_vesting_account(ctx)
    }

    pub fn emit_vesting_info(ctx: Context<EmitVestingInfo>) -> Result<()> {
        instructions::emit_vesting_info(ctx)
    }
}
