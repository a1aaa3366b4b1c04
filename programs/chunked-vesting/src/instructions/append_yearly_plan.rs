use anchor_lang::prelude::*;

use crate::constants::{ADMIN_CONFIG_SEED, PLAN_CHUNK_SEED};
use crate::error::VestingError;
use crate::state::{AdminConfig, PlanChunk, PlanEntry, VestingAccount};

/// Appends a batch to the record's plan chunk. For a delegated child every
/// entry must be covered by, and is debited from, the parent's schedule.
pub fn append_yearly_plan(ctx: Context<AppendYearlyPlan>, entries: Vec<PlanEntry>) -> Result<()> {
    ctx.accounts.admin_config.authorize(&ctx.accounts.admin.key())?;

    let vesting_key = ctx.accounts.vesting_account.key();
    let record = &ctx.accounts.vesting_account;
    let chunk = &mut ctx.accounts.plan_chunk;
    chunk.ensure_owned_by(&vesting_key)?;
    chunk.validate_append(&entries, record.total_amount)?;

    let mut parent_debited = 0u64;
    if record.is_delegated() {
        let parent = ctx
            .accounts
            .parent_vesting_account
            .as_ref()
            .ok_or(VestingError::ParentPlanNotFound)?;
        let parent_key = parent.key();
        record.ensure_child_of(&parent_key, parent)?;

        let parent_chunk = ctx
            .accounts
            .parent_plan_chunk
            .as_deref_mut()
            .ok_or(VestingError::ParentPlanNotFound)?;
        parent_chunk.ensure_owned_by(&parent_key)?;

        let coverage = parent_chunk.plan_coverage(&entries, chunk.entries.len())?;
        parent_debited = coverage.total()?;
        parent_chunk.apply_coverage(&coverage)?;
    }

    let added = chunk.append(&entries, record.total_amount)?;

    emit!(PlanAppended {
        vesting_account: vesting_key,
        entries_added: entries.len() as u32,
        amount_added: added,
        entry_count: chunk.entries.len() as u32,
        parent_debited,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AppendYearlyPlan<'info> {
    pub vesting_account: Box<Account<'info, VestingAccount>>,

    #[account(
        mut,
        seeds = [PLAN_CHUNK_SEED, vesting_account.key().as_ref()],
        bump
    )]
    pub plan_chunk: Box<Account<'info, PlanChunk>>,

    /// Required when `vesting_account` was delegated from a parent.
    pub parent_vesting_account: Option<Account<'info, VestingAccount>>,

    #[account(mut)]
    pub parent_plan_chunk: Option<Account<'info, PlanChunk>>,

    pub admin: Signer<'info>,

    #[account(seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,
}

#[event]
pub struct PlanAppended {
    pub vesting_account: Pubkey,
    pub entries_added: u32,
    pub amount_added: u64,
    pub entry_count: u32,
    pub parent_debited: u64,
}
