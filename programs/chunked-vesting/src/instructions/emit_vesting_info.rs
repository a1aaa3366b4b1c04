use anchor_lang::prelude::*;

use crate::constants::PLAN_CHUNK_SEED;
use crate::state::{PlanChunk, VestingAccount};

/// Read-only: emits the release position of a record as of the current clock.
pub fn emit_vesting_info(ctx: Context<EmitVestingInfo>) -> Result<()> {
    let record = &ctx.accounts.vesting_account;
    let chunk = &ctx.accounts.plan_chunk;
    let now = Clock::get()?.unix_timestamp;

    emit!(VestingInfo {
        vesting_account: record.key(),
        beneficiary: record.beneficiary,
        total_amount: record.total_amount,
        released_amount: record.released_amount,
        delegated_amount: record.delegated_amount,
        releasable_amount: chunk.releasable_at(now)?,
        next_release_time: chunk.next_release_time().unwrap_or(0),
        entry_count: chunk.entries.len() as u32,
        is_active: record.is_active,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingInfo<'info> {
    pub vesting_account: Box<Account<'info, VestingAccount>>,

    #[account(
        seeds = [PLAN_CHUNK_SEED, vesting_account.key().as_ref()],
        bump
    )]
    pub plan_chunk: Box<Account<'info, PlanChunk>>,
}

#[event]
pub struct VestingInfo {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub released_amount: u64,
    pub delegated_amount: u64,
    pub releasable_amount: u64,
    pub next_release_time: i64,
    pub entry_count: u32,
    pub is_active: bool,
}
