use anchor_lang::prelude::*;

use crate::constants::{ADMIN_CONFIG_SEED, PLAN_CHUNK_SEED};
use crate::state::{AdminConfig, PlanChunk, PlanEntry, VestingAccount};

/// Corrective full replacement of a plan chunk's entries.
pub fn update_plan_chunk(ctx: Context<UpdatePlanChunk>, entries: Vec<PlanEntry>) -> Result<()> {
    ctx.accounts.admin_config.authorize(&ctx.accounts.admin.key())?;

    let vesting_key = ctx.accounts.vesting_account.key();
    let total_amount = ctx.accounts.vesting_account.total_amount;
    let chunk = &mut ctx.accounts.plan_chunk;
    chunk.ensure_owned_by(&vesting_key)?;

    let previous_digest = chunk.digest();
    let previous_count = chunk.entries.len() as u32;
    chunk.replace(entries, total_amount)?;

    msg!(
        "plan chunk replaced: {} -> {} entries",
        previous_count,
        chunk.entries.len()
    );
    emit!(PlanChunkReplaced {
        vesting_account: vesting_key,
        previous_digest,
        digest: chunk.digest(),
        previous_count,
        entry_count: chunk.entries.len() as u32,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdatePlanChunk<'info> {
    pub vesting_account: Box<Account<'info, VestingAccount>>,

    #[account(
        mut,
        seeds = [PLAN_CHUNK_SEED, vesting_account.key().as_ref()],
        bump
    )]
    pub plan_chunk: Box<Account<'info, PlanChunk>>,

    pub admin: Signer<'info>,

    #[account(seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,
}

#[event]
pub struct PlanChunkReplaced {
    pub vesting_account: Pubkey,
    pub previous_digest: [u8; 32],
    pub digest: [u8; 32],
    pub previous_count: u32,
    pub entry_count: u32,
}
