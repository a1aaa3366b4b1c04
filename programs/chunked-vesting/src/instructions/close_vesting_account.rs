use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{ADMIN_CONFIG_SEED, PLAN_CHUNK_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::state::{AdminConfig, PlanChunk, VestingAccount};

/// Closes a record and its plan chunk once the beneficiary vault is drained.
/// Rent from both goes back to the admin.
pub fn close_vesting_account(ctx: Context<CloseVestingAccount>) -> Result<()> {
    ctx.accounts.admin_config.authorize(&ctx.accounts.admin.key())?;

    let record = &ctx.accounts.vesting_account;
    require_keys_eq!(
        ctx.accounts.beneficiary_vault.key(),
        record.beneficiary_vault,
        VestingError::InvalidVault
    );
    require!(
        ctx.accounts.beneficiary_vault.amount == 0,
        VestingError::VaultNotEmpty
    );

    emit!(VestingClosed {
        vesting_account: record.key(),
        beneficiary: record.beneficiary,
        vesting_id: record.vesting_id,
        released_amount: record.released_amount,
        total_amount: record.total_amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CloseVestingAccount<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,

    #[account(
        mut,
        close = admin,
        seeds = [
            VESTING_SEED,
            vesting_account.beneficiary.as_ref(),
            vesting_account.token_mint.as_ref(),
            &vesting_account.vesting_id.to_le_bytes()
        ],
        bump
    )]
    pub vesting_account: Box<Account<'info, VestingAccount>>,

    #[account(
        mut,
        close = admin,
        seeds = [PLAN_CHUNK_SEED, vesting_account.key().as_ref()],
        bump
    )]
    pub plan_chunk: Box<Account<'info, PlanChunk>>,

    pub beneficiary_vault: Box<Account<'info, TokenAccount>>,
}

#[event]
pub struct VestingClosed {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub vesting_id: u64,
    pub released_amount: u64,
    pub total_amount: u64,
}
