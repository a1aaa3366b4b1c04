use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{ADMIN_CONFIG_SEED, PLAN_CHUNK_SEED, VAULT_AUTHORITY_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::state::{AdminConfig, PlanChunk, VestingAccount, VestingParams};
use crate::utils::vault::VaultSigner;

/// Releases the scheduled entry due at `vesting_time` for exactly `amount`.
///
/// The destination may be any token account of the record's mint; choosing
/// one other than the recorded `destination_token_account` is an admin
/// override and is flagged in the emitted event.
pub fn do_vesting(
    ctx: Context<DoVesting>,
    amount: u64,
    vesting_time: i64,
    params: VestingParams,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.admin_config.authorize(&admin)?;

    let now = Clock::get()?.unix_timestamp;
    let mint = ctx.accounts.token_mint.key();
    let destination = ctx.accounts.destination_token_account.key();

    let record = &mut ctx.accounts.vesting_account;
    require!(
        params.vesting_id == record.vesting_id,
        VestingError::InvalidParameters
    );
    require_keys_eq!(record.token_mint, mint, VestingError::InvalidMint);
    require_keys_eq!(
        ctx.accounts.origin_token_account.key(),
        record.beneficiary_vault,
        VestingError::InvalidVault
    );
    require_keys_eq!(
        ctx.accounts.destination_token_account.mint,
        mint,
        VestingError::InvalidMint
    );

    record.release(&mut ctx.accounts.plan_chunk, amount, vesting_time, now)?;

    let redirected = destination != record.destination_token_account;
    if redirected {
        msg!("release redirected by admin to {}", destination);
    }

    let signer = VaultSigner::new(admin, record.token_vault, ctx.bumps.vault_authority);
    signer.transfer(
        &ctx.accounts.token_program,
        &ctx.accounts.origin_token_account,
        ctx.accounts.destination_token_account.to_account_info(),
        ctx.accounts.vault_authority.to_account_info(),
        amount,
    )?;

    emit!(TokensReleased {
        vesting_account: record.key(),
        beneficiary: record.beneficiary,
        destination,
        redirected,
        vesting_time,
        amount,
        released_total: record.released_amount,
        total_amount: record.total_amount,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(amount: u64, vesting_time: i64, params: VestingParams)]
pub struct DoVesting<'info> {
    pub admin: Signer<'info>,

    #[account(seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,

    /// CHECK: beneficiary key is only used as a seed.
    pub beneficiary: UncheckedAccount<'info>,

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [
            VESTING_SEED,
            beneficiary.key().as_ref(),
            token_mint.key().as_ref(),
            &params.vesting_id.to_le_bytes()
        ],
        bump
    )]
    pub vesting_account: Box<Account<'info, VestingAccount>>,

    #[account(
        mut,
        seeds = [PLAN_CHUNK_SEED, vesting_account.key().as_ref()],
        bump
    )]
    pub plan_chunk: Box<Account<'info, PlanChunk>>,

    /// The record's beneficiary vault.
    #[account(mut)]
    pub origin_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub destination_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: key-less signer for the record's vaults, validated by seeds.
    #[account(
        seeds = [
            VAULT_AUTHORITY_SEED,
            admin.key().as_ref(),
            vesting_account.token_vault.as_ref()
        ],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub destination: Pubkey,
    pub redirected: bool,
    pub vesting_time: i64,
    pub amount: u64,
    pub released_total: u64,
    pub total_amount: u64,
}
