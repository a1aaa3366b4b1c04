use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{ADMIN_CONFIG_SEED, TOKEN_INFO_SEED, VAULT_AUTHORITY_SEED, VAULT_SEED};
use crate::error::VestingError;
use crate::state::{AdminConfig, TokenInfo};

/// Escrows `amount` from the funder's token account into the vault owned by
/// the scheduler admin's vault authority. The vault is created on first use.
pub fn lockup_vault(ctx: Context<LockupVault>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidParameters);

    let scheduler_admin = ctx.accounts.scheduler_admin.key();
    ctx.accounts.admin_config.authorize(&scheduler_admin)?;

    let mint = ctx.accounts.token_mint.key();
    ctx.accounts.token_info.ensure_registered(&mint)?;

    let funder = ctx.accounts.funder.key();
    require_keys_eq!(
        funder,
        ctx.accounts.token_info.mint_wallet,
        VestingError::Unauthorized
    );
    let source = &ctx.accounts.funder_token_account;
    require_keys_eq!(source.mint, mint, VestingError::InvalidMint);
    require_keys_eq!(source.owner, funder, VestingError::Unauthorized);
    require!(source.amount >= amount, VestingError::InsufficientAmount);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder_token_account.to_account_info(),
                to: ctx.accounts.token_vault.to_account_info(),
                authority: ctx.accounts.funder.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.token_vault.reload()?;

    emit!(VaultLocked {
        funder,
        scheduler_admin,
        token_vault: ctx.accounts.token_vault.key(),
        amount,
        vault_balance: ctx.accounts.token_vault.amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct LockupVault<'info> {
    /// Registered mint wallet; holder of the tokens being escrowed.
    #[account(mut)]
    pub funder: Signer<'info>,

    pub scheduler_admin: Signer<'info>,

    #[account(seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,

    #[account(
        seeds = [TOKEN_INFO_SEED, scheduler_admin.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_info: Box<Account<'info, TokenInfo>>,

    #[account(mut)]
    pub funder_token_account: Account<'info, TokenAccount>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = funder,
        token::mint = token_mint,
        token::authority = vault_authority,
        seeds = [VAULT_SEED, funder.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: Account<'info, TokenAccount>,

    /// CHECK: key-less signer for token_vault, validated by seeds.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, scheduler_admin.key().as_ref(), token_vault.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct VaultLocked {
    pub funder: Pubkey,
    pub scheduler_admin: Pubkey,
    pub token_vault: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
