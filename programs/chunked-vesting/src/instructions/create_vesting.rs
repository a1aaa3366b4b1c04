use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{
    ADMIN_CONFIG_SEED, MAX_PLAN_ENTRIES, PLAN_CHUNK_SEED, TOKEN_INFO_SEED, VAULT_AUTHORITY_SEED,
    VAULT_SEED, VESTING_SEED,
};
use crate::error::VestingError;
use crate::state::{AdminConfig, PlanChunk, TokenInfo, VestingAccount, VestingLinks, VestingParams};
use crate::utils::vault::VaultSigner;

/// Opens a top-level vesting record and escrows `total - released` from the
/// admin vault (`parent_vault`) into the record's own beneficiary vault.
pub fn create_vesting(ctx: Context<CreateVesting>, params: VestingParams) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    ctx.accounts.admin_config.authorize(&admin)?;

    let mint = ctx.accounts.token_mint.key();
    ctx.accounts.token_info.ensure_registered(&mint)?;
    require_keys_eq!(ctx.accounts.parent_vault.mint, mint, VestingError::InvalidMint);
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        mint,
        VestingError::InvalidMint
    );

    let vesting_key = ctx.accounts.vesting_account.key();
    let token_vault = ctx.accounts.token_vault.key();
    let links = VestingLinks {
        beneficiary: ctx.accounts.beneficiary.key(),
        token_mint: mint,
        token_vault,
        beneficiary_vault: ctx.accounts.beneficiary_vault.key(),
        destination_token_account: ctx.accounts.beneficiary_token_account.key(),
        parent_vault: ctx.accounts.parent_vault.key(),
        parent_vesting: None,
    };
    let escrow = ctx.accounts.vesting_account.open(&params, links)?;
    ctx.accounts.plan_chunk.vesting_account = vesting_key;

    let signer = VaultSigner::new(admin, token_vault, ctx.bumps.vault_authority);
    signer.transfer(
        &ctx.accounts.token_program,
        &ctx.accounts.parent_vault,
        ctx.accounts.beneficiary_vault.to_account_info(),
        ctx.accounts.vault_authority.to_account_info(),
        escrow,
    )?;

    emit!(VestingCreated {
        vesting_account: vesting_key,
        beneficiary: links.beneficiary,
        mint,
        vesting_id: params.vesting_id,
        total_amount: params.total_amount,
        released_amount: params.released_amount,
        escrowed: escrow,
        parent_vault: links.parent_vault,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(params: VestingParams)]
pub struct CreateVesting<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,

    #[account(
        seeds = [TOKEN_INFO_SEED, admin.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_info: Box<Account<'info, TokenInfo>>,

    /// CHECK: beneficiary key is only used as a seed and recorded.
    pub beneficiary: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + VestingAccount::SIZE,
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
        init,
        payer = admin,
        space = PlanChunk::space(MAX_PLAN_ENTRIES),
        seeds = [PLAN_CHUNK_SEED, vesting_account.key().as_ref()],
        bump
    )]
    pub plan_chunk: Box<Account<'info, PlanChunk>>,

    pub token_mint: Box<Account<'info, Mint>>,

    /// Admin vault whose authority signs for this record.
    pub token_vault: Box<Account<'info, TokenAccount>>,

    /// Source of the escrow: the admin vault funded by the registered mint
    /// wallet, usually `token_vault` itself. Beneficiary vaults never match
    /// these seeds.
    #[account(
        mut,
        seeds = [VAULT_SEED, token_info.mint_wallet.as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub parent_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = admin,
        token::mint = token_mint,
        token::authority = vault_authority,
        seeds = [
            VAULT_SEED,
            beneficiary.key().as_ref(),
            token_mint.key().as_ref(),
            &params.vesting_id.to_le_bytes()
        ],
        bump
    )]
    pub beneficiary_vault: Box<Account<'info, TokenAccount>>,

    /// CHECK: key-less signer for the vaults, validated by seeds.
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, admin.key().as_ref(), token_vault.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Default release destination recorded on the vesting record.
    pub beneficiary_token_account: Box<Account<'info, TokenAccount>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingCreated {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub mint: Pubkey,
    pub vesting_id: u64,
    pub total_amount: u64,
    pub released_amount: u64,
    pub escrowed: u64,
    pub parent_vault: Pubkey,
}
