use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::{ADMIN_CONFIG_SEED, TOKEN_INFO_SEED};
use crate::state::{AdminConfig, TokenInfo, TokenInfoArgs};

pub fn init_token_info(ctx: Context<InitTokenInfo>, args: TokenInfoArgs) -> Result<()> {
    let admin = ctx.accounts.scheduler_admin.key();
    ctx.accounts.admin_config.authorize(&admin)?;

    let mint = ctx.accounts.token_mint.key();
    let info = &mut ctx.accounts.token_info;
    info.register(admin, mint, args)?;

    emit!(TokenRegistered {
        admin,
        mint,
        mint_wallet: info.mint_wallet,
        symbol: info.symbol.clone(),
        total_supply: info.total_supply,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct InitTokenInfo<'info> {
    #[account(mut)]
    pub scheduler_admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = scheduler_admin,
        space = 8 + TokenInfo::SIZE,
        seeds = [TOKEN_INFO_SEED, scheduler_admin.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_info: Account<'info, TokenInfo>,

    #[account(seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,

    pub token_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct TokenRegistered {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub mint_wallet: Pubkey,
    pub symbol: String,
    pub total_supply: u64,
}
