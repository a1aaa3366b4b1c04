use anchor_lang::prelude::*;

use crate::constants::{ADMIN_CONFIG_SEED, DEPLOY_ADMIN_SEED};
use crate::state::{AdminConfig, DeployAdmin};

/// Deployer appoints the scheduler admin.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let deployer = ctx.accounts.deployer.key();
    ctx.accounts.deploy_admin.ensure_deployer(&deployer)?;

    let admin = ctx.accounts.admin.key();
    ctx.accounts.admin_config.bind(admin)?;

    emit!(AdminInitialized { deployer, admin });
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub deployer: Signer<'info>,

    #[account(seeds = [DEPLOY_ADMIN_SEED], bump)]
    pub deploy_admin: Account<'info, DeployAdmin>,

    pub admin: Signer<'info>,

    #[account(
        init_if_needed,
        payer = deployer,
        space = 8 + AdminConfig::SIZE,
        seeds = [ADMIN_CONFIG_SEED],
        bump
    )]
    pub admin_config: Account<'info, AdminConfig>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct AdminInitialized {
    pub deployer: Pubkey,
    pub admin: Pubkey,
}
