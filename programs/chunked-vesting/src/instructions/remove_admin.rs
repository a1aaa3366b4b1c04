use anchor_lang::prelude::*;

use crate::constants::{ADMIN_CONFIG_SEED, DEPLOY_ADMIN_SEED};
use crate::state::{AdminConfig, DeployAdmin};

/// Rebinds the scheduler admin, or disables it with `None`.
pub fn remove_admin(ctx: Context<RemoveAdmin>, new_admin: Option<Pubkey>) -> Result<()> {
    let deployer = ctx.accounts.deployer.key();
    ctx.accounts.deploy_admin.ensure_deployer(&deployer)?;

    let config = &mut ctx.accounts.admin_config;
    let previous_admin = config.rebind(new_admin)?;

    emit!(AdminRebound {
        deployer,
        previous_admin,
        new_admin: config.admin,
        disabled: config.is_disabled(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveAdmin<'info> {
    pub deployer: Signer<'info>,

    #[account(seeds = [DEPLOY_ADMIN_SEED], bump)]
    pub deploy_admin: Account<'info, DeployAdmin>,

    #[account(mut, seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,
}

#[event]
pub struct AdminRebound {
    pub deployer: Pubkey,
    pub previous_admin: Pubkey,
    pub new_admin: Pubkey,
    pub disabled: bool,
}
