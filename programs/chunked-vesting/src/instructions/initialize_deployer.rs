use anchor_lang::prelude::*;

use crate::constants::DEPLOY_ADMIN_SEED;
use crate::state::DeployAdmin;

pub fn initialize_deployer(ctx: Context<InitializeDeployer>) -> Result<()> {
    let deployer = ctx.accounts.deployer.key();
    ctx.accounts.deploy_admin.register(deployer)?;

    emit!(DeployerInitialized { deployer });
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeDeployer<'info> {
    #[account(mut)]
    pub deployer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = deployer,
        space = 8 + DeployAdmin::SIZE,
        seeds = [DEPLOY_ADMIN_SEED],
        bump
    )]
    pub deploy_admin: Account<'info, DeployAdmin>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct DeployerInitialized {
    pub deployer: Pubkey,
}
