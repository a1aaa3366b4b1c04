use anchor_lang::prelude::*;

use crate::constants::{ADMIN_CONFIG_SEED, VESTING_SEED};
use crate::state::{AdminConfig, VestingAccount};

/// Deactivates a record. Stopping an already stopped record is a no-op.
pub fn emergency_stop(ctx: Context<EmergencyStop>) -> Result<()> {
    ctx.accounts.admin_config.authorize(&ctx.accounts.admin.key())?;

    let record = &mut ctx.accounts.vesting_account;
    let was_active = record.is_active;
    record.stop();

    emit!(VestingStopped {
        vesting_account: record.key(),
        beneficiary: record.beneficiary,
        vesting_id: record.vesting_id,
        was_active,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyStop<'info> {
    pub admin: Signer<'info>,

    #[account(seeds = [ADMIN_CONFIG_SEED], bump)]
    pub admin_config: Account<'info, AdminConfig>,

    #[account(
        mut,
        seeds = [
            VESTING_SEED,
            vesting_account.beneficiary.as_ref(),
            vesting_account.token_mint.as_ref(),
            &vesting_account.vesting_id.to_le_bytes()
        ],
        bump
    )]
    pub vesting_account: Box<Account<'info, VestingAccount>>,
}

#[event]
pub struct VestingStopped {
    pub vesting_account: Pubkey,
    pub beneficiary: Pubkey,
    pub vesting_id: u64,
    pub was_active: bool,
}
