use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};

/// Singleton record of the identity allowed to appoint the scheduler admin.
#[account]
#[derive(Default, Debug)]
pub struct DeployAdmin {
    pub deployer: Pubkey,
    pub is_initialized: bool,
}

impl DeployAdmin {
    pub const SIZE: usize =
        32 + // deployer
        1;   // is_initialized

    pub fn register(&mut self, deployer: Pubkey) -> VestingResult<()> {
        if self.is_initialized {
            return Err(VestingError::AlreadyInitialized);
        }
        self.deployer = deployer;
        self.is_initialized = true;
        Ok(())
    }

    pub fn ensure_deployer(&self, signer: &Pubkey) -> VestingResult<()> {
        if !self.is_initialized {
            return Err(VestingError::NotInitialized);
        }
        if self.deployer != *signer {
            return Err(VestingError::NotDeployAdmin);
        }
        Ok(())
    }
}

/// Singleton binding of the scheduler admin. A default `admin` key means the
/// role is disabled until the deployer rebinds it.
#[account]
#[derive(Default, Debug)]
pub struct AdminConfig {
    pub admin: Pubkey,
    pub is_initialized: bool,
}

impl AdminConfig {
    pub const SIZE: usize =
        32 + // admin
        1;   // is_initialized

    pub fn bind(&mut self, admin: Pubkey) -> VestingResult<()> {
        if self.is_initialized {
            return Err(VestingError::AlreadyInitialized);
        }
        if admin == Pubkey::default() {
            return Err(VestingError::InvalidParameters);
        }
        self.admin = admin;
        self.is_initialized = true;
        Ok(())
    }

    /// `None` disables the role; records issued under the previous admin are untouched.
    pub fn rebind(&mut self, new_admin: Option<Pubkey>) -> VestingResult<Pubkey> {
        if !self.is_initialized {
            return Err(VestingError::NotInitialized);
        }
        let previous = self.admin;
        self.admin = new_admin.unwrap_or_default();
        Ok(previous)
    }

    pub fn is_disabled(&self) -> bool {
        self.admin == Pubkey::default()
    }

    /// Checked on every privileged call; nothing is cached across calls.
    pub fn authorize(&self, signer: &Pubkey) -> VestingResult<()> {
        if !self.is_initialized {
            return Err(VestingError::NotInitialized);
        }
        if self.is_disabled() || self.admin != *signer {
            return Err(VestingError::Unauthorized);
        }
        Ok(())
    }
}
