//! Vault authority: the key-less signer derived from (scheduler admin, vault)
//! that owns every custodial vault and signs every transfer out of one.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_AUTHORITY_SEED;
use crate::error::VestingError;

pub struct VaultSigner {
    pub scheduler_admin: Pubkey,
    pub token_vault: Pubkey,
    bump: [u8; 1],
}

impl VaultSigner {
    /// `bump` comes from the `vault_authority` seeds constraint of the calling context.
    pub fn new(scheduler_admin: Pubkey, token_vault: Pubkey, bump: u8) -> Self {
        Self {
            scheduler_admin,
            token_vault,
            bump: [bump],
        }
    }

    fn seeds(&self) -> [&[u8]; 4] {
        [
            VAULT_AUTHORITY_SEED,
            self.scheduler_admin.as_ref(),
            self.token_vault.as_ref(),
            &self.bump,
        ]
    }

    pub fn address(&self) -> Result<Pubkey> {
        Pubkey::create_program_address(&self.seeds(), &crate::ID)
            .map_err(|_| error!(VestingError::Unauthorized))
    }

    /// Moves `amount` out of a vault this signer owns. Zero amounts are skipped.
    pub fn transfer<'info>(
        &self,
        token_program: &Program<'info, Token>,
        from: &Account<'info, TokenAccount>,
        to: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        require_keys_eq!(from.owner, self.address()?, VestingError::InvalidVault);

        let seeds = self.seeds();
        let signer_seeds: &[&[&[u8]]] = &[&seeds];
        token::transfer(
            CpiContext::new_with_signer(
                token_program.to_account_info(),
                Transfer {
                    from: from.to_account_info(),
                    to,
                    authority,
                },
                signer_seeds,
            ),
            amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(admin: Pubkey, vault: Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[VAULT_AUTHORITY_SEED, admin.as_ref(), vault.as_ref()],
            &crate::ID,
        )
    }

    #[test]
    fn address_matches_canonical_derivation() {
        let admin = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let (expected, bump) = derive(admin, vault);
        let signer = VaultSigner::new(admin, vault, bump);
        assert_eq!(signer.address().unwrap(), expected);
    }

    #[test]
    fn authority_differs_per_admin_and_vault() {
        let admin = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let (base, _) = derive(admin, vault);
        assert_ne!(base, derive(Pubkey::new_unique(), vault).0);
        assert_ne!(base, derive(admin, Pubkey::new_unique()).0);
    }
}
