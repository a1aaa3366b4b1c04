use anchor_lang::prelude::*;

use crate::constants::{TOKEN_NAME_MAX_LEN, TOKEN_SYMBOL_MAX_LEN};
use crate::error::{VestingError, VestingResult};

/// Registration of a mint for vesting under one scheduler admin.
#[account]
#[derive(Default, Debug)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub mint: Pubkey,
    /// Wallet that holds and funds the supply.
    pub mint_wallet: Pubkey,
    /// Scheduler admin the registration was made under.
    pub admin: Pubkey,
    pub is_initialized: bool,
}

impl TokenInfo {
    pub const SIZE: usize =
        4 + TOKEN_NAME_MAX_LEN +   // name
        4 + TOKEN_SYMBOL_MAX_LEN + // symbol
        8 +  // total_supply
        32 + // mint
        32 + // mint_wallet
        32 + // admin
        1;   // is_initialized

    pub fn register(
        &mut self,
        admin: Pubkey,
        mint_account: Pubkey,
        args: TokenInfoArgs,
    ) -> VestingResult<()> {
        if self.is_initialized {
            return Err(VestingError::AlreadyInitialized);
        }
        if args.mint != mint_account {
            return Err(VestingError::InvalidMint);
        }
        if args.name.is_empty()
            || args.name.len() > TOKEN_NAME_MAX_LEN
            || args.symbol.is_empty()
            || args.symbol.len() > TOKEN_SYMBOL_MAX_LEN
        {
            return Err(VestingError::InvalidParameters);
        }

        self.name = args.name;
        self.symbol = args.symbol;
        self.total_supply = args.total_supply;
        self.mint = args.mint;
        self.mint_wallet = args.mint_wallet;
        self.admin = admin;
        self.is_initialized = true;
        Ok(())
    }

    /// Gate for vault and vesting creation against unregistered mints.
    pub fn ensure_registered(&self, mint: &Pubkey) -> VestingResult<()> {
        if !self.is_initialized || self.mint != *mint {
            return Err(VestingError::InvalidToken);
        }
        Ok(())
    }
}

/// Instruction input for `init_token_info`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TokenInfoArgs {
    pub name: String,
    pub symbol: String,
    pub total_supply: u64,
    pub mint: Pubkey,
    pub mint_wallet: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(mint: Pubkey) -> TokenInfoArgs {
        TokenInfoArgs {
            name: "Test Token".to_string(),
            symbol: "TEST".to_string(),
            total_supply: 1_000_000,
            mint,
            mint_wallet: Pubkey::new_unique(),
        }
    }

    #[test]
    fn registers_mint_once() {
        let admin = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let mut info = TokenInfo::default();

        assert!(matches!(
            info.ensure_registered(&mint),
            Err(VestingError::InvalidToken)
        ));
        info.register(admin, mint, args(mint)).unwrap();
        info.ensure_registered(&mint).unwrap();
        assert_eq!(info.admin, admin);

        assert!(matches!(
            info.register(admin, mint, args(mint)),
            Err(VestingError::AlreadyInitialized)
        ));
    }

    #[test]
    fn rejects_mismatched_mint() {
        let mut info = TokenInfo::default();
        let mint = Pubkey::new_unique();
        assert!(matches!(
            info.register(Pubkey::new_unique(), mint, args(Pubkey::new_unique())),
            Err(VestingError::InvalidMint)
        ));
        assert!(!info.is_initialized);
    }

    #[test]
    fn rejects_oversized_symbol() {
        let mut info = TokenInfo::default();
        let mint = Pubkey::new_unique();
        let mut oversized = args(mint);
        oversized.symbol = "S".repeat(TOKEN_SYMBOL_MAX_LEN + 1);
        assert!(matches!(
            info.register(Pubkey::new_unique(), mint, oversized),
            Err(VestingError::InvalidParameters)
        ));
    }

    #[test]
    fn other_mint_is_not_registered() {
        let mut info = TokenInfo::default();
        let mint = Pubkey::new_unique();
        info.register(Pubkey::new_unique(), mint, args(mint)).unwrap();
        assert!(matches!(
            info.ensure_registered(&Pubkey::new_unique()),
            Err(VestingError::InvalidToken)
        ));
    }
}
