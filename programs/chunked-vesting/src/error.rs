use anchor_lang::prelude::*;

/// Error codes for the chunked vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Record is already initialized")]
    AlreadyInitialized,

    #[msg("Admin records are not initialized or the admin is disabled")]
    NotInitialized,

    #[msg("You are not the deployer admin")]
    NotDeployAdmin,

    #[msg("Unauthorized operation")]
    Unauthorized,

    #[msg("Invalid vesting parameters")]
    InvalidParameters,

    #[msg("Amount arithmetic overflow")]
    Overflow,

    #[msg("No parent vesting plan found")]
    ParentPlanNotFound,

    #[msg("Insufficient amount in the parent vesting pool")]
    InsufficientAmount,

    #[msg("Token not registered in token_info")]
    InvalidToken,

    #[msg("Invalid mint")]
    InvalidMint,

    #[msg("Vault does not match the vesting record")]
    InvalidVault,

    #[msg("Vesting is not active")]
    NotActive,

    #[msg("Vesting release time has not been reached")]
    VestingNotReached,

    #[msg("Vesting for the specified time has already been released")]
    AlreadyReleased,

    #[msg("No tokens available for release")]
    NoTokensToRelease,

    #[msg("Vault must be empty before closing the vesting account")]
    VaultNotEmpty,

    #[msg("Plan chunk capacity exceeded")]
    PlanChunkFull,

    #[msg("Empty batch")]
    EmptyBatch,

    #[msg("Batch size too large")]
    BatchTooLarge,
}

/// Result type for the pure state logic; handlers lift it into `anchor_lang::Result` with `?`.
pub type VestingResult<T> = std::result::Result<T, VestingError>;
