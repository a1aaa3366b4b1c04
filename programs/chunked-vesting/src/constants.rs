//! Program-wide constants: PDA seed prefixes and record capacities.

/// Seed for the singleton deployer record.
pub const DEPLOY_ADMIN_SEED: &[u8] = b"deploy_admin";

/// Seed for the singleton scheduler-admin config.
pub const ADMIN_CONFIG_SEED: &[u8] = b"admin";

/// Seed prefix for token registrations, keyed by (admin, mint).
pub const TOKEN_INFO_SEED: &[u8] = b"token_info";

/// Seed prefix for custodial vaults (admin vaults and per-record beneficiary vaults).
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix for the key-less vault signer, keyed by (scheduler admin, vault).
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_auth";

/// Seed prefix for vesting records, keyed by (beneficiary, mint, vesting id).
pub const VESTING_SEED: &[u8] = b"vesting";

/// Seed prefix for plan chunks, keyed by the owning vesting record.
pub const PLAN_CHUNK_SEED: &[u8] = b"plans";

/// Max plan entries accepted per `append_yearly_plan` call.
pub const MAX_PLANS_PER_APPEND: usize = 80;

/// Fixed capacity of a plan chunk (40 years of monthly entries).
/// Sized so the chunk stays under the 10 KiB limit for CPI-created accounts.
pub const MAX_PLAN_ENTRIES: usize = 480;

/// Max byte length of a vesting category label.
pub const CATEGORY_MAX_LEN: usize = 50;

/// Max byte length of a registered token name.
pub const TOKEN_NAME_MAX_LEN: usize = 32;

/// Max byte length of a registered token symbol.
pub const TOKEN_SYMBOL_MAX_LEN: usize = 10;
