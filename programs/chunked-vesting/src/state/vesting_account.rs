use anchor_lang::prelude::*;

use crate::constants::CATEGORY_MAX_LEN;
use crate::error::{VestingError, VestingResult};
use crate::state::PlanChunk;

/// Header of one beneficiary's allocation of a mint.
#[account]
#[derive(Default, Debug)]
pub struct VestingAccount {
    pub beneficiary: Pubkey,
    pub token_mint: Pubkey,
    pub vesting_id: u64,
    pub total_amount: u64,
    /// Only grows, and only through a release (or the settled amount given at creation).
    pub released_amount: u64,
    /// Entitlement reserved by delegated children.
    pub delegated_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub last_release_time: i64,
    pub category: String,
    pub is_active: bool,
    /// Admin vault whose authority signs for this record's escrow.
    pub token_vault: Pubkey,
    /// Per-record escrow drained by releases.
    pub beneficiary_vault: Pubkey,
    pub destination_token_account: Pubkey,
    /// Vault the escrow was drawn from at creation.
    pub parent_vault: Pubkey,
    /// Parent record for delegated children; default for top-level records.
    pub parent_vesting: Pubkey,
}

impl VestingAccount {
    pub const SIZE: usize =
        32 + // beneficiary
        32 + // token_mint
        8 +  // vesting_id
        8 +  // total_amount
        8 +  // released_amount
        8 +  // delegated_amount
        8 +  // start_time
        8 +  // end_time
        8 +  // last_release_time
        4 + CATEGORY_MAX_LEN + // category
        1 +  // is_active
        32 + // token_vault
        32 + // beneficiary_vault
        32 + // destination_token_account
        32 + // parent_vault
        32;  // parent_vesting

    /// Populates a freshly created record. Returns the amount to escrow.
    pub fn open(&mut self, params: &VestingParams, links: VestingLinks) -> VestingResult<u64> {
        let escrow = params.validate()?;
        if links.beneficiary_vault == links.parent_vault {
            return Err(VestingError::InvalidParameters);
        }

        self.beneficiary = links.beneficiary;
        self.token_mint = links.token_mint;
        self.vesting_id = params.vesting_id;
        self.total_amount = params.total_amount;
        self.released_amount = params.released_amount;
        self.delegated_amount = 0;
        self.start_time = params.start_time;
        self.end_time = params.end_time;
        self.last_release_time = 0;
        self.category = params.category.clone();
        self.is_active = true;
        self.token_vault = links.token_vault;
        self.beneficiary_vault = links.beneficiary_vault;
        self.destination_token_account = links.destination_token_account;
        self.parent_vault = links.parent_vault;
        self.parent_vesting = links.parent_vesting.unwrap_or_default();
        Ok(escrow)
    }

    pub fn is_delegated(&self) -> bool {
        self.parent_vesting != Pubkey::default()
    }

    /// Entitlement not yet released nor reserved by children.
    pub fn remaining_pool(&self) -> VestingResult<u64> {
        self.total_amount
            .checked_sub(self.released_amount)
            .and_then(|rest| rest.checked_sub(self.delegated_amount))
            .ok_or(VestingError::Overflow)
    }

    /// Checks that a child may draw from this record through `parent_vault`.
    pub fn ensure_can_delegate(&self, parent_vault: &Pubkey, mint: &Pubkey) -> VestingResult<()> {
        if !self.is_active {
            return Err(VestingError::ParentPlanNotFound);
        }
        if self.token_mint != *mint {
            return Err(VestingError::InvalidMint);
        }
        if *parent_vault != self.beneficiary_vault && *parent_vault != self.token_vault {
            return Err(VestingError::InvalidVault);
        }
        Ok(())
    }

    /// Reserves `amount` of the remaining pool for a delegated child.
    pub fn reserve_for_child(&mut self, amount: u64) -> VestingResult<()> {
        if amount > self.remaining_pool()? {
            return Err(VestingError::InsufficientAmount);
        }
        self.delegated_amount = self
            .delegated_amount
            .checked_add(amount)
            .ok_or(VestingError::Overflow)?;
        Ok(())
    }

    /// Checks that `parent` is the still-active record this child was delegated from.
    pub fn ensure_child_of(&self, parent_key: &Pubkey, parent: &VestingAccount) -> VestingResult<()> {
        if !self.is_delegated() {
            return Err(VestingError::InvalidParameters);
        }
        if self.parent_vesting != *parent_key || !parent.is_active {
            return Err(VestingError::ParentPlanNotFound);
        }
        if self.token_mint != parent.token_mint {
            return Err(VestingError::InvalidMint);
        }
        Ok(())
    }

    /// Pays out one scheduled entry: validates everything first, then marks the
    /// entry released and advances `released_amount`.
    pub fn release(
        &mut self,
        chunk: &mut PlanChunk,
        amount: u64,
        vesting_time: i64,
        now: i64,
    ) -> VestingResult<()> {
        if !self.is_active {
            return Err(VestingError::NotActive);
        }
        if amount == 0 {
            return Err(VestingError::InvalidParameters);
        }
        let index = chunk.find_release(vesting_time, amount)?;
        if vesting_time > now {
            return Err(VestingError::VestingNotReached);
        }
        let released = self
            .released_amount
            .checked_add(amount)
            .ok_or(VestingError::Overflow)?;
        // Entitlement reserved by delegated children is not releasable here.
        let committed = released
            .checked_add(self.delegated_amount)
            .ok_or(VestingError::Overflow)?;
        if committed > self.total_amount {
            return Err(VestingError::Overflow);
        }

        chunk.mark_released(index)?;
        self.released_amount = released;
        self.last_release_time = vesting_time;
        Ok(())
    }

    /// One-way halt; no resume exists.
    pub fn stop(&mut self) {
        self.is_active = false;
    }
}

/// Account keys a creating instruction binds into a new record.
#[derive(Clone, Copy, Debug)]
pub struct VestingLinks {
    pub beneficiary: Pubkey,
    pub token_mint: Pubkey,
    pub token_vault: Pubkey,
    pub beneficiary_vault: Pubkey,
    pub destination_token_account: Pubkey,
    pub parent_vault: Pubkey,
    pub parent_vesting: Option<Pubkey>,
}

/// Creation parameters; `vesting_id` also identifies the record in release calls.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VestingParams {
    pub vesting_id: u64,
    pub total_amount: u64,
    /// Portion already settled outside this program; not escrowed.
    pub released_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub category: String,
}

impl VestingParams {
    /// Returns the amount that must be escrowed (`total - released`).
    pub fn validate(&self) -> VestingResult<u64> {
        if self.total_amount == 0
            || self.start_time > self.end_time
            || self.category.len() > CATEGORY_MAX_LEN
        {
            return Err(VestingError::InvalidParameters);
        }
        self.total_amount
            .checked_sub(self.released_amount)
            .ok_or(VestingError::InvalidParameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PlanEntry;

    const T0: i64 = 1_700_000_000;

    fn params(total: u64, released: u64) -> VestingParams {
        VestingParams {
            vesting_id: 1,
            total_amount: total,
            released_amount: released,
            start_time: T0,
            end_time: T0 + 3_600,
            category: "team".to_string(),
        }
    }

    fn links(parent_vesting: Option<Pubkey>) -> VestingLinks {
        VestingLinks {
            beneficiary: Pubkey::new_unique(),
            token_mint: Pubkey::new_unique(),
            token_vault: Pubkey::new_unique(),
            beneficiary_vault: Pubkey::new_unique(),
            destination_token_account: Pubkey::new_unique(),
            parent_vault: Pubkey::new_unique(),
            parent_vesting,
        }
    }

    fn opened(total: u64) -> VestingAccount {
        let mut record = VestingAccount::default();
        record.open(&params(total, 0), links(None)).unwrap();
        record
    }

    #[test]
    fn open_returns_escrow_for_unsettled_portion() {
        let mut record = VestingAccount::default();
        assert_eq!(record.open(&params(1_000, 250), links(None)).unwrap(), 750);
        assert!(record.is_active);
        assert!(!record.is_delegated());
        assert_eq!(record.released_amount, 250);
    }

    #[test]
    fn params_reject_inconsistent_values() {
        assert!(matches!(params(0, 0).validate(), Err(VestingError::InvalidParameters)));
        assert!(matches!(params(100, 101).validate(), Err(VestingError::InvalidParameters)));

        let mut reversed = params(100, 0);
        reversed.end_time = reversed.start_time - 1;
        assert!(matches!(reversed.validate(), Err(VestingError::InvalidParameters)));

        let mut long_category = params(100, 0);
        long_category.category = "x".repeat(CATEGORY_MAX_LEN + 1);
        assert!(matches!(long_category.validate(), Err(VestingError::InvalidParameters)));
    }

    #[test]
    fn open_rejects_escrow_into_its_own_source() {
        let mut l = links(None);
        l.parent_vault = l.beneficiary_vault;
        let mut record = VestingAccount::default();
        assert!(matches!(
            record.open(&params(100, 0), l),
            Err(VestingError::InvalidParameters)
        ));
        assert!(!record.is_active);
    }

    #[test]
    fn release_marks_entry_and_advances_released_amount() {
        let mut record = opened(1_000);
        let mut chunk = PlanChunk::default();
        chunk.append(&[PlanEntry::new(T0 + 1_800, 500)], 1_000).unwrap();

        record.release(&mut chunk, 500, T0 + 1_800, T0 + 1_800).unwrap();
        assert_eq!(record.released_amount, 500);
        assert_eq!(record.last_release_time, T0 + 1_800);
        assert!(chunk.entries[0].released);

        assert!(matches!(
            record.release(&mut chunk, 500, T0 + 1_800, T0 + 1_900),
            Err(VestingError::AlreadyReleased)
        ));
        assert_eq!(record.released_amount, 500);
    }

    #[test]
    fn release_before_schedule_changes_nothing() {
        let mut record = opened(1_000);
        let mut chunk = PlanChunk::default();
        chunk.append(&[PlanEntry::new(T0 + 1_800, 500)], 1_000).unwrap();

        assert!(matches!(
            record.release(&mut chunk, 500, T0 + 1_800, T0 + 1_799),
            Err(VestingError::VestingNotReached)
        ));
        assert_eq!(record.released_amount, 0);
        assert!(!chunk.entries[0].released);
    }

    #[test]
    fn stopped_record_refuses_release() {
        let mut record = opened(1_000);
        let mut chunk = PlanChunk::default();
        chunk.append(&[PlanEntry::new(T0, 500)], 1_000).unwrap();

        record.stop();
        record.stop();
        assert!(matches!(
            record.release(&mut chunk, 500, T0, T0),
            Err(VestingError::NotActive)
        ));
        assert!(!chunk.entries[0].released);
    }

    #[test]
    fn release_cannot_pass_total() {
        let mut record = VestingAccount::default();
        record.open(&params(1_000, 800), links(None)).unwrap();
        // Schedule written against the full total, but 800 was settled up front.
        let mut chunk = PlanChunk::default();
        chunk.append(&[PlanEntry::new(T0, 500)], 1_000).unwrap();

        assert!(matches!(
            record.release(&mut chunk, 500, T0, T0),
            Err(VestingError::Overflow)
        ));
        assert_eq!(record.released_amount, 800);
        assert!(!chunk.entries[0].released);
    }

    #[test]
    fn release_rejects_zero_amount() {
        let mut record = opened(1_000);
        let mut chunk = PlanChunk::default();
        assert!(matches!(
            record.release(&mut chunk, 0, T0, T0),
            Err(VestingError::InvalidParameters)
        ));
    }

    #[test]
    fn delegation_reserves_from_remaining_pool() {
        let mut parent = opened(1_000);
        parent.reserve_for_child(600).unwrap();
        assert_eq!(parent.remaining_pool().unwrap(), 400);

        assert!(matches!(
            parent.reserve_for_child(500),
            Err(VestingError::InsufficientAmount)
        ));
        assert_eq!(parent.delegated_amount, 600);
        parent.reserve_for_child(400).unwrap();
        assert_eq!(parent.remaining_pool().unwrap(), 0);
    }

    #[test]
    fn delegation_requires_active_parent_and_known_vault() {
        let mut parent = opened(1_000);
        let mint = parent.token_mint;
        let vault = parent.beneficiary_vault;

        parent.ensure_can_delegate(&vault, &mint).unwrap();
        parent.ensure_can_delegate(&parent.token_vault, &mint).unwrap();
        assert!(matches!(
            parent.ensure_can_delegate(&Pubkey::new_unique(), &mint),
            Err(VestingError::InvalidVault)
        ));
        assert!(matches!(
            parent.ensure_can_delegate(&vault, &Pubkey::new_unique()),
            Err(VestingError::InvalidMint)
        ));

        parent.stop();
        assert!(matches!(
            parent.ensure_can_delegate(&vault, &mint),
            Err(VestingError::ParentPlanNotFound)
        ));
    }

    #[test]
    fn child_link_points_at_parent() {
        let parent_key = Pubkey::new_unique();
        let parent = opened(1_000);

        let mut l = links(Some(parent_key));
        l.token_mint = parent.token_mint;
        let mut child = VestingAccount::default();
        child.open(&params(500, 0), l).unwrap();

        assert!(child.is_delegated());
        child.ensure_child_of(&parent_key, &parent).unwrap();
        assert!(matches!(
            child.ensure_child_of(&Pubkey::new_unique(), &parent),
            Err(VestingError::ParentPlanNotFound)
        ));
        assert!(matches!(
            parent.ensure_child_of(&parent_key, &child),
            Err(VestingError::InvalidParameters)
        ));
    }

    #[test]
    fn stopped_parent_no_longer_covers_children() {
        let parent_key = Pubkey::new_unique();
        let mut parent = opened(1_000);

        let mut l = links(Some(parent_key));
        l.token_mint = parent.token_mint;
        let mut child = VestingAccount::default();
        child.open(&params(500, 0), l).unwrap();

        parent.stop();
        assert!(matches!(
            child.ensure_child_of(&parent_key, &parent),
            Err(VestingError::ParentPlanNotFound)
        ));
    }

    #[test]
    fn parent_release_stops_at_delegated_reservation() {
        let mut parent = opened(1_000);
        let mut chunk = PlanChunk::default();
        chunk
            .append(&[PlanEntry::new(T0, 500), PlanEntry::new(T0 + 10, 500)], 1_000)
            .unwrap();
        parent.reserve_for_child(500).unwrap();

        parent.release(&mut chunk, 500, T0, T0 + 10).unwrap();
        assert!(matches!(
            parent.release(&mut chunk, 500, T0 + 10, T0 + 10),
            Err(VestingError::Overflow)
        ));
        assert_eq!(parent.released_amount, 500);
        assert!(!chunk.entries[1].released);
        assert_eq!(parent.remaining_pool().unwrap(), 0);

        // A further child is refused for lack of pool, not by arithmetic failure.
        assert!(matches!(
            parent.reserve_for_child(1),
            Err(VestingError::InsufficientAmount)
        ));
    }
}
