use anchor_lang::prelude::*;

use crate::constants::{MAX_PLANS_PER_APPEND, MAX_PLAN_ENTRIES};
use crate::error::{VestingError, VestingResult};
use crate::utils::amount::checked_sum;

/// A single scheduled release. Only `released` ever changes after append,
/// and only from `false` to `true`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanEntry {
    pub release_time: i64,
    pub amount: u64,
    pub released: bool,
}

impl PlanEntry {
    pub const SIZE: usize =
        8 + // release_time
        8 + // amount
        1;  // released

    pub fn new(release_time: i64, amount: u64) -> Self {
        Self {
            release_time,
            amount,
            released: false,
        }
    }
}

/// How a delegated child's entries are matched against the parent schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverageMode {
    /// Each child entry consumes an unreleased parent entry due at the same time.
    ByReleaseTime,
    /// Child entry `n` consumes parent entry `n + 1`; the parent's first (TGE)
    /// entry is not shared with the child.
    AfterParentTge,
}

/// Parent debits resolved for a child batch before anything is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coverage {
    pub mode: CoverageMode,
    debits: Vec<(usize, u64)>,
}

impl Coverage {
    pub fn total(&self) -> VestingResult<u64> {
        checked_sum(self.debits.iter().map(|(_, amount)| *amount))
    }
}

/// Append-only release schedule owned by exactly one vesting record.
/// Allocated once at `MAX_PLAN_ENTRIES` capacity; never shrinks.
#[account]
#[derive(Default, Debug)]
pub struct PlanChunk {
    pub vesting_account: Pubkey,
    pub entries: Vec<PlanEntry>,
}

impl PlanChunk {
    /// Space for discriminator + owner + vec header + `capacity` entries.
    pub const fn space(capacity: usize) -> usize {
        8 + 32 + 4 + capacity * PlanEntry::SIZE
    }

    pub fn ensure_owned_by(&self, vesting_account: &Pubkey) -> VestingResult<()> {
        if self.vesting_account != *vesting_account {
            return Err(VestingError::InvalidParameters);
        }
        Ok(())
    }

    pub fn scheduled_total(&self) -> VestingResult<u64> {
        checked_sum(self.entries.iter().map(|e| e.amount))
    }

    pub fn unreleased_total(&self) -> VestingResult<u64> {
        checked_sum(self.entries.iter().filter(|e| !e.released).map(|e| e.amount))
    }

    /// Sum of unreleased entries already due at `now`.
    pub fn releasable_at(&self, now: i64) -> VestingResult<u64> {
        checked_sum(
            self.entries
                .iter()
                .filter(|e| !e.released && e.release_time <= now)
                .map(|e| e.amount),
        )
    }

    pub fn next_release_time(&self) -> Option<i64> {
        self.entries
            .iter()
            .filter(|e| !e.released)
            .map(|e| e.release_time)
            .min()
    }

    /// Checks a batch against capacity, ordering and the owning record's total.
    /// Returns the batch total.
    pub fn validate_append(&self, batch: &[PlanEntry], total_amount: u64) -> VestingResult<u64> {
        if batch.is_empty() {
            return Err(VestingError::EmptyBatch);
        }
        if batch.len() > MAX_PLANS_PER_APPEND {
            return Err(VestingError::BatchTooLarge);
        }
        if self.entries.len() + batch.len() > MAX_PLAN_ENTRIES {
            return Err(VestingError::PlanChunkFull);
        }

        let mut previous = self.entries.last().map(|e| e.release_time);
        for entry in batch {
            if entry.amount == 0 || entry.released {
                return Err(VestingError::InvalidParameters);
            }
            if previous.is_some_and(|time| entry.release_time < time) {
                return Err(VestingError::InvalidParameters);
            }
            previous = Some(entry.release_time);
        }

        let batch_total = checked_sum(batch.iter().map(|e| e.amount))?;
        let scheduled = self
            .scheduled_total()?
            .checked_add(batch_total)
            .ok_or(VestingError::Overflow)?;
        if scheduled > total_amount {
            return Err(VestingError::InvalidParameters);
        }
        Ok(batch_total)
    }

    /// Appends in caller order. Duplicates are not detected.
    pub fn append(&mut self, batch: &[PlanEntry], total_amount: u64) -> VestingResult<u64> {
        let added = self.validate_append(batch, total_amount)?;
        self.entries.extend_from_slice(batch);
        Ok(added)
    }

    /// Full replacement of the schedule. Already-released entries must survive
    /// unchanged and in order.
    pub fn replace(&mut self, entries: Vec<PlanEntry>, total_amount: u64) -> VestingResult<()> {
        if entries.len() > MAX_PLAN_ENTRIES {
            return Err(VestingError::PlanChunkFull);
        }
        if entries
            .windows(2)
            .any(|pair| pair[1].release_time < pair[0].release_time)
        {
            return Err(VestingError::InvalidParameters);
        }
        if checked_sum(entries.iter().map(|e| e.amount))? > total_amount {
            return Err(VestingError::InvalidParameters);
        }

        let history_kept = self
            .entries
            .iter()
            .filter(|e| e.released)
            .eq(entries.iter().filter(|e| e.released));
        if !history_kept {
            return Err(VestingError::InvalidParameters);
        }

        self.entries = entries;
        Ok(())
    }

    /// Locates the unreleased entry due at `vesting_time` for exactly `amount`.
    pub fn find_release(&self, vesting_time: i64, amount: u64) -> VestingResult<usize> {
        let mut scheduled_at_time = false;
        let mut already_released = false;

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.release_time != vesting_time {
                continue;
            }
            scheduled_at_time = true;
            if entry.amount == amount {
                if !entry.released {
                    return Ok(index);
                }
                already_released = true;
            }
        }

        if already_released {
            Err(VestingError::AlreadyReleased)
        } else if scheduled_at_time {
            Err(VestingError::InvalidParameters)
        } else {
            Err(VestingError::NoTokensToRelease)
        }
    }

    pub fn mark_released(&mut self, index: usize) -> VestingResult<()> {
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(VestingError::NoTokensToRelease)?;
        if entry.released {
            return Err(VestingError::AlreadyReleased);
        }
        entry.released = true;
        Ok(())
    }

    /// Resolves which of this (parent) schedule's entries cover a child batch.
    /// `child_stored` is the number of entries the child chunk already holds.
    pub fn plan_coverage(&self, batch: &[PlanEntry], child_stored: usize) -> VestingResult<Coverage> {
        if self.entries.is_empty() {
            return Err(VestingError::ParentPlanNotFound);
        }
        let first = batch.first().ok_or(VestingError::EmptyBatch)?;

        let mode = if self
            .entries
            .iter()
            .any(|p| !p.released && p.release_time == first.release_time)
        {
            CoverageMode::ByReleaseTime
        } else {
            CoverageMode::AfterParentTge
        };

        let mut remaining: Vec<u64> = self.entries.iter().map(|p| p.amount).collect();
        let mut debits = Vec::with_capacity(batch.len());

        for (n, child) in batch.iter().enumerate() {
            let index = match mode {
                CoverageMode::ByReleaseTime => (0..self.entries.len())
                    .find(|&i| {
                        let parent = &self.entries[i];
                        !parent.released
                            && parent.release_time == child.release_time
                            && remaining[i] >= child.amount
                    })
                    .ok_or(VestingError::InsufficientAmount)?,
                CoverageMode::AfterParentTge => {
                    let i = child_stored
                        .checked_add(n)
                        .and_then(|k| k.checked_add(1))
                        .ok_or(VestingError::Overflow)?;
                    match self.entries.get(i) {
                        Some(parent) if !parent.released && remaining[i] >= child.amount => i,
                        _ => return Err(VestingError::InsufficientAmount),
                    }
                }
            };

            remaining[index] = remaining[index]
                .checked_sub(child.amount)
                .ok_or(VestingError::InsufficientAmount)?;
            debits.push((index, child.amount));
        }

        Ok(Coverage { mode, debits })
    }

    /// Consumes parent entries per a coverage resolved against this chunk.
    pub fn apply_coverage(&mut self, coverage: &Coverage) -> VestingResult<()> {
        for &(index, amount) in &coverage.debits {
            let entry = self
                .entries
                .get_mut(index)
                .ok_or(VestingError::ParentPlanNotFound)?;
            entry.amount = entry
                .amount
                .checked_sub(amount)
                .ok_or(VestingError::InsufficientAmount)?;
        }
        Ok(())
    }

    pub fn digest(&self) -> [u8; 32] {
        entries_digest(&self.entries)
    }
}

/// blake3 over the little-endian encoding of each entry, in order.
pub fn entries_digest(entries: &[PlanEntry]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for entry in entries {
        hasher.update(&entry.release_time.to_le_bytes());
        hasher.update(&entry.amount.to_le_bytes());
        hasher.update(&[entry.released as u8]);
    }
    *hasher.finalize().as_bytes()
}
