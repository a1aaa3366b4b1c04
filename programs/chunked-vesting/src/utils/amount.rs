use crate::error::{VestingError, VestingResult};

/// Checked sum of token amounts.
pub fn checked_sum<I>(amounts: I) -> VestingResult<u64>
where
    I: IntoIterator<Item = u64>,
{
    amounts
        .into_iter()
        .try_fold(0u64, |acc, amount| acc.checked_add(amount))
        .ok_or(VestingError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_amounts() {
        assert_eq!(checked_sum([500, 250, 250]).unwrap(), 1_000);
        assert_eq!(checked_sum(Vec::new()).unwrap(), 0);
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            checked_sum([u64::MAX, 1]),
            Err(VestingError::Overflow)
        ));
    }
}
