//! Reward threshold evaluation.
//!
//! Derived state only: given a stamp balance and the tenant's configured
//! threshold, compute whether a reward is available and how far along the
//! card is. Nothing here touches storage.

use serde::{Deserialize, Serialize};

/// Progress of a stamp card towards its next reward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardProgress {
    pub stamps: u32,
    pub stamps_per_reward: u32,
    pub reward_ready: bool,
    /// Percent of the way to the next reward, clamped to 100.
    pub percentage: u8,
}

/// Evaluate reward availability and progress.
///
/// Config validation guarantees a positive threshold before this is ever
/// called; a zero threshold is clamped to 1 rather than dividing by zero.
pub fn reward_progress(stamps: u32, stamps_per_reward: u32) -> RewardProgress {
    let threshold = stamps_per_reward.max(1);
    let percentage = (u64::from(stamps) * 100 / u64::from(threshold)).min(100) as u8;

    RewardProgress {
        stamps,
        stamps_per_reward: threshold,
        reward_ready: stamps >= threshold,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold() {
        let p = reward_progress(3, 10);
        assert!(!p.reward_ready);
        assert_eq!(p.percentage, 30);
    }

    #[test]
    fn at_threshold_is_ready_with_exactly_100() {
        let p = reward_progress(10, 10);
        assert!(p.reward_ready);
        assert_eq!(p.percentage, 100);
    }

    #[test]
    fn percentage_is_clamped_above_threshold() {
        let p = reward_progress(37, 10);
        assert!(p.reward_ready);
        assert_eq!(p.percentage, 100);
    }

    #[test]
    fn ready_is_monotonic_in_stamps() {
        let mut was_ready = false;
        for stamps in 0..50 {
            let ready = reward_progress(stamps, 10).reward_ready;
            assert!(
                !was_ready || ready,
                "ready flipped back to false at {stamps} stamps"
            );
            was_ready = ready;
        }
    }

    #[test]
    fn large_balance_does_not_overflow() {
        let p = reward_progress(u32::MAX, 1);
        assert!(p.reward_ready);
        assert_eq!(p.percentage, 100);
    }
}
