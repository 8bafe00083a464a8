// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_STAGE_STEPS;

/// Highest stage index a card can report.
pub const FINAL_STAGE: u8 = 4;

/// Where a pack count sits within the repeating stage cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StageProgress {
    pub cycle: u64,
    pub stage: u8,
    pub to_next_stage: u64,
}

impl StageProgress {
    /// Full cycles behind this card, for display next to the current stage.
    pub fn completed_cycles(&self) -> u64 {
        self.cycle
    }

    pub fn is_cycle_start(&self) -> bool {
        self.stage == 0
    }
}

/// Cumulative pack thresholds for stages 1..=4 of one cycle.
///
/// The last threshold is also the cycle length, so reaching it rolls the count over into the
/// next cycle at stage 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageTable {
    cumulative: [u64; 4],
}

impl Default for StageTable {
    fn default() -> Self {
        Self::from_steps(DEFAULT_STAGE_STEPS)
    }
}

impl StageTable {
    pub fn from_steps(steps: [u64; 4]) -> Self {
        let mut cumulative = [0u64; 4];
        let mut acc = 0u64;
        for (slot, step) in cumulative.iter_mut().zip(steps) {
            acc = acc.saturating_add(step);
            *slot = acc;
        }
        Self { cumulative }
    }

    pub fn cumulative(&self) -> [u64; 4] {
        self.cumulative
    }

    pub fn cycle_len(&self) -> u64 {
        self.cumulative[3]
    }

    pub fn map(&self, total_packs: u64) -> StageProgress {
        let cycle_len = self.cycle_len().max(1);
        let cycle = total_packs / cycle_len;
        let within = total_packs % cycle_len;

        let reached = self
            .cumulative
            .iter()
            .take_while(|threshold| **threshold <= within)
            .count();
        let to_next_stage = match self.cumulative.get(reached) {
            Some(next) => next - within,
            None => cycle_len - within,
        };

        StageProgress {
            cycle,
            stage: reached.min(FINAL_STAGE as usize) as u8,
            to_next_stage,
        }
    }
}

/// Maps a pack total with the default stage steps.
pub fn map_stage(total_packs: u64) -> StageProgress {
    StageTable::default().map(total_packs)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{map_stage, StageProgress, StageTable};

    #[rstest]
    #[case(0, 0, 0, 6)]
    #[case(1, 0, 0, 5)]
    #[case(5, 0, 0, 1)]
    #[case(6, 0, 1, 12)]
    #[case(17, 0, 1, 1)]
    #[case(18, 0, 2, 18)]
    #[case(35, 0, 2, 1)]
    #[case(36, 0, 3, 36)]
    #[case(71, 0, 3, 1)]
    #[case(72, 1, 0, 6)]
    #[case(150, 2, 1, 12)]
    fn maps_pack_totals(
        #[case] total: u64,
        #[case] cycle: u64,
        #[case] stage: u8,
        #[case] to_next_stage: u64,
    ) {
        assert_eq!(
            map_stage(total),
            StageProgress {
                cycle,
                stage,
                to_next_stage
            }
        );
    }

    #[test]
    fn clean_cycle_boundaries_restart_at_stage_zero() {
        for cycle in 1..10u64 {
            let progress = map_stage(72 * cycle);
            assert_eq!(progress.cycle, cycle);
            assert_eq!(progress.stage, 0);
            assert_eq!(progress.to_next_stage, 6);
            assert_eq!(progress.completed_cycles(), cycle);
            assert!(progress.is_cycle_start());
        }
    }

    #[test]
    fn cycle_and_stage_never_go_backwards() {
        let mut previous = map_stage(0);
        for total in 1..1_000u64 {
            let current = map_stage(total);
            assert!(
                (current.cycle, current.stage) >= (previous.cycle, previous.stage),
                "regressed at {total}: {previous:?} -> {current:?}"
            );
            assert!(current.to_next_stage > 0);
            previous = current;
        }
    }

    #[test]
    fn custom_steps_change_cycle_length() {
        let table = StageTable::from_steps([1, 1, 1, 1]);
        assert_eq!(table.cumulative(), [1, 2, 3, 4]);
        assert_eq!(table.cycle_len(), 4);
        assert_eq!(
            table.map(7),
            StageProgress {
                cycle: 1,
                stage: 3,
                to_next_stage: 1
            }
        );
    }
}
