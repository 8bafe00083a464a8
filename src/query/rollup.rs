// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Full bottom-up point rollup.
//!
//! Every card's local points per side are its manual points plus, for each child hanging on that
//! side, the child's whole packs converted back to points. A child's remainder never reaches its
//! parent. This pass is the ground truth after structural edits and for consistency checks.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::topology::Topology;
use crate::model::{Board, CardId, Side, SidePair};
use crate::ops::DeltaOutcome;

/// Derived point state of one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RollupResult {
    /// Manual points plus packs received from children, in points.
    pub local_points: SidePair<u64>,
    pub remainder: SidePair<u64>,
    pub packs_earned: SidePair<u64>,
    pub total_packs: u64,
    /// Points this card hands to its parent (`total_packs * threshold`).
    pub local_contribution: u64,
}

impl RollupResult {
    pub fn from_points(local_points: SidePair<u64>, threshold: u64) -> Self {
        debug_assert!(threshold > 0, "threshold must be positive");
        let packs_earned = local_points.map(|points| points / threshold);
        let remainder = local_points.map(|points| points % threshold);
        let total_packs = packs_earned.left.saturating_add(packs_earned.right);
        Self {
            local_points,
            remainder,
            packs_earned,
            total_packs,
            local_contribution: total_packs.saturating_mul(threshold),
        }
    }
}

/// Derived state for a whole board, keyed by card id.
///
/// Produced by [`rollup`] and kept current between full passes by merging delta outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rollup {
    threshold: u64,
    results: BTreeMap<CardId, RollupResult>,
    inconsistent: BTreeSet<CardId>,
}

impl Rollup {
    pub fn empty(threshold: u64) -> Self {
        Self {
            threshold,
            results: BTreeMap::new(),
            inconsistent: BTreeSet::new(),
        }
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn results(&self) -> &BTreeMap<CardId, RollupResult> {
        &self.results
    }

    pub fn get(&self, card_id: &CardId) -> Option<&RollupResult> {
        self.results.get(card_id)
    }

    /// Cards whose contribution was dropped because the walk re-entered them through a cycle.
    pub fn inconsistent(&self) -> &BTreeSet<CardId> {
        &self.inconsistent
    }

    pub fn is_partial(&self) -> bool {
        !self.inconsistent.is_empty()
    }

    /// Folds the patches of an incremental edit into this state.
    pub fn merge(&mut self, outcome: &DeltaOutcome) {
        for (card_id, patch) in &outcome.updates {
            self.results.insert(
                card_id.clone(),
                RollupResult::from_points(patch.local_points, self.threshold),
            );
        }
    }

    pub fn remove(&mut self, card_id: &CardId) -> Option<RollupResult> {
        self.inconsistent.remove(card_id);
        self.results.remove(card_id)
    }

    /// Ids whose results differ between `self` and `other`, including ids present in only one.
    pub fn diverging_cards(&self, other: &Rollup) -> Vec<CardId> {
        let ids: BTreeSet<&CardId> = self.results.keys().chain(other.results.keys()).collect();
        ids.into_iter()
            .filter(|card_id| self.results.get(*card_id) != other.results.get(*card_id))
            .cloned()
            .collect()
    }
}

/// Computes derived state for every card of `board`.
///
/// The walk uses an explicit stack and the `visited` set allows one expansion per card, which
/// bounds the work by the card count even on malformed (cyclic) hierarchies. A child met while
/// still open contributes nothing and is reported in [`Rollup::inconsistent`].
pub fn rollup(board: &Board, topology: &Topology, threshold: u64) -> Rollup {
    let mut visited: BTreeSet<&CardId> = BTreeSet::new();
    let mut results: BTreeMap<CardId, RollupResult> = BTreeMap::new();
    let mut inconsistent: BTreeSet<CardId> = BTreeSet::new();

    for start in board.cards().keys() {
        if visited.contains(start) {
            continue;
        }

        let mut stack: Vec<(&CardId, bool)> = vec![(start, false)];
        while let Some((card_id, expanded)) = stack.pop() {
            if expanded {
                let local_points =
                    local_points(board, topology, &results, card_id, threshold, |child| {
                        inconsistent.insert(child.clone());
                    });
                results.insert(
                    card_id.clone(),
                    RollupResult::from_points(local_points, threshold),
                );
                continue;
            }

            if !visited.insert(card_id) {
                continue;
            }
            stack.push((card_id, true));

            for side in Side::BOTH {
                for child in topology.children(card_id, side) {
                    if !visited.contains(child) {
                        stack.push((child, false));
                    }
                }
            }
        }
    }

    if !inconsistent.is_empty() {
        tracing::warn!(
            cards = inconsistent.len(),
            first = %inconsistent.iter().next().map(CardId::as_str).unwrap_or_default(),
            "rollup.inconsistent"
        );
    }

    Rollup {
        threshold,
        results,
        inconsistent,
    }
}

fn local_points(
    board: &Board,
    topology: &Topology,
    results: &BTreeMap<CardId, RollupResult>,
    card_id: &CardId,
    threshold: u64,
    mut on_dropped: impl FnMut(&CardId),
) -> SidePair<u64> {
    let mut points = board
        .card(card_id)
        .map(|card| card.manual())
        .unwrap_or_default();

    for side in Side::BOTH {
        for child in topology.children(card_id, side) {
            match results.get(child) {
                Some(child_result) => {
                    let slot = points.get_mut(side);
                    *slot = slot.saturating_add(child_result.total_packs.saturating_mul(threshold));
                }
                None => on_dropped(child),
            }
        }
    }

    points
}
