// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Point edits on a single card.
//!
//! Edits are applied against a read-only context (board, cached topology, current derived state)
//! and produce a minimal patch set plus the root-ward order of touched cards, which the UI uses to
//! animate propagation. Nothing here mutates the board; callers apply the outcome.
//!
//! Packs ratchet: an increase that completes packs pushes them up the ancestor chain, while
//! decreases and clears only ever act on the edited card.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::{Board, CardId, Side, SidePair};
use crate::query::{Rollup, RollupResult, StageProgress, StageTable, Topology};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PointOp {
    Adjust {
        card_id: CardId,
        side: Side,
        delta: i64,
    },
    Clear {
        card_id: CardId,
        scope: ClearScope,
    },
}

impl PointOp {
    pub fn card_id(&self) -> &CardId {
        match self {
            Self::Adjust { card_id, .. } | Self::Clear { card_id, .. } => card_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearScope {
    Side(Side),
    Both,
}

impl ClearScope {
    fn sides(self) -> &'static [Side] {
        match self {
            Self::Side(Side::Left) => &[Side::Left],
            Self::Side(Side::Right) => &[Side::Right],
            Self::Both => &Side::BOTH,
        }
    }
}

/// Full replacement of a card's point fields after an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPatch {
    pub manual: SidePair<u64>,
    pub local_points: SidePair<u64>,
    pub remainder: SidePair<u64>,
    pub packs_earned: SidePair<u64>,
    pub total_packs: u64,
    pub stage: StageProgress,
}

impl CardPatch {
    fn new(manual: SidePair<u64>, result: RollupResult, stages: &StageTable) -> Self {
        Self {
            manual,
            local_points: result.local_points,
            remainder: result.remainder,
            packs_earned: result.packs_earned,
            total_packs: result.total_packs,
            stage: stages.map(result.total_packs),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeltaOutcome {
    pub updates: BTreeMap<CardId, CardPatch>,
    /// Edited card first, then every ancestor that changed, nearest first.
    pub changed_ids: Vec<CardId>,
    /// Points actually added (positive) or removed (negative) on the edited card.
    pub applied_delta: i64,
    /// Set when the upward walk re-entered a card; the caller should run a full rollup.
    pub partial: bool,
}

impl DeltaOutcome {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Ancestors the edit delivered packs to.
    pub fn propagated_to(&self) -> &[CardId] {
        self.changed_ids.get(1..).unwrap_or_default()
    }
}

/// Everything an edit reads. Borrowed so one context serves a burst of clicks.
///
/// `stages` must come from the same config as `derived`, otherwise patch stages and card views
/// disagree.
#[derive(Debug, Clone, Copy)]
pub struct EditContext<'a> {
    pub board: &'a Board,
    pub topology: &'a Topology,
    pub derived: &'a Rollup,
    pub stages: StageTable,
}

impl<'a> EditContext<'a> {
    pub fn new(
        board: &'a Board,
        topology: &'a Topology,
        derived: &'a Rollup,
        stages: StageTable,
    ) -> Self {
        Self {
            board,
            topology,
            derived,
            stages,
        }
    }

    fn threshold(&self) -> u64 {
        self.derived.threshold()
    }

    /// Current local points of a card, falling back to its manual points when the derived state
    /// has not seen it yet.
    fn local_points(&self, card_id: &CardId) -> Option<SidePair<u64>> {
        let card = self.board.card(card_id)?;
        Some(
            self.derived
                .get(card_id)
                .map(|result| result.local_points)
                .unwrap_or_else(|| card.manual()),
        )
    }
}

#[derive(Debug, Default)]
struct PatchBuilder {
    updates: BTreeMap<CardId, CardPatch>,
    order: Vec<CardId>,
}

impl PatchBuilder {
    fn record(&mut self, card_id: &CardId, patch: CardPatch) {
        if self.updates.insert(card_id.clone(), patch).is_none() {
            self.order.push(card_id.clone());
        }
    }

    fn finish(self, applied_delta: i64, partial: bool) -> DeltaOutcome {
        DeltaOutcome {
            updates: self.updates,
            changed_ids: self.order,
            applied_delta,
            partial,
        }
    }
}

pub fn apply_point_op(ctx: &EditContext<'_>, op: &PointOp) -> DeltaOutcome {
    match op {
        PointOp::Adjust {
            card_id,
            side,
            delta,
        } => apply_delta(ctx, card_id, *side, *delta),
        PointOp::Clear { card_id, scope } => clear_points(ctx, card_id, *scope),
    }
}

/// Adds `delta` points to one side of a card.
///
/// Increases push completed packs to every ancestor. Decreases are clamped to the side's current
/// remainder, so points already converted into delivered packs cannot be taken back. Unknown
/// cards and zero effective deltas yield an empty outcome.
pub fn apply_delta(ctx: &EditContext<'_>, card_id: &CardId, side: Side, delta: i64) -> DeltaOutcome {
    if delta > 0 {
        increase_points(ctx, card_id, side, delta.unsigned_abs())
    } else if delta < 0 {
        decrease_points(ctx, card_id, side, delta.unsigned_abs())
    } else {
        DeltaOutcome::default()
    }
}

/// Resets manual points on one or both sides of a card without touching its ancestors.
pub fn clear_points(ctx: &EditContext<'_>, card_id: &CardId, scope: ClearScope) -> DeltaOutcome {
    reset_points(ctx, card_id, scope)
}

// Extracted edit implementation for increase/decrease/clear.
include!("ops_impl.rs");
