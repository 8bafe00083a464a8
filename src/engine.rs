// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board-owning facade used by an editor.
//!
//! `PvEngine` holds the board, the topology cache and the derived state together, so every edit
//! sees one consistent snapshot and its patches land atomically before the next call.

use serde::Serialize;

use crate::config::{ConfigError, EngineConfig};
use crate::model::{Board, Card, CardId, Connection, ConnectionId, Position, SidePair};
use crate::ops::{apply_point_op, DeltaOutcome, EditContext, PointOp};
use crate::query::{rollup, Rollup, StageProgress, StageTable, TopologyCache};

/// Everything the editor renders for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub card_id: CardId,
    pub manual: SidePair<u64>,
    pub local_points: SidePair<u64>,
    pub remainder: SidePair<u64>,
    pub packs_earned: SidePair<u64>,
    pub total_packs: u64,
    #[serde(flatten)]
    pub stage: StageProgress,
    pub parent_id: Option<CardId>,
    pub inconsistent: bool,
}

#[derive(Debug)]
pub struct PvEngine {
    config: EngineConfig,
    stages: StageTable,
    board: Board,
    topology: TopologyCache,
    derived: Rollup,
}

impl PvEngine {
    pub fn new(board: Board, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut engine = Self {
            config,
            stages: config.stage_table(),
            board,
            topology: TopologyCache::new(),
            derived: Rollup::empty(config.threshold),
        };
        engine.refresh();
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn derived(&self) -> &Rollup {
        &self.derived
    }

    /// Re-resolves topology if needed and recomputes every card from scratch.
    ///
    /// This discards ratcheted packs that no longer follow from manual points.
    pub fn refresh(&mut self) -> &Rollup {
        let topology = self.topology.get(&self.board);
        self.derived = rollup(&self.board, topology, self.config.threshold);
        tracing::debug!(
            cards = self.board.cards().len(),
            partial = self.derived.is_partial(),
            "engine.refresh"
        );
        &self.derived
    }

    /// Applies one point edit and commits its patches.
    pub fn apply(&mut self, op: &PointOp) -> DeltaOutcome {
        let outcome = {
            let topology = self.topology.get(&self.board);
            let ctx = EditContext::new(&self.board, topology, &self.derived, self.stages);
            apply_point_op(&ctx, op)
        };
        if outcome.is_empty() {
            return outcome;
        }

        for (card_id, patch) in &outcome.updates {
            self.board.set_manual(card_id, patch.manual);
        }
        self.derived.merge(&outcome);

        if outcome.partial {
            tracing::warn!(card = %op.card_id(), "engine.partial_delta.refresh");
            self.refresh();
        }
        outcome
    }

    pub fn card_view(&mut self, card_id: &CardId) -> Option<CardView> {
        let card = self.board.card(card_id)?;
        let result = self.derived.get(card_id).copied().unwrap_or_default();
        let parent_id = self
            .topology
            .get(&self.board)
            .parent(card_id)
            .map(|link| link.parent_id.clone());
        Some(CardView {
            card_id: card_id.clone(),
            manual: card.manual(),
            local_points: result.local_points,
            remainder: result.remainder,
            packs_earned: result.packs_earned,
            total_packs: result.total_packs,
            stage: self.stages.map(result.total_packs),
            parent_id,
            inconsistent: self.derived.inconsistent().contains(card_id),
        })
    }

    /// Views for every card, in id order.
    pub fn card_views(&mut self) -> Vec<CardView> {
        let ids = self.board.cards().keys().cloned().collect::<Vec<_>>();
        ids.iter().filter_map(|card_id| self.card_view(card_id)).collect()
    }

    pub fn insert_card(&mut self, card: Card) {
        self.board.insert_card(card);
        self.refresh();
    }

    pub fn remove_card(&mut self, card_id: &CardId) -> Option<Card> {
        let removed = self.board.remove_card(card_id)?;
        self.derived.remove(card_id);
        self.refresh();
        Some(removed)
    }

    pub fn move_card(&mut self, card_id: &CardId, position: Position) -> bool {
        let before = self.board.structure_rev();
        if !self.board.move_card(card_id, position) {
            return false;
        }
        if self.board.structure_rev() != before {
            self.refresh();
        }
        true
    }

    pub fn connect(&mut self, connection: Connection) {
        self.board.add_connection(connection);
        self.refresh();
    }

    pub fn disconnect(&mut self, connection_id: &ConnectionId) -> Option<Connection> {
        let removed = self.board.remove_connection(connection_id)?;
        self.refresh();
        Some(removed)
    }

    pub fn set_locked(&mut self, connection_id: &ConnectionId, locked: bool) -> bool {
        let before = self.board.structure_rev();
        if !self.board.set_connection_locked(connection_id, locked) {
            return false;
        }
        if self.board.structure_rev() != before {
            self.refresh();
        }
        true
    }
}
