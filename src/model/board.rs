// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::card::{Card, Position};
use super::connection::Connection;
use super::ids::{CardId, ConnectionId};
use super::side::SidePair;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Cards plus the lines drawn between them.
///
/// Two revision counters track what changed: `structure_rev` moves whenever anything that feeds
/// topology resolution changes (cards added/removed/moved, connections added/removed/locked),
/// `points_rev` moves on manual point edits only. Revisions are per board, so every board (and
/// every clone) also gets a process-unique `generation`; caches key on both.
#[derive(Debug)]
pub struct Board {
    generation: u64,
    cards: BTreeMap<CardId, Card>,
    connections: Vec<Connection>,
    structure_rev: u64,
    points_rev: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_parts(Vec::<Card>::new(), Vec::new())
    }
}

impl Clone for Board {
    fn clone(&self) -> Self {
        Self {
            generation: next_generation(),
            cards: self.cards.clone(),
            connections: self.connections.clone(),
            structure_rev: self.structure_rev,
            points_rev: self.points_rev,
        }
    }
}

// `generation` is identity, not content.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
            && self.connections == other.connections
            && self.structure_rev == other.structure_rev
            && self.points_rev == other.points_rev
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from loose parts. A repeated card id keeps the last card.
    pub fn from_parts(cards: impl IntoIterator<Item = Card>, connections: Vec<Connection>) -> Self {
        let mut by_id = BTreeMap::new();
        for card in cards {
            if let Some(previous) = by_id.insert(card.id().clone(), card) {
                tracing::warn!(card = %previous.id(), "board.duplicate_card");
            }
        }
        Self {
            generation: next_generation(),
            cards: by_id,
            connections,
            structure_rev: 0,
            points_rev: 0,
        }
    }

    pub fn cards(&self) -> &BTreeMap<CardId, Card> {
        &self.cards
    }

    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.get(card_id)
    }

    /// Connections in insertion order, which is also resolution order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn structure_rev(&self) -> u64 {
        self.structure_rev
    }

    pub fn points_rev(&self) -> u64 {
        self.points_rev
    }

    /// `(generation, structure_rev)`: equal keys mean the same board with the same structure.
    pub fn structure_key(&self) -> (u64, u64) {
        (self.generation, self.structure_rev)
    }

    /// Inserts or replaces a card, returning the previous one.
    pub fn insert_card(&mut self, card: Card) -> Option<Card> {
        self.bump_structure();
        self.cards.insert(card.id().clone(), card)
    }

    /// Removes a card together with every connection touching it.
    pub fn remove_card(&mut self, card_id: &CardId) -> Option<Card> {
        let removed = self.cards.remove(card_id)?;
        self.connections.retain(|connection| !connection.touches(card_id));
        self.bump_structure();
        Some(removed)
    }

    pub fn move_card(&mut self, card_id: &CardId, position: Position) -> bool {
        let Some(card) = self.cards.get_mut(card_id) else {
            return false;
        };
        if card.position() == position {
            return true;
        }
        card.set_position(position);
        self.bump_structure();
        true
    }

    pub fn set_manual(&mut self, card_id: &CardId, manual: SidePair<u64>) -> bool {
        let Some(card) = self.cards.get_mut(card_id) else {
            return false;
        };
        if card.manual() != manual {
            card.set_manual(manual);
            self.points_rev = self.points_rev.saturating_add(1);
        }
        true
    }

    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
        self.bump_structure();
    }

    pub fn remove_connection(&mut self, connection_id: &ConnectionId) -> Option<Connection> {
        let index = self
            .connections
            .iter()
            .position(|connection| connection.id() == connection_id)?;
        self.bump_structure();
        Some(self.connections.remove(index))
    }

    pub fn set_connection_locked(&mut self, connection_id: &ConnectionId, locked: bool) -> bool {
        let Some(connection) = self
            .connections
            .iter_mut()
            .find(|connection| connection.id() == connection_id)
        else {
            return false;
        };
        if connection.locked() != locked {
            connection.set_locked(locked);
            self.bump_structure();
        }
        true
    }

    fn bump_structure(&mut self) {
        self.structure_rev = self.structure_rev.saturating_add(1);
    }
}

/// Serializable `{cards, connections}` form of a board, used to hand boards across process
/// boundaries (CLI input, test fixtures).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl From<BoardSnapshot> for Board {
    fn from(snapshot: BoardSnapshot) -> Self {
        Board::from_parts(snapshot.cards, snapshot.connections)
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            cards: board.cards.values().cloned().collect(),
            connections: board.connections.clone(),
        }
    }
}
