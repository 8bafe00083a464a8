// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parent/child resolution from card geometry.
//!
//! Connections are undirected on the canvas. For every active connection the endpoint drawn
//! higher (smaller `y`) becomes the parent and the child hangs on the side the parent's end of the
//! line is attached to. A child keeps the first parent it resolves to unless a later candidate
//! sits strictly higher.

use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;

use crate::model::{Board, CardId, Side, SidePair};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentLink {
    pub parent_id: CardId,
    pub side: Side,
}

/// Immutable hierarchy snapshot derived from a board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Topology {
    parent_of: BTreeMap<CardId, ParentLink>,
    children_of: BTreeMap<CardId, SidePair<BTreeSet<CardId>>>,
}

/// The parent chain above a card, nearest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AncestorChain {
    pub links: SmallVec<[ParentLink; 8]>,
    /// Set when the walk re-entered a card it had already passed.
    pub cycle: bool,
}

impl Topology {
    pub fn parent_of(&self) -> &BTreeMap<CardId, ParentLink> {
        &self.parent_of
    }

    pub fn children_of(&self) -> &BTreeMap<CardId, SidePair<BTreeSet<CardId>>> {
        &self.children_of
    }

    pub fn parent(&self, card_id: &CardId) -> Option<&ParentLink> {
        self.parent_of.get(card_id)
    }

    pub fn children(&self, card_id: &CardId, side: Side) -> impl Iterator<Item = &CardId> + '_ {
        self.children_of
            .get(card_id)
            .map(move |pair| pair.get(side))
            .into_iter()
            .flatten()
    }

    pub fn child_count(&self, card_id: &CardId) -> usize {
        self.children_of
            .get(card_id)
            .map(|pair| pair.left.len() + pair.right.len())
            .unwrap_or(0)
    }

    /// Cards of `board` with no resolved parent, in id order.
    pub fn roots<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = &'a CardId> + 'a {
        board
            .cards()
            .keys()
            .filter(move |card_id| !self.parent_of.contains_key(*card_id))
    }

    /// Walks parent links upward from `card_id`, stopping at a root or on re-entry.
    pub fn ancestors(&self, card_id: &CardId) -> AncestorChain {
        let mut chain = AncestorChain::default();
        let mut seen: BTreeSet<&CardId> = BTreeSet::new();
        seen.insert(card_id);

        let mut current = card_id;
        while let Some(link) = self.parent_of.get(current) {
            if !seen.insert(&link.parent_id) {
                chain.cycle = true;
                break;
            }
            chain.links.push(link.clone());
            current = &link.parent_id;
        }
        chain
    }

    fn attach(&mut self, child: &CardId, parent: &CardId, side: Side) {
        if let Some(previous) = self.parent_of.get(child) {
            if let Some(siblings) = self.children_of.get_mut(&previous.parent_id) {
                siblings.get_mut(previous.side).remove(child);
            }
        }
        self.parent_of.insert(
            child.clone(),
            ParentLink {
                parent_id: parent.clone(),
                side,
            },
        );
        self.children_of
            .entry(parent.clone())
            .or_default()
            .get_mut(side)
            .insert(child.clone());
    }
}

/// Resolves the card hierarchy of `board`.
///
/// Locked connections, self-connections and connections naming unknown cards are skipped. When
/// both endpoints share the same `y`, endpoint `a` is taken as the parent.
pub fn resolve(board: &Board) -> Topology {
    let mut topology = Topology::default();

    for connection in board.connections() {
        if connection.locked() || connection.is_self_loop() {
            continue;
        }
        let (Some(card_a), Some(card_b)) = (board.card(connection.a()), board.card(connection.b()))
        else {
            continue;
        };

        let (parent, child, side) = if card_b.position().y < card_a.position().y {
            (card_b, card_a, connection.side_on_b())
        } else {
            (card_a, card_b, connection.side_on_a())
        };

        let replace = match topology.parent_of.get(child.id()) {
            None => true,
            Some(existing) => board
                .card(&existing.parent_id)
                .map_or(true, |current| parent.position().y < current.position().y),
        };
        if replace {
            topology.attach(child.id(), parent.id(), side);
        }
    }

    topology
}

/// Memoized topology keyed on the board's generation and structure revision.
///
/// Point edits leave `structure_rev` alone, so repeated `+1` clicks reuse one resolution. Handing
/// the cache a different board (or a clone) always resolves again.
#[derive(Debug, Default)]
pub struct TopologyCache {
    key: Option<(u64, u64)>,
    topology: Topology,
}

impl TopologyCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, board: &Board) -> &Topology {
        let key = board.structure_key();
        if self.key != Some(key) {
            tracing::debug!(generation = key.0, structure_rev = key.1, "topology.resolve");
            self.topology = resolve(board);
            self.key = Some(key);
        }
        &self.topology
    }

    pub fn is_fresh(&self, board: &Board) -> bool {
        self.key == Some(board.structure_key())
    }
}
