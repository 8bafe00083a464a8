// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::{CardId, ConnectionId};
use super::side::Side;

/// An undirected line between two cards.
///
/// Direction is never stored: which endpoint is the parent is decided by card geometry at
/// resolution time (see `query::topology`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    id: ConnectionId,
    a: CardId,
    b: CardId,
    #[serde(default)]
    side_on_a: Side,
    #[serde(default)]
    side_on_b: Side,
    #[serde(default)]
    locked: bool,
}

impl Connection {
    pub fn new(id: ConnectionId, a: CardId, side_on_a: Side, b: CardId, side_on_b: Side) -> Self {
        Self {
            id,
            a,
            b,
            side_on_a,
            side_on_b,
            locked: false,
        }
    }

    pub fn id(&self) -> &ConnectionId {
        &self.id
    }

    pub fn a(&self) -> &CardId {
        &self.a
    }

    pub fn b(&self) -> &CardId {
        &self.b
    }

    pub fn side_on_a(&self) -> Side {
        self.side_on_a
    }

    pub fn side_on_b(&self) -> Side {
        self.side_on_b
    }

    /// A locked connection stays on the canvas but takes no part in the hierarchy.
    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    pub fn touches(&self, card_id: &CardId) -> bool {
        &self.a == card_id || &self.b == card_id
    }
}
