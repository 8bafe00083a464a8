// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::ids::CardId;
use super::side::{Side, SidePair};

/// Canvas position of a card. Smaller `y` is visually higher.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A board card. Only `manual` is authoritative engine input; everything the engine derives
/// from it lives in `query::rollup::Rollup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    manual: SidePair<u64>,
}

impl Card {
    pub fn new(id: CardId, position: Position) -> Self {
        Self {
            id,
            position,
            manual: SidePair::default(),
        }
    }

    pub fn with_manual(mut self, left: u64, right: u64) -> Self {
        self.manual = SidePair::new(left, right);
        self
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn manual(&self) -> SidePair<u64> {
        self.manual
    }

    pub fn manual_on(&self, side: Side) -> u64 {
        *self.manual.get(side)
    }

    pub fn set_manual(&mut self, manual: SidePair<u64>) {
        self.manual = manual;
    }
}
