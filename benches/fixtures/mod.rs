// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use pvboard::model::{Board, Card, CardId, Connection, ConnectionId, Position, Side};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// Balanced binary tree, 63 cards.
    Small,
    /// Balanced binary tree, 4095 cards.
    Medium,
    /// Single left leg, 10_000 cards deep.
    LongChain,
    /// One root with 5_000 direct children split across both sides.
    Wide,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LongChain => "long_chain",
            Self::Wide => "wide",
        }
    }
}

pub fn card_id(index: usize) -> CardId {
    CardId::new(format!("c{index:06}")).expect("card id")
}

fn connection(index: usize, parent: usize, side: Side, child: usize) -> Connection {
    Connection::new(
        ConnectionId::new(format!("l{index:06}")).expect("connection id"),
        card_id(parent),
        side,
        card_id(child),
        side.opposite(),
    )
}

/// Manual points spread so that roughly a third of the cards sit just below a pack boundary.
fn manual_points(index: usize) -> (u64, u64) {
    let seed = (index as u64).wrapping_mul(2_654_435_761) % 1_000;
    (seed, (seed * 7) % 331)
}

fn binary_tree(count: usize) -> Board {
    let mut cards = Vec::with_capacity(count);
    let mut lines = Vec::with_capacity(count.saturating_sub(1));
    for index in 0..count {
        let depth = (usize::BITS - (index + 1).leading_zeros() - 1) as f64;
        let (left, right) = manual_points(index);
        cards.push(
            Card::new(card_id(index), Position::new(index as f64, depth * 100.0))
                .with_manual(left, right),
        );
        if index > 0 {
            let side = if index % 2 == 1 { Side::Left } else { Side::Right };
            lines.push(connection(index, (index - 1) / 2, side, index));
        }
    }
    Board::from_parts(cards, lines)
}

fn chain(count: usize) -> Board {
    let mut cards = Vec::with_capacity(count);
    let mut lines = Vec::with_capacity(count.saturating_sub(1));
    for index in 0..count {
        let (left, right) = manual_points(index);
        cards.push(
            Card::new(card_id(index), Position::new(0.0, index as f64 * 10.0))
                .with_manual(left, right),
        );
        if index > 0 {
            lines.push(connection(index, index - 1, Side::Left, index));
        }
    }
    Board::from_parts(cards, lines)
}

fn wide(children: usize) -> Board {
    let mut cards = Vec::with_capacity(children + 1);
    let mut lines = Vec::with_capacity(children);
    cards.push(Card::new(card_id(0), Position::new(0.0, 0.0)));
    for index in 1..=children {
        let (left, right) = manual_points(index);
        cards.push(
            Card::new(card_id(index), Position::new(index as f64, 100.0)).with_manual(left, right),
        );
        let side = if index % 2 == 1 { Side::Left } else { Side::Right };
        lines.push(connection(index, 0, side, index));
    }
    Board::from_parts(cards, lines)
}

pub fn fixture(case: Case) -> Board {
    match case {
        Case::Small => binary_tree(63),
        Case::Medium => binary_tree(4_095),
        Case::LongChain => chain(10_000),
        Case::Wide => wide(5_000),
    }
}

/// Deepest card of the fixture; edits there walk the longest ancestor chain.
pub fn deepest(case: Case) -> CardId {
    match case {
        Case::Small => card_id(62),
        Case::Medium => card_id(4_094),
        Case::LongChain => card_id(9_999),
        Case::Wide => card_id(5_000),
    }
}
