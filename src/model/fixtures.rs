// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::board::Board;
use super::card::{Card, Position};
use super::connection::Connection;
use super::ids::{CardId, ConnectionId};
use super::side::Side;

pub(crate) fn cid(value: &str) -> CardId {
    CardId::new(value).expect("card id")
}

pub(crate) fn card(id: &str, y: f64) -> Card {
    Card::new(cid(id), Position::new(0.0, y))
}

pub(crate) fn line(id: &str, a: &str, side_on_a: Side, b: &str, side_on_b: Side) -> Connection {
    Connection::new(
        ConnectionId::new(id).expect("connection id"),
        cid(a),
        side_on_a,
        cid(b),
        side_on_b,
    )
}

/// `a` on top with `b` hanging on its left branch.
pub(crate) fn chain_left(b_manual_left: u64) -> Board {
    Board::from_parts(
        [card("a", 0.0), card("b", 100.0).with_manual(b_manual_left, 0)],
        vec![line("l:ab", "a", Side::Left, "b", Side::Right)],
    )
}

/// Three levels: `root` ─left→ `mid` ─right→ `leaf`, plus `sib` on the right of `root`.
pub(crate) fn three_levels() -> Board {
    Board::from_parts(
        [
            card("root", 0.0).with_manual(10, 20),
            card("mid", 100.0).with_manual(329, 5),
            card("sib", 100.0).with_manual(0, 660),
            card("leaf", 200.0).with_manual(300, 0),
        ],
        vec![
            line("l:root-mid", "root", Side::Left, "mid", Side::Left),
            line("l:root-sib", "root", Side::Right, "sib", Side::Left),
            line("l:mid-leaf", "mid", Side::Right, "leaf", Side::Left),
        ],
    )
}

/// Two cards on the same row connected twice in opposite directions, which resolves into a
/// parent cycle `x → y → x`.
pub(crate) fn same_row_cycle() -> Board {
    Board::from_parts(
        [card("x", 50.0).with_manual(330, 0), card("y", 50.0).with_manual(0, 660)],
        vec![
            line("l:xy", "x", Side::Left, "y", Side::Left),
            line("l:yx", "y", Side::Right, "x", Side::Left),
        ],
    )
}
