// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Board, BoardSnapshot};

const DEMO_BOARD: &str = include_str!("../data/demo-board.json");

/// Built-in board used by `pvboard --demo`: two legs under `you`, one locked line.
pub fn demo_board() -> Result<Board, serde_json::Error> {
    let snapshot: BoardSnapshot = serde_json::from_str(DEMO_BOARD)?;
    Ok(snapshot.into())
}
