// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Board data model.
//!
//! A board is a set of cards plus undirected connections. Only card positions, connection
//! endpoints/sides and manual points are inputs; the hierarchy and every point total are
//! derived by `query`.

pub mod board;
pub mod card;
pub mod connection;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod side;

pub use board::{Board, BoardSnapshot};
pub use card::{Card, Position};
pub use connection::Connection;
pub use ids::{CardId, ConnectionId, Id, IdError};
pub use side::{Side, SidePair};
