// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only derivations over a board.
//!
//! Topology turns geometry into a parent map, rollup turns manual points into packs, and the
//! stage table turns pack totals into cycle/stage progress.

pub mod rollup;
pub mod stage;
pub mod topology;

pub use rollup::{rollup, Rollup, RollupResult};
pub use stage::{map_stage, StageProgress, StageTable, FINAL_STAGE};
pub use topology::{resolve, AncestorChain, ParentLink, Topology, TopologyCache};
