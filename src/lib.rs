// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pvboard: point-value rollup and stage/cycle engine for card boards.
//!
//! Cards joined by lines form a hierarchy resolved from card geometry (`query::topology`). Manual
//! points roll up per side in whole packs (`query::rollup`), pack totals map to stages and cycles
//! (`query::stage`), and single-card edits propagate incrementally (`ops`). `engine::PvEngine`
//! ties the pieces together for an editor.

pub mod config;
pub mod demo;
pub mod engine;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
