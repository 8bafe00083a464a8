// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Increase/decrease/clear implementation helpers used by `apply_delta` and `clear_points`.
/// Keeps `ops::mod` focused on public edit types and dispatch.
fn increase_points(ctx: &EditContext<'_>, card_id: &CardId, side: Side, amount: u64) -> DeltaOutcome {
    let Some(card) = ctx.board.card(card_id) else {
        return DeltaOutcome::default();
    };
    let Some(before) = ctx.local_points(card_id) else {
        return DeltaOutcome::default();
    };
    let threshold = ctx.threshold();

    let mut manual = card.manual();
    let slot = manual.get_mut(side);
    let applied = amount.min(u64::MAX - *slot);
    if applied == 0 {
        return DeltaOutcome::default();
    }
    *slot += applied;

    let mut after = before;
    let points = after.get_mut(side);
    *points = points.saturating_add(applied);

    let mut patches = PatchBuilder::default();
    patches.record(
        card_id,
        CardPatch::new(manual, RollupResult::from_points(after, threshold), &ctx.stages),
    );

    let gained = after.get(side) / threshold - before.get(side) / threshold;
    let partial = propagate_packs(ctx, card_id, gained, &mut patches);

    tracing::debug!(
        card = %card_id,
        side = %side,
        amount = applied,
        packs = gained,
        touched = patches.order.len(),
        "delta.increase"
    );

    patches.finish(i64::try_from(applied).unwrap_or(i64::MAX), partial)
}

/// Pushes `gained` packs from `origin` up the parent chain.
///
/// Each parent receives the packs on the side the child hangs on; the walk continues while a
/// level completes new packs of its own. Returns `true` if a card was re-entered.
fn propagate_packs(
    ctx: &EditContext<'_>,
    origin: &CardId,
    mut gained: u64,
    patches: &mut PatchBuilder,
) -> bool {
    let threshold = ctx.threshold();
    let mut seen: BTreeSet<&CardId> = BTreeSet::new();
    seen.insert(origin);

    let mut child = origin;
    while gained > 0 {
        let Some(link) = ctx.topology.parent(child) else {
            break;
        };
        let parent_id = &link.parent_id;
        if !seen.insert(parent_id) {
            tracing::warn!(origin = %origin, reentered = %parent_id, "delta.partial");
            return true;
        }
        let (Some(parent), Some(before)) = (ctx.board.card(parent_id), ctx.local_points(parent_id))
        else {
            break;
        };

        let mut after = before;
        let points = after.get_mut(link.side);
        *points = points.saturating_add(gained.saturating_mul(threshold));
        gained = after.get(link.side) / threshold - before.get(link.side) / threshold;

        patches.record(
            parent_id,
            CardPatch::new(
                parent.manual(),
                RollupResult::from_points(after, threshold),
                &ctx.stages,
            ),
        );
        child = parent_id;
    }
    false
}

fn decrease_points(ctx: &EditContext<'_>, card_id: &CardId, side: Side, amount: u64) -> DeltaOutcome {
    let Some(card) = ctx.board.card(card_id) else {
        return DeltaOutcome::default();
    };
    let Some(before) = ctx.local_points(card_id) else {
        return DeltaOutcome::default();
    };
    let threshold = ctx.threshold();

    let remainder = before.get(side) % threshold;
    let removable = amount.min(remainder).min(card.manual_on(side));
    if removable == 0 {
        tracing::debug!(card = %card_id, side = %side, amount, "delta.clamped_to_noop");
        return DeltaOutcome::default();
    }

    let mut manual = card.manual();
    *manual.get_mut(side) -= removable;
    let mut after = before;
    *after.get_mut(side) -= removable;

    let mut patches = PatchBuilder::default();
    patches.record(
        card_id,
        CardPatch::new(manual, RollupResult::from_points(after, threshold), &ctx.stages),
    );
    tracing::debug!(card = %card_id, side = %side, amount = removable, "delta.decrease");

    patches.finish(-i64::try_from(removable).unwrap_or(i64::MAX), false)
}

fn reset_points(ctx: &EditContext<'_>, card_id: &CardId, scope: ClearScope) -> DeltaOutcome {
    let Some(card) = ctx.board.card(card_id) else {
        return DeltaOutcome::default();
    };
    let Some(mut after) = ctx.local_points(card_id) else {
        return DeltaOutcome::default();
    };

    let mut manual = card.manual();
    let mut cleared = 0u64;
    for side in scope.sides() {
        let removed = std::mem::take(manual.get_mut(*side));
        let points = after.get_mut(*side);
        *points = points.saturating_sub(removed);
        cleared = cleared.saturating_add(removed);
    }
    if cleared == 0 {
        return DeltaOutcome::default();
    }

    let mut patches = PatchBuilder::default();
    patches.record(
        card_id,
        CardPatch::new(
            manual,
            RollupResult::from_points(after, ctx.threshold()),
            &ctx.stages,
        ),
    );
    tracing::debug!(card = %card_id, cleared, "delta.clear");

    patches.finish(-i64::try_from(cleared).unwrap_or(i64::MAX), false)
}
