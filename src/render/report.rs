// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::text::{char_width, push_number, push_padded, truncate_with_ellipsis};
use crate::engine::CardView;
use crate::ops::DeltaOutcome;

const MAX_ID_WIDTH: usize = 16;
const NUMBER_WIDTH: usize = 6;
const NUMBER_HEADERS: [&str; 10] = [
    "man.L", "man.R", "rem.L", "rem.R", "pk.L", "pk.R", "total", "cycle", "stage", "next",
];

/// Renders one row per card: manual points, remainders, packs and stage progress.
///
/// Cards whose contribution was dropped during the last full pass are marked with `!`.
pub fn render_report(views: &[CardView]) -> String {
    let id_width = views
        .iter()
        .flat_map(|view| {
            let parent_len = view.parent_id.as_ref().map_or(1, |id| char_width(id.as_str()));
            [char_width(view.card_id.as_str()), parent_len]
        })
        .chain([char_width("card"), char_width("parent")])
        .max()
        .unwrap_or(0)
        .min(MAX_ID_WIDTH);

    let mut out = String::new();
    push_padded(&mut out, "card", id_width, false);
    out.push(' ');
    push_padded(&mut out, "parent", id_width, false);
    for header in NUMBER_HEADERS {
        out.push(' ');
        push_padded(&mut out, header, NUMBER_WIDTH, true);
    }
    out.push('\n');

    for view in views {
        push_padded(
            &mut out,
            &truncate_with_ellipsis(view.card_id.as_str(), id_width),
            id_width,
            false,
        );
        out.push(' ');
        let parent = view.parent_id.as_ref().map_or("-", |id| id.as_str());
        push_padded(&mut out, &truncate_with_ellipsis(parent, id_width), id_width, false);

        for value in [
            view.manual.left,
            view.manual.right,
            view.remainder.left,
            view.remainder.right,
            view.packs_earned.left,
            view.packs_earned.right,
            view.total_packs,
            view.stage.cycle,
            u64::from(view.stage.stage),
            view.stage.to_next_stage,
        ] {
            out.push(' ');
            push_number(&mut out, value, NUMBER_WIDTH);
        }
        if view.inconsistent {
            out.push_str(" !");
        }
        out.push('\n');
    }

    out
}

/// One-line summary of an edit: the propagation path, root-ward.
pub fn render_outcome(outcome: &DeltaOutcome) -> String {
    if outcome.is_empty() {
        return "no change".to_owned();
    }
    let path = outcome
        .changed_ids
        .iter()
        .map(|card_id| card_id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ");
    let mut line = format!("{path} (delta {})", outcome.applied_delta);
    if outcome.partial {
        line.push_str(" [partial]");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{render_outcome, render_report};
    use crate::config::EngineConfig;
    use crate::engine::PvEngine;
    use crate::model::fixtures::{chain_left, cid};
    use crate::model::Side;
    use crate::ops::{DeltaOutcome, PointOp};

    #[test]
    fn report_has_header_and_one_row_per_card() {
        let mut engine = PvEngine::new(chain_left(700), EngineConfig::default()).expect("engine");
        let report = render_report(&engine.card_views());
        let lines = report.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("card"));
        assert!(lines[0].trim_end().ends_with("next"));
        // a: no parent, 2 packs on the left.
        let a = lines[1].split_whitespace().collect::<Vec<_>>();
        assert_eq!(a, vec!["a", "-", "0", "0", "0", "0", "2", "0", "2", "0", "0", "4"]);
        let b = lines[2].split_whitespace().collect::<Vec<_>>();
        assert_eq!(b[..3], ["b", "a", "700"]);
    }

    #[test]
    fn outcome_line_shows_propagation_path() {
        let mut engine = PvEngine::new(chain_left(300), EngineConfig::default()).expect("engine");
        let outcome = engine.apply(&PointOp::Adjust {
            card_id: cid("b"),
            side: Side::Left,
            delta: 30,
        });
        assert_eq!(render_outcome(&outcome), "b -> a (delta 30)");
        assert_eq!(render_outcome(&DeltaOutcome::default()), "no change");
    }
}
