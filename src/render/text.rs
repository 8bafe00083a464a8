// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pvboard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Cuts `text` to at most `max_chars` chars, marking the cut with `…`.
pub(crate) fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.char_indices().nth(max_chars).is_none() {
        return text.to_owned();
    }
    let Some(keep) = max_chars.checked_sub(1) else {
        return String::new();
    };
    let cut = text.char_indices().nth(keep).map_or(text.len(), |(index, _)| index);
    let mut out = String::with_capacity(cut + '…'.len_utf8());
    out.push_str(&text[..cut]);
    out.push('…');
    out
}

pub(crate) fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Appends `text` to `out`, padded with spaces to `width` chars.
pub(crate) fn push_padded(out: &mut String, text: &str, width: usize, align_right: bool) {
    let fill = width.saturating_sub(char_width(text));
    if align_right {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(text);
    } else {
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(fill));
    }
}

pub(crate) fn push_number(out: &mut String, value: u64, width: usize) {
    let mut buffer = itoa::Buffer::new();
    push_padded(out, buffer.format(value), width, true);
}

#[cfg(test)]
mod tests {
    use super::{char_width, push_number, push_padded, truncate_with_ellipsis};

    #[test]
    fn ids_that_fit_are_kept_whole() {
        assert_eq!(truncate_with_ellipsis("", 0), "");
        assert_eq!(truncate_with_ellipsis("c:root", 6), "c:root");
        assert_eq!(truncate_with_ellipsis("c:root", 16), "c:root");
    }

    #[test]
    fn long_ids_are_cut_with_a_marker() {
        assert_eq!(truncate_with_ellipsis("c:partner-000123", 8), "c:partn…");
        assert_eq!(char_width(&truncate_with_ellipsis("c:partner-000123", 8)), 8);
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("h", 1), "h");
        assert_eq!(truncate_with_ellipsis("hello", 2), "h…");
    }

    #[test]
    fn widths_count_chars_not_bytes() {
        assert_eq!(char_width("αβγ"), 3);
        assert_eq!(truncate_with_ellipsis("αβγ", 2), "α…");
    }

    #[test]
    fn padding_aligns_both_ways() {
        let mut out = String::new();
        push_padded(&mut out, "ab", 4, false);
        out.push('|');
        push_number(&mut out, 42, 4);
        assert_eq!(out, "ab  |  42");
    }
}
