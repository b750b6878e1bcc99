// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use monthcal_core::DisplayMonth;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

pub fn arg_month() -> Arg {
    arg!(--month <MONTH> "Month to show, as YYYY-MM. Defaults to the current month")
        .value_parser(value_parser!(DisplayMonth))
}

pub fn get_month(matches: &ArgMatches) -> Option<DisplayMonth> {
    matches.get_one::<DisplayMonth>("month").copied()
}

/// Returns the display width of the first `n_graphemes` grapheme clusters of `s`.
pub fn unicode_width_of_graphemes(s: &str, n_graphemes: usize) -> usize {
    let end = byte_range_of_grapheme_at(s, n_graphemes).map_or(s.len(), |r| r.start);
    s[..end].width()
}

/// Return the byte range of the grapheme cluster at index `g_idx` in `s`.
/// If out of bounds, returns None.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}

/// Cuts `s` to at most `width` columns, marking the cut with `…`.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    } else if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w + 1 > width {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    out
}
