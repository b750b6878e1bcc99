// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Colors offered by the event form, as `(name, #rrggbb)`.
pub const PALETTE: &[(&str, &str)] = &[
    ("blue", "#3b82f6"),
    ("red", "#ef4444"),
    ("green", "#22c55e"),
    ("amber", "#f59e0b"),
    ("purple", "#a855f7"),
    ("slate", "#64748b"),
];

/// Parses a `#rrggbb` color into its components.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// The palette name of a color, if it is one of the presets.
pub fn palette_name(color: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(_, hex)| hex.eq_ignore_ascii_case(color.trim()))
        .map(|(name, _)| *name)
}
