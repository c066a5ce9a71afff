// File: crates/livegraph-core/src/theme.rs
// Summary: Backend-free RGBA colors and the chart color presets.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const GREEN: Self = Self::opaque(0, 255, 0);
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub background: Rgba,
    /// Stroke color for the plotted series.
    pub series: Rgba,
    pub tick: Rgba,
    pub tick_label: Rgba,
    pub grid: Rgba,
    pub border: Rgba,
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

impl Theme {
    /// Black panel, green ticks and labels, white border and series.
    pub fn classic() -> Self {
        Self {
            name: "classic".into(),
            background: Rgba::BLACK,
            series: Rgba::WHITE,
            tick: Rgba::GREEN,
            tick_label: Rgba::GREEN,
            grid: Rgba::from_argb(64, 255, 255, 255),
            border: Rgba::WHITE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            background: Rgba::from_argb(255, 18, 18, 20),
            series: Rgba::from_argb(255, 64, 160, 255),
            tick: Rgba::from_argb(255, 150, 150, 160),
            tick_label: Rgba::from_argb(255, 235, 235, 245),
            grid: Rgba::from_argb(255, 40, 40, 45),
            border: Rgba::from_argb(255, 180, 180, 190),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".into(),
            background: Rgba::from_argb(255, 250, 250, 252),
            series: Rgba::from_argb(255, 32, 120, 200),
            tick: Rgba::from_argb(255, 100, 100, 110),
            tick_label: Rgba::from_argb(255, 20, 20, 30),
            grid: Rgba::from_argb(255, 230, 230, 235),
            border: Rgba::from_argb(255, 60, 60, 70),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark".into(),
            background: Rgba::from_argb(255, 0x00, 0x2b, 0x36), // base03
            series: Rgba::from_argb(255, 0x26, 0x8b, 0xd2),     // blue
            tick: Rgba::from_argb(255, 0x83, 0x94, 0x96),       // base0
            tick_label: Rgba::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            grid: Rgba::from_argb(255, 0x07, 0x36, 0x42),       // base02
            border: Rgba::from_argb(255, 0x93, 0xa1, 0xa1),     // base1
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light".into(),
            background: Rgba::from_argb(255, 0xfd, 0xf6, 0xe3),
            series: Rgba::from_argb(255, 0x26, 0x8b, 0xd2),
            tick: Rgba::from_argb(255, 0x58, 0x6e, 0x75),
            tick_label: Rgba::from_argb(255, 0x00, 0x2b, 0x36),
            grid: Rgba::from_argb(255, 0xee, 0xe8, 0xd5),
            border: Rgba::from_argb(255, 0x65, 0x7b, 0x83),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark".into(),
            background: Rgba::BLACK,
            series: Rgba::from_argb(255, 0x00, 0xff, 0xff),
            tick: Rgba::from_argb(255, 0xcc, 0xcc, 0xcc),
            tick_label: Rgba::WHITE,
            grid: Rgba::from_argb(255, 0x22, 0x22, 0x22),
            border: Rgba::WHITE,
        }
    }
}

pub fn presets() -> Vec<Theme> {
    vec![
        Theme::classic(),
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a preset by name (case-insensitive), falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
