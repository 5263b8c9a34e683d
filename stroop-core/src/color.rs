use serde::{Deserialize, Serialize};

/// The fixed color-name set used for Stroop stimuli.
///
/// The name/hex table is a published contract for downstream analysis
/// tooling; serialized form is the upper-case name. Declaration order defines
/// the 1-based keystroke position of each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorName {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

impl ColorName {
    pub const ALL: [ColorName; 6] = [
        ColorName::Red,
        ColorName::Blue,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Purple,
        ColorName::Orange,
    ];

    /// Display hex code the word is rendered in.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorName::Red => "#e53935",
            ColorName::Blue => "#1e88e5",
            ColorName::Green => "#43a047",
            ColorName::Yellow => "#fdd835",
            ColorName::Purple => "#8e24aa",
            ColorName::Orange => "#fb8c00",
        }
    }

    /// Same color as an RGB triple, for hosts that paint directly.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorName::Red => (0xe5, 0x39, 0x35),
            ColorName::Blue => (0x1e, 0x88, 0xe5),
            ColorName::Green => (0x43, 0xa0, 0x47),
            ColorName::Yellow => (0xfd, 0xd8, 0x35),
            ColorName::Purple => (0x8e, 0x24, 0xaa),
            ColorName::Orange => (0xfb, 0x8c, 0x00),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorName::Red => "RED",
            ColorName::Blue => "BLUE",
            ColorName::Green => "GREEN",
            ColorName::Yellow => "YELLOW",
            ColorName::Purple => "PURPLE",
            ColorName::Orange => "ORANGE",
        }
    }

    /// Color at a 1-based list position, matching the numeric keystroke
    /// shortcuts offered by the response surface. Out-of-range positions
    /// (including 0) yield `None`.
    pub fn from_position(position: usize) -> Option<ColorName> {
        if position == 0 {
            return None;
        }
        Self::ALL.get(position - 1).copied()
    }

    /// 1-based position of this color in the declaration order.
    pub fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
