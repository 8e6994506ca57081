//! The static table of named styles.
//!
//! Every entry maps a name to the SGR codes it contributes. The table is
//! generated by a single macro invocation so that the [`StyleName`] enum, the
//! chaining methods on [`Style`] and the crate-level entry points
//! ([`red`], [`bold`], ...) can never drift apart.
//!
//! `grey`/`gray` and their `_bright` variants all share code 90 (100 for the
//! background variants), same as `black_bright`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StyleError;
use crate::style::{Style, StyleCode};

macro_rules! style_table {
    (
        $reset:ident => $reset_name:ident [$($reset_code:literal),+];
        $( $variant:ident => $method:ident [$($code:literal),+]; )+
    ) => {
        /// A name from the style table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleName {
            $reset,
            $( $variant, )+
        }

        impl StyleName {
            /// Every entry of the table, `reset` first.
            pub const ALL: &'static [StyleName] = &[StyleName::$reset, $( StyleName::$variant, )+];

            /// Every entry that can be chained onto a style (all but `reset`).
            pub const CHAINABLE: &'static [StyleName] = &[$( StyleName::$variant, )+];

            /// The canonical snake_case name.
            pub const fn name(self) -> &'static str {
                match self {
                    StyleName::$reset => stringify!($reset_name),
                    $( StyleName::$variant => stringify!($method), )+
                }
            }

            /// The codes this entry contributes.
            pub const fn codes(self) -> &'static [StyleCode] {
                match self {
                    StyleName::$reset => &[$( $reset_code ),+],
                    $( StyleName::$variant => &[$( $code ),+], )+
                }
            }
        }

        impl Style {
            $(
                #[doc = concat!("Returns this style combined with `", stringify!($method), "`.")]
                pub fn $method(&self) -> Style {
                    self.derive(StyleName::$variant)
                }
            )+
        }

        $(
            #[doc = concat!("The `", stringify!($method), "` style.")]
            pub fn $method() -> Style {
                Style::named(StyleName::$variant)
            }
        )+
    };
}

style_table! {
    Reset => reset [0];
    // Modifiers
    Bold => bold [1];
    Dim => dim [2];
    Italic => italic [3];
    Underline => underline [4];
    Inverse => inverse [7];
    Hidden => hidden [8];
    Strikethrough => strikethrough [9];
    // Foreground
    Black => black [30];
    Red => red [31];
    Green => green [32];
    Yellow => yellow [33];
    Blue => blue [34];
    Magenta => magenta [35];
    Cyan => cyan [36];
    White => white [37];
    Grey => grey [90];
    Gray => gray [90];
    // Bright foreground
    BlackBright => black_bright [90];
    RedBright => red_bright [91];
    GreenBright => green_bright [92];
    YellowBright => yellow_bright [93];
    BlueBright => blue_bright [94];
    MagentaBright => magenta_bright [95];
    CyanBright => cyan_bright [96];
    WhiteBright => white_bright [97];
    GreyBright => grey_bright [90];
    GrayBright => gray_bright [90];
    // Background
    BgBlack => bg_black [40];
    BgRed => bg_red [41];
    BgGreen => bg_green [42];
    BgYellow => bg_yellow [43];
    BgBlue => bg_blue [44];
    BgMagenta => bg_magenta [45];
    BgCyan => bg_cyan [46];
    BgWhite => bg_white [47];
    BgGrey => bg_grey [100];
    BgGray => bg_gray [100];
    // Bright background
    BgBlackBright => bg_black_bright [100];
    BgRedBright => bg_red_bright [101];
    BgGreenBright => bg_green_bright [102];
    BgYellowBright => bg_yellow_bright [103];
    BgBlueBright => bg_blue_bright [104];
    BgMagentaBright => bg_magenta_bright [105];
    BgCyanBright => bg_cyan_bright [106];
    BgWhiteBright => bg_white_bright [107];
    BgGreyBright => bg_grey_bright [100];
    BgGrayBright => bg_gray_bright [100];
}

/// Number of chainable entries; sizes the per-style derivation slots.
pub(crate) const CHAINABLE_COUNT: usize = StyleName::CHAINABLE.len();

impl StyleName {
    /// Returns false only for `reset`.
    pub fn is_chainable(self) -> bool {
        self != StyleName::Reset
    }

    /// Index into [`StyleName::CHAINABLE`], or `None` for `reset`.
    pub(crate) fn chain_slot(self) -> Option<usize> {
        (self as usize).checked_sub(1)
    }
}

/// Folds `blackBright` and `black-bright` into `black_bright`.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    for c in raw.trim().chars() {
        match c {
            '-' => out.push('_'),
            c if c.is_ascii_uppercase() => {
                if !out.is_empty() && !out.ends_with('_') {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
            }
            c => out.push(c),
        }
    }
    out
}

impl FromStr for StyleName {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        StyleName::ALL
            .iter()
            .copied()
            .find(|name| name.name() == wanted)
            .ok_or_else(|| StyleError::UnknownStyle {
                name: s.trim().to_string(),
            })
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for StyleName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for StyleName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
