//! Border glyph registry.
//!
//! Each [`LineStyle`] maps to one glyph tuple; the layout engine is
//! style-agnostic beyond substituting these glyphs. An empty horizontal
//! glyph suppresses every rule line, an empty vertical glyph collapses
//! the column separator to a single space.

/// Table border drawing style.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineStyle {
    /// `| - +`
    #[default]
    Ascii,
    Light,
    Heavy,
    Double,
    /// Light triple-dash lines
    LightDashed,
    /// Heavy triple-dash lines
    HeavyDashed,
    /// Light verticals, heavy horizontals
    LightHeavy,
    /// Light verticals, double horizontals
    LightDouble,
    /// Heavy verticals, light horizontals
    HeavyLight,
    /// Double verticals, light horizontals
    DoubleLight,
    /// ` : ` separator, no border — key/value listings
    Colon,
    /// Single-space separator, no border
    None,
}

/// One style's drawing glyphs.
#[derive(Clone, Copy, Debug)]
pub struct Glyphs {
    /// Rule line body; empty = draw no rules at all
    pub horizontal: &'static str,
    /// Column separator; empty = single space
    pub vertical: &'static str,
    /// Junction where the header separator crosses a column boundary
    pub cross: &'static str,
    /// Top-left, top-right, bottom-left, bottom-right
    pub corners: [&'static str; 4],
}

impl LineStyle {
    /// Every style, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Ascii,
        Self::Light,
        Self::Heavy,
        Self::Double,
        Self::LightDashed,
        Self::HeavyDashed,
        Self::LightHeavy,
        Self::LightDouble,
        Self::HeavyLight,
        Self::DoubleLight,
        Self::Colon,
        Self::None,
    ];

    #[must_use]
    pub const fn glyphs(self) -> Glyphs {
        match self {
            Self::Ascii => Glyphs {
                horizontal: "-",
                vertical: "|",
                cross: "+",
                corners: ["+", "+", "+", "+"],
            },
            Self::Light => Glyphs {
                horizontal: "─",
                vertical: "│",
                cross: "┼",
                corners: ["┌", "┐", "└", "┘"],
            },
            Self::Heavy => Glyphs {
                horizontal: "━",
                vertical: "┃",
                cross: "╋",
                corners: ["┏", "┓", "┗", "┛"],
            },
            Self::Double => Glyphs {
                horizontal: "═",
                vertical: "║",
                cross: "╬",
                corners: ["╔", "╗", "╚", "╝"],
            },
            Self::LightDashed => Glyphs {
                horizontal: "┄",
                vertical: "┆",
                cross: "┼",
                corners: ["┌", "┐", "└", "┘"],
            },
            Self::HeavyDashed => Glyphs {
                horizontal: "┅",
                vertical: "┇",
                cross: "╋",
                corners: ["┏", "┓", "┗", "┛"],
            },
            Self::LightHeavy => Glyphs {
                horizontal: "━",
                vertical: "│",
                cross: "┿",
                corners: ["┍", "┑", "┕", "┙"],
            },
            Self::LightDouble => Glyphs {
                horizontal: "═",
                vertical: "│",
                cross: "╪",
                corners: ["╒", "╕", "╘", "╛"],
            },
            Self::HeavyLight => Glyphs {
                horizontal: "─",
                vertical: "┃",
                cross: "╂",
                corners: ["┎", "┒", "┖", "┚"],
            },
            Self::DoubleLight => Glyphs {
                horizontal: "─",
                vertical: "║",
                cross: "╫",
                corners: ["╓", "╖", "╙", "╜"],
            },
            Self::Colon => Glyphs {
                horizontal: "",
                vertical: ":",
                cross: "",
                corners: ["", "", "", ""],
            },
            Self::None => Glyphs {
                horizontal: "",
                vertical: "",
                cross: "",
                corners: ["", "", "", ""],
            },
        }
    }

    /// True when the style draws rule lines and outer borders.
    #[must_use]
    pub const fn is_bordered(self) -> bool {
        !self.glyphs().horizontal.is_empty()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Light => "light",
            Self::Heavy => "heavy",
            Self::Double => "double",
            Self::LightDashed => "light-dashed",
            Self::HeavyDashed => "heavy-dashed",
            Self::LightHeavy => "light-heavy",
            Self::LightDouble => "light-double",
            Self::HeavyLight => "heavy-light",
            Self::DoubleLight => "double-light",
            Self::Colon => "colon",
            Self::None => "none",
        }
    }

    /// Inverse of [`name`](Self::name), for the CLI.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|st| st.name() == wanted)
    }
}
