use std::fmt;

use super::color::PaletteColor;

/// Team / faction classifier.
///
/// Named variants map to fixed variation tables; `Custom` covers ad-hoc teams, which
/// receive a single allocator-drawn color instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamKind {
    Red,
    Blue,
    Teal,
    Purple,
    Yellow,
    Orange,
    Green,
    Bot,
    Humans,
    Nations,
    Custom(String),
}

impl TeamKind {
    /// Every classifier that owns a fixed variation table.
    pub const NAMED: [TeamKind; 10] = [
        TeamKind::Red,
        TeamKind::Blue,
        TeamKind::Teal,
        TeamKind::Purple,
        TeamKind::Yellow,
        TeamKind::Orange,
        TeamKind::Green,
        TeamKind::Bot,
        TeamKind::Humans,
        TeamKind::Nations,
    ];

    /// Case-insensitive lookup; unknown names become `Custom` with the name kept verbatim.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "red" => TeamKind::Red,
            "blue" => TeamKind::Blue,
            "teal" => TeamKind::Teal,
            "purple" => TeamKind::Purple,
            "yellow" => TeamKind::Yellow,
            "orange" => TeamKind::Orange,
            "green" => TeamKind::Green,
            "bot" => TeamKind::Bot,
            "humans" => TeamKind::Humans,
            "nations" => TeamKind::Nations,
            _ => TeamKind::Custom(name.to_owned()),
        }
    }

    /// Lowercase key used in config files. For `Custom` teams this is the raw identity.
    pub fn name(&self) -> &str {
        match self {
            TeamKind::Red => "red",
            TeamKind::Blue => "blue",
            TeamKind::Teal => "teal",
            TeamKind::Purple => "purple",
            TeamKind::Yellow => "yellow",
            TeamKind::Orange => "orange",
            TeamKind::Green => "green",
            TeamKind::Bot => "bot",
            TeamKind::Humans => "humans",
            TeamKind::Nations => "nations",
            TeamKind::Custom(id) => id,
        }
    }

    #[inline]
    pub fn is_named(&self) -> bool {
        !matches!(self, TeamKind::Custom(_))
    }

    /// Built-in base color for named teams; `None` for `Custom`.
    pub fn default_base(&self) -> Option<PaletteColor> {
        let rgb = match self {
            TeamKind::Red => [227, 55, 55],
            TeamKind::Blue => [52, 101, 211],
            TeamKind::Teal => [34, 166, 160],
            TeamKind::Purple => [142, 68, 173],
            TeamKind::Yellow => [233, 196, 46],
            TeamKind::Orange => [238, 124, 38],
            TeamKind::Green => [67, 160, 71],
            TeamKind::Bot => [130, 130, 130],
            TeamKind::Humans => [214, 190, 150],
            TeamKind::Nations => [120, 94, 64],
            TeamKind::Custom(_) => return None,
        };
        Some(PaletteColor::from(rgb))
    }
}

impl From<&str> for TeamKind {
    fn from(name: &str) -> Self {
        TeamKind::from_name(name)
    }
}

impl fmt::Display for TeamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
