use serde::{Deserialize, Serialize};

/// Identity of a simulated body, used to pick its appearance.
///
/// The set is closed: anything the viewer has no dedicated appearance for is
/// [`BodyKind::Unlisted`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    #[default]
    Unlisted,
}

impl BodyKind {
    pub const ALL: [BodyKind; 11] = [
        BodyKind::Sun,
        BodyKind::Mercury,
        BodyKind::Venus,
        BodyKind::Earth,
        BodyKind::Moon,
        BodyKind::Mars,
        BodyKind::Jupiter,
        BodyKind::Saturn,
        BodyKind::Uranus,
        BodyKind::Neptune,
        BodyKind::Unlisted,
    ];

    /// Resolves a body name case-insensitively. Unknown names map to `Unlisted`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| *kind != BodyKind::Unlisted && kind.name().eq_ignore_ascii_case(name))
            .unwrap_or(BodyKind::Unlisted)
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyKind::Sun => "sun",
            BodyKind::Mercury => "mercury",
            BodyKind::Venus => "venus",
            BodyKind::Earth => "earth",
            BodyKind::Moon => "moon",
            BodyKind::Mars => "mars",
            BodyKind::Jupiter => "jupiter",
            BodyKind::Saturn => "saturn",
            BodyKind::Uranus => "uranus",
            BodyKind::Neptune => "neptune",
            BodyKind::Unlisted => "unlisted",
        }
    }
}
