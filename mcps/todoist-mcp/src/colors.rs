//! Named colors accepted when creating labels and projects
//!
//! The numeric ids are the service's own and are not contiguous.

/// Color name to numeric id
pub const COLORS: [(&str, u32); 18] = [
    ("berry_red", 30),
    ("red", 31),
    ("orange", 32),
    ("yellow", 33),
    ("lime_green", 35),
    ("green", 36),
    ("mint_green", 37),
    ("teal", 38),
    ("sky_blue", 39),
    ("blue", 41),
    ("grape", 42),
    ("violet", 43),
    ("lavender", 44),
    ("magenta", 45),
    ("salmon", 46),
    ("charcoal", 47),
    ("grey", 48),
    ("taupe", 49),
];

/// Look up the numeric id for a color name
///
/// Unknown names yield `None`, which leaves the color unset.
pub fn color_id(name: &str) -> Option<u32> {
    COLORS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, id)| id)
}

/// Comma-separated list of accepted names, for help text
pub fn color_names() -> String {
    COLORS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
