//! Per-source terminal colors, matching the marker colors the three
//! catalogs carry on the dashboard map.

use crate::models::SourceKind;
use ansi_term::Colour;

/// Marker color of one catalog (DesInventar red, EM-DAT blue, Dartmouth
/// green).
pub fn source_colour(source: SourceKind) -> Colour {
    match source {
        SourceKind::DesInventar => Colour::Red,
        SourceKind::EmDat => Colour::Blue,
        SourceKind::Dartmouth => Colour::Green,
    }
}

/// Source label painted in its marker color.
pub fn painted_label(source: SourceKind) -> String {
    source_colour(source).paint(source.label()).to_string()
}
