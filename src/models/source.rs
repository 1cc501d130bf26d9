use serde::Serialize;

/// The three disaster catalogs merged into the unified table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SourceKind {
    DesInventar,
    EmDat,
    Dartmouth,
}

impl SourceKind {
    /// Fixed merge order: DesInventar rows precede EM-DAT rows precede
    /// Dartmouth rows in the unified table.
    pub const ALL: [SourceKind; 3] = [
        SourceKind::DesInventar,
        SourceKind::EmDat,
        SourceKind::Dartmouth,
    ];

    /// Database tag carried by every unified row.
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::DesInventar => "DesInventar",
            SourceKind::EmDat => "EM-DAT",
            SourceKind::Dartmouth => "Dartmouth",
        }
    }

    /// Convert a Database tag → enum.
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "DesInventar" => Some(SourceKind::DesInventar),
            "EM-DAT" => Some(SourceKind::EmDat),
            "Dartmouth" => Some(SourceKind::Dartmouth),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (case-insensitive, no dashes).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().replace('-', "").as_str() {
            "desinventar" => Some(SourceKind::DesInventar),
            "emdat" => Some(SourceKind::EmDat),
            "dartmouth" => Some(SourceKind::Dartmouth),
            _ => None,
        }
    }
}
