use serde::Serialize;

/// A fixed, named map location exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

/// "Zoom to Akuse, Ghana" shortcut.
pub const AKUSE: City = City {
    name: "Akuse, Ghana",
    latitude: 6.1088,
    longitude: 0.1281,
    zoom: 5,
};

/// "Zoom to Timișoara, Romania" shortcut.
pub const TIMISOARA: City = City {
    name: "Timișoara, Romania",
    latitude: 45.7489,
    longitude: 21.2087,
    zoom: 5,
};

/// Initial map view and fallback when no shortcut was pressed.
pub const WORLD_VIEW: City = City {
    name: "World",
    latitude: 0.0,
    longitude: 0.0,
    zoom: 2,
};

/// All zoom shortcuts, in button order.
pub const MAP_CITIES: [City; 2] = [AKUSE, TIMISOARA];
