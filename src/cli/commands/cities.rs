use crate::errors::AppResult;
use crate::models::{MAP_CITIES, WORLD_VIEW};
use crate::ui::messages::header;

/// Handle the `cities` command: the fixed zoom shortcuts and the default
/// map view, as exposed to the presentation layer.
pub fn handle() -> AppResult<()> {
    header("Map locations");

    for city in MAP_CITIES {
        println!(
            "{:<24} lat {:>8.4}  lon {:>8.4}  zoom {}",
            city.name, city.latitude, city.longitude, city.zoom
        );
    }

    println!(
        "{:<24} lat {:>8.4}  lon {:>8.4}  zoom {}  (default view)",
        WORLD_VIEW.name, WORLD_VIEW.latitude, WORLD_VIEW.longitude, WORLD_VIEW.zoom
    );

    Ok(())
}
