pub mod city;
pub mod record;
pub mod source;

// Re-export dei tipi usati ovunque nel crate.
pub use city::{AKUSE, City, MAP_CITIES, TIMISOARA, WORLD_VIEW};
pub use record::DisasterRecord;
pub use source::SourceKind;
