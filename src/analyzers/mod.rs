pub mod map_bounds;

pub use map_bounds::MapBounds;
