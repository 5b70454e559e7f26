mod query;
mod rect;

pub use query::{bounding_box, contains, distance, intersection, intersects, union};
pub use rect::Rect;
