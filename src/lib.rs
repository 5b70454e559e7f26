pub mod animation;
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod output;

pub use animation::{RectAnimator, Throttle};
pub use cli::{ArrangementKind, CliArgs, Command};
pub use error::TrellisError;
pub use geometry::Rect;
pub use layout::{Arrangement, LayoutManager};
