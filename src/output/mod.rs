mod report;

pub use report::{AnimationReport, LayoutReport, write_report};
