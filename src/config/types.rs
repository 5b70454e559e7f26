use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::{Arrangement, LayoutManager};

/// One control to place: a name for the report and a fixed size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSpec {
    /// Label used in output (defaults to `control_<index>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub width: i32,
    pub height: i32,
}

impl ControlSpec {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            name: None,
            width,
            height,
        }
    }

    pub fn named(name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            name: Some(name.into()),
            width,
            height,
        }
    }

    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("control_{}", index))
    }
}

/// Layout file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Layout file version (currently 1)
    pub version: u32,
    /// Name used in the report (defaults to the file stem)
    pub name: Option<String>,
    /// Region the controls are arranged in
    pub container: Rect,
    /// Controls in placement order
    pub controls: Vec<ControlSpec>,
    /// Arrangement strategy and its parameters
    pub arrangement: Arrangement,
    /// Maximum number of controls (unbounded if absent)
    pub capacity: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            version: 1,
            name: None,
            container: Rect::ZERO,
            controls: Vec::new(),
            arrangement: Arrangement::default(),
            capacity: None,
        }
    }
}

impl LayoutConfig {
    /// Sample layout written by `trellis init`
    pub fn sample() -> Self {
        Self {
            name: Some("toolbar".to_string()),
            container: Rect::new(0, 0, 210, 110),
            controls: vec![
                ControlSpec::named("ok", 80, 30),
                ControlSpec::named("cancel", 80, 30),
                ControlSpec::named("apply", 80, 30),
                ControlSpec::named("help", 80, 30),
            ],
            arrangement: Arrangement::Grid {
                columns: 2,
                margin: 10,
            },
            ..Self::default()
        }
    }

    /// Create a manager holding this layout's container and controls,
    /// arranged with `arrangement`.
    pub fn arrange(&self, arrangement: Arrangement) -> Result<LayoutManager> {
        let mut manager = match self.capacity {
            Some(max) => LayoutManager::with_capacity_limit(max),
            None => LayoutManager::new(),
        };
        manager.set_container_rect(self.container);
        for control in &self.controls {
            manager.add_control(control.width, control.height)?;
        }
        manager.arrange(arrangement)?;
        Ok(manager)
    }
}

/// Animation file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Animation file version (currently 1)
    pub version: u32,
    pub start: Rect,
    pub end: Rect,
    /// Number of interpolation steps (at least 1)
    pub steps: u32,
    /// Emit only every Nth frame (the final frame is always emitted)
    pub every: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            version: 1,
            start: Rect::ZERO,
            end: Rect::ZERO,
            steps: 10,
            every: 1,
        }
    }
}
