use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::animation::{RectAnimator, Throttle};
use crate::error::TrellisError;
use crate::geometry::Rect;
use crate::layout::{ArrangedLayout, Arrangement};

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

impl Meta {
    fn current() -> Self {
        Self {
            app: "trellis",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Serialize)]
pub struct LayoutReport {
    meta: Meta,
    layouts: Vec<JsonLayout>,
}

#[derive(Serialize)]
struct JsonLayout {
    name: String,
    container: Rect,
    arrangement: Arrangement,
    bounds: Option<Rect>,
    controls: Vec<JsonControl>,
    overflowing: Vec<String>,
}

#[derive(Serialize)]
struct JsonControl {
    name: String,
    rect: Rect,
    width: i64,
    height: i64,
}

#[derive(Serialize)]
pub struct AnimationReport {
    meta: Meta,
    start: Rect,
    end: Rect,
    steps: u32,
    frames: Vec<JsonFrame>,
}

#[derive(Serialize)]
struct JsonFrame {
    step: u32,
    progress: f64,
    rect: Rect,
}

impl LayoutReport {
    pub fn new(layouts: &[ArrangedLayout]) -> Self {
        Self {
            meta: Meta::current(),
            layouts: layouts.iter().map(layout_to_json).collect(),
        }
    }

    /// Number of controls outside their container, across all layouts
    pub fn overflow_count(&self) -> usize {
        self.layouts.iter().map(|l| l.overflowing.len()).sum()
    }
}

impl AnimationReport {
    pub fn new(start: Rect, end: Rect, steps: u32) -> Self {
        Self {
            meta: Meta::current(),
            start,
            end,
            steps,
            frames: Vec::new(),
        }
    }

    /// Drive an armed animator to completion, recording the starting frame,
    /// every frame the throttle lets through, and always the final frame.
    pub fn record(animator: &mut RectAnimator, mut throttle: Throttle) -> Self {
        let mut report = Self::new(animator.start_rect(), animator.end_rect(), animator.steps());
        report.push_frame(animator.step(), animator.progress(), animator.current());

        while animator.is_animating() {
            let more = animator.update();
            if throttle.tick() || !more {
                report.push_frame(animator.step(), animator.progress(), animator.current());
            }
        }

        report
    }

    pub fn push_frame(&mut self, step: u32, progress: f64, rect: Rect) {
        self.frames.push(JsonFrame {
            step,
            progress,
            rect,
        });
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

fn layout_to_json(layout: &ArrangedLayout) -> JsonLayout {
    let names: Vec<String> = layout
        .config
        .controls
        .iter()
        .enumerate()
        .map(|(i, control)| control.display_name(i))
        .collect();

    let controls = layout
        .manager
        .controls()
        .iter()
        .zip(&names)
        .map(|(rect, name)| JsonControl {
            name: name.clone(),
            rect: *rect,
            width: rect.width(),
            height: rect.height(),
        })
        .collect();

    let overflowing = layout
        .manager
        .overflowing()
        .into_iter()
        .map(|i| names[i].clone())
        .collect();

    JsonLayout {
        name: layout.name.clone(),
        container: layout.manager.container(),
        arrangement: layout.arrangement,
        bounds: layout.manager.bounds(),
        controls,
        overflowing,
    }
}

/// Write a report as pretty JSON to `path`, or to stdout when no path is given
pub fn write_report<T: Serialize>(report: &T, path: Option<&Path>) -> Result<()> {
    let content = serde_json::to_string_pretty(report)?;

    match path {
        Some(path) => {
            fs::write(path, content).map_err(|e| TrellisError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", content)?;
        }
    }

    Ok(())
}
