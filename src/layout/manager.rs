use log::{debug, warn};

use super::Arrangement;
use crate::error::{Result, TrellisError};
use crate::geometry::{Rect, bounding_box};

/// Arranges fixed-size control rectangles inside a container.
///
/// Controls keep the size they were added with; arranging only rewrites
/// their positions. Running the same arrangement twice with the same
/// container and controls gives the same result.
#[derive(Debug, Clone, Default)]
pub struct LayoutManager {
    container: Rect,
    controls: Vec<Rect>,
    capacity: Option<usize>,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager that refuses controls beyond `max`
    pub fn with_capacity_limit(max: usize) -> Self {
        Self {
            capacity: Some(max),
            ..Self::default()
        }
    }

    pub fn set_container(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.set_container_rect(Rect::new(left, top, right, bottom));
    }

    /// Replace the container. Already placed controls stay where they are
    /// until the next arrangement call.
    pub fn set_container_rect(&mut self, container: Rect) {
        self.container = container;
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Append a control of the given size at the origin and return its index
    pub fn add_control(&mut self, width: i32, height: i32) -> Result<usize> {
        if let Some(capacity) = self.capacity
            && self.controls.len() >= capacity
        {
            return Err(TrellisError::CapacityExceeded { capacity });
        }

        let rect = Rect::from_size(0, 0, width, height).validate()?;
        self.controls.push(rect);
        Ok(self.controls.len() - 1)
    }

    pub fn control_rect(&self, index: usize) -> Result<Rect> {
        self.controls
            .get(index)
            .copied()
            .ok_or(TrellisError::IndexOutOfRange {
                index,
                len: self.controls.len(),
            })
    }

    pub fn controls(&self) -> &[Rect] {
        &self.controls
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn clear(&mut self) {
        self.controls.clear();
    }

    /// Bounding box of every control, or `None` when there are no controls
    pub fn bounds(&self) -> Option<Rect> {
        bounding_box(&self.controls)
    }

    /// Indices of controls that stick out of the container
    pub fn overflowing(&self) -> Vec<usize> {
        self.controls
            .iter()
            .enumerate()
            .filter(|(_, rect)| !self.container.contains(rect))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn arrange(&mut self, arrangement: Arrangement) -> Result<()> {
        match arrangement {
            Arrangement::Grid { columns, margin } => self.arrange_grid(columns, margin),
            Arrangement::Vertical { margin } => self.arrange_vertical(margin),
            Arrangement::Horizontal { margin } => self.arrange_horizontal(margin),
        }
    }

    /// Place controls in a grid of equal cells, each centered in its cell.
    ///
    /// Does nothing when `columns` is zero or there are no controls. Column
    /// counts beyond `i32::MAX` are rejected.
    pub fn arrange_grid(&mut self, columns: usize, margin: i32) -> Result<()> {
        if columns == 0 || self.controls.is_empty() {
            return Ok(());
        }
        let container = self.container.validate()?;

        let too_large = |reason| TrellisError::InvalidGeometry {
            rect: container,
            reason,
        };
        let column_count =
            i64::from(i32::try_from(columns).map_err(|_e| too_large("too many grid columns"))?);
        let rows = i64::try_from(self.controls.len().div_ceil(columns))
            .map_err(|_e| too_large("too many grid rows"))?;

        let margin = i64::from(margin);
        let cell_width = (container.width() - 2 * margin) / column_count;
        let cell_height = (container.height() - 2 * margin) / rows;

        debug!(
            "Grid {}x{} in {}: cell {}x{}",
            column_count, rows, container, cell_width, cell_height
        );

        let origin_x = i64::from(container.left) + margin;
        let origin_y = i64::from(container.top) + margin;
        let mut placed = Vec::with_capacity(self.controls.len());
        let (mut col, mut row) = (0i64, 0i64);
        for control in &self.controls {
            let x = origin_x + col * cell_width + (cell_width - control.width()) / 2;
            let y = origin_y + row * cell_height + (cell_height - control.height()) / 2;
            placed.push(control.try_moved_to(x, y)?);

            col += 1;
            if col == column_count {
                col = 0;
                row += 1;
            }
        }

        self.controls = placed;
        self.report_overflow("grid");
        Ok(())
    }

    /// Stack controls top to bottom, each centered horizontally
    pub fn arrange_vertical(&mut self, margin: i32) -> Result<()> {
        if self.controls.is_empty() {
            return Ok(());
        }
        let container = self.container.validate()?;

        let margin = i64::from(margin);
        let interior_width = container.width() - 2 * margin;
        let x_origin = i64::from(container.left) + margin;
        let mut y = i64::from(container.top) + margin;

        let mut placed = Vec::with_capacity(self.controls.len());
        for control in &self.controls {
            let x = x_origin + (interior_width - control.width()) / 2;
            let rect = control.try_moved_to(x, y)?;
            y = i64::from(rect.bottom) + margin;
            placed.push(rect);
        }

        self.controls = placed;
        self.report_overflow("vertical");
        Ok(())
    }

    /// Stack controls left to right, each centered vertically
    pub fn arrange_horizontal(&mut self, margin: i32) -> Result<()> {
        if self.controls.is_empty() {
            return Ok(());
        }
        let container = self.container.validate()?;

        let margin = i64::from(margin);
        let interior_height = container.height() - 2 * margin;
        let y_origin = i64::from(container.top) + margin;
        let mut x = i64::from(container.left) + margin;

        let mut placed = Vec::with_capacity(self.controls.len());
        for control in &self.controls {
            let y = y_origin + (interior_height - control.height()) / 2;
            let rect = control.try_moved_to(x, y)?;
            x = i64::from(rect.right) + margin;
            placed.push(rect);
        }

        self.controls = placed;
        self.report_overflow("horizontal");
        Ok(())
    }

    fn report_overflow(&self, strategy: &str) {
        let overflowing = self.overflowing();
        if !overflowing.is_empty() {
            warn!(
                "{} arrangement: {} of {} controls do not fit in {}",
                strategy,
                overflowing.len(),
                self.controls.len(),
                self.container
            );
        }
    }
}
