mod loader;
mod manager;

use serde::{Deserialize, Serialize};

use crate::cli::ArrangementKind;

pub use loader::{ArrangedLayout, ArrangementOverrides, arrange_files};
pub use manager::LayoutManager;

/// How a [`LayoutManager`] positions its controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum Arrangement {
    /// Equal cells, `columns` per row, each control centered in its cell
    Grid { columns: usize, margin: i32 },
    /// Top to bottom, centered horizontally
    Vertical { margin: i32 },
    /// Left to right, centered vertically
    Horizontal { margin: i32 },
}

impl Default for Arrangement {
    fn default() -> Self {
        Arrangement::Vertical { margin: 0 }
    }
}

impl Arrangement {
    pub fn kind(&self) -> ArrangementKind {
        match self {
            Arrangement::Grid { .. } => ArrangementKind::Grid,
            Arrangement::Vertical { .. } => ArrangementKind::Vertical,
            Arrangement::Horizontal { .. } => ArrangementKind::Horizontal,
        }
    }

    pub fn margin(&self) -> i32 {
        match *self {
            Arrangement::Grid { margin, .. }
            | Arrangement::Vertical { margin }
            | Arrangement::Horizontal { margin } => margin,
        }
    }

    /// Rebuild the arrangement with any of its parameters replaced.
    ///
    /// Switching to a grid without a column count keeps the current one, or
    /// falls back to a single column.
    #[must_use]
    pub fn with_overrides(
        self,
        kind: Option<ArrangementKind>,
        columns: Option<usize>,
        margin: Option<i32>,
    ) -> Self {
        let margin = margin.unwrap_or_else(|| self.margin());
        let current_columns = match self {
            Arrangement::Grid { columns, .. } => columns,
            _ => 1,
        };

        match kind.unwrap_or_else(|| self.kind()) {
            ArrangementKind::Grid => Arrangement::Grid {
                columns: columns.unwrap_or(current_columns),
                margin,
            },
            ArrangementKind::Vertical => Arrangement::Vertical { margin },
            ArrangementKind::Horizontal => Arrangement::Horizontal { margin },
        }
    }
}
