use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use rayon::prelude::*;

use super::{Arrangement, LayoutManager};
use crate::cli::ArrangementKind;
use crate::config::{LayoutConfig, LoadedConfig};
use crate::error::TrellisError;

/// Command-line values that replace the arrangement stored in layout files
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrangementOverrides {
    pub kind: Option<ArrangementKind>,
    pub columns: Option<usize>,
    pub margin: Option<i32>,
}

impl ArrangementOverrides {
    pub fn apply(&self, arrangement: Arrangement) -> Arrangement {
        arrangement.with_overrides(self.kind, self.columns, self.margin)
    }
}

/// A layout file after arrangement
#[derive(Debug, Clone)]
pub struct ArrangedLayout {
    pub name: String,
    pub path: PathBuf,
    pub config: LayoutConfig,
    pub arrangement: Arrangement,
    pub manager: LayoutManager,
}

/// Load and arrange every layout file.
///
/// Files are processed in parallel; results keep the input order.
pub fn arrange_files(
    paths: &[PathBuf],
    overrides: ArrangementOverrides,
) -> Result<Vec<ArrangedLayout>> {
    if paths.is_empty() {
        return Err(TrellisError::NoLayouts.into());
    }

    info!("Arranging {} layouts...", paths.len());

    paths
        .par_iter()
        .map(|path| arrange_single(path, overrides))
        .collect()
}

fn arrange_single(path: &Path, overrides: ArrangementOverrides) -> Result<ArrangedLayout> {
    let loaded = LoadedConfig::<LayoutConfig>::load(path)?;
    let name = loaded
        .config
        .name
        .clone()
        .unwrap_or_else(|| loaded.file_stem());
    let arrangement = overrides.apply(loaded.config.arrangement);

    let manager = loaded
        .config
        .arrange(arrangement)
        .with_context(|| format!("failed to arrange layout '{}'", name))?;

    debug!(
        "{}: {} controls, {:?}",
        name,
        manager.len(),
        arrangement
    );

    Ok(ArrangedLayout {
        name,
        path: loaded.path,
        config: loaded.config,
        arrangement,
        manager,
    })
}
