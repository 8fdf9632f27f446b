//! Content domain: data-driven tuning loaded from assets/data.

mod loader;

#[cfg(test)]
mod tests;

use bevy::prelude::*;
use std::path::PathBuf;

pub use loader::{ContentLoadError, load_locomotion_tuning, parse_locomotion_tuning};

use crate::locomotion::LocomotionTuning;

pub const DEFAULT_DATA_DIR: &str = "assets/data";
pub const LOCOMOTION_FILE: &str = "locomotion.ron";

/// Loads every content file at startup. A file that fails to load or
/// validate stops the app.
pub struct ContentPlugin {
    pub data_dir: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

/// Where the content systems read from.
#[derive(Resource, Debug, Clone)]
pub struct ContentPaths {
    pub data_dir: PathBuf,
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ContentPaths {
            data_dir: self.data_dir.clone(),
        })
        .add_systems(PreStartup, load_content);
    }
}

fn load_content(
    mut commands: Commands,
    paths: Res<ContentPaths>,
    mut exit: MessageWriter<AppExit>,
) {
    let path = paths.data_dir.join(LOCOMOTION_FILE);

    match load_locomotion_tuning(&path) {
        Ok(tuning) => {
            info!(
                "Loaded locomotion tuning from {} (max jumps {})",
                path.display(),
                tuning.max_jump_count
            );
            commands.insert_resource::<LocomotionTuning>(tuning);
        }
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
        }
    }
}
