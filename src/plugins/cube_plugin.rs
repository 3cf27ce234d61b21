use std::path::Path;

use bevy::prelude::*;

use crate::utils::config::CubeConfig;
use crate::utils::constants::game_constants::{BACKGROUND_COLOR, CONFIG_FILE_NAME};
use crate::utils::systems_logic::SystemsLogicPlugin;

/// Plugins
pub struct CubePlugin;

impl Plugin for CubePlugin {
    fn build(&self, app: &mut App) {
        // A config inserted by the app takes precedence over the file.
        if !app.world().contains_resource::<CubeConfig>() {
            app.insert_resource(CubeConfig::load_or_default(Path::new(CONFIG_FILE_NAME)));
        }
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_plugins(SystemsLogicPlugin);
    }
}
