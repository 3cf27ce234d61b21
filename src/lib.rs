pub mod utils {
    pub mod camera;
    pub mod config;
    pub mod constants;
    pub mod cube;
    pub mod debug_functions;
    pub mod game_functions;
    pub mod geometry;
    pub mod inputs;
    pub mod macros;
    pub mod objects;
    pub mod permute;
    pub mod rotation;
    pub mod scramble;
    pub mod setup;
    pub mod slice;
    pub mod systems_logic;
}

pub mod plugins {
    pub mod cube_plugin;
}
