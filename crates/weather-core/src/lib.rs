pub mod color;
pub mod constants;
pub mod engine;
pub mod error;
pub mod presets;
pub mod readout;
pub mod scene;
pub mod state;
pub mod tuning;
pub mod uniforms;

pub static CLOUD_WGSL: &str = include_str!("../shaders/cloud.wgsl");

pub use color::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use presets::*;
pub use readout::*;
pub use scene::*;
pub use state::*;
pub use tuning::*;
pub use uniforms::*;
