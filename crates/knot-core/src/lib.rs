pub mod cloud;
pub mod constants;
pub mod distort;
pub mod gradient;
pub mod input;
pub mod scene;

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

pub use cloud::*;
pub use constants::*;
pub use distort::*;
pub use gradient::*;
pub use input::*;
pub use scene::*;
