// Shared scene/interaction tuning constants used by both web and native frontends.

// Torus-knot sampling
pub const KNOT_RADIUS: f32 = 0.5; // distance from knot axis to tube centerline
pub const TUBE_RADIUS: f32 = 0.2; // tube cross-section radius
pub const TUBULAR_SEGMENTS: usize = 100; // samples along the curve
pub const RADIAL_SEGMENTS: usize = 50; // samples around the tube
pub const KNOT_P: u32 = 2; // windings around the torus axis of rotation
pub const KNOT_Q: u32 = 3; // windings around the torus interior circle

// Color gradient endpoints (#FF00FF -> #D013F4)
pub const COLOR_START: u32 = 0xFF00FF;
pub const COLOR_END: u32 = 0xD013F4;

// Distortion wave
pub const WAVE_FREQUENCY: f32 = 5.0; // radians per unit of planar distance
pub const WAVE_AMPLITUDE: f32 = 0.4; // peak z displacement
pub const TIME_SCALE: f32 = 0.005; // milliseconds -> wave phase

// Ambient scatter cloud (kept at zero points)
pub const SCATTER_COUNT: usize = 0;
pub const SCATTER_EXTENT: f32 = 5.0; // per-axis spread of scatter positions

// Camera
pub const CAMERA_Z: f32 = 2.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Lighting (scene data only; the point material is unlit)
pub const LIGHT_POSITION: [f32; 3] = [300.0, 600.0, 100.0];
pub const LIGHT_INTENSITY: f32 = 0.1;

// Rendering
pub const MAX_PIXEL_RATIO: f64 = 5.0; // devicePixelRatio clamp for the canvas backing store
