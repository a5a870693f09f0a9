// Shared transition and scene tuning constants used by the core and the native frontend.

// Interpolation
pub const LERP_RATE: f32 = 0.01; // fraction of the remaining distance covered per frame
pub const SNAP_TOLERANCE: f32 = 0.01; // below this distance a scalar jumps to its target

// Cloud defaults (match the startup target)
pub const DEFAULT_OPACITY: f32 = 0.8;
pub const DEFAULT_VOLUME: f32 = 6.0;
pub const DEFAULT_FADE: f32 = 10.0;
pub const DEFAULT_GROWTH: f32 = 4.0;
pub const DEFAULT_SPEED: f32 = 0.1;
pub const DEFAULT_GRAY: u8 = 0xff;

// Auxiliary scene defaults, never interpolated
pub const DEFAULT_SEED: f32 = 1.0;
pub const DEFAULT_SEGMENTS: f32 = 25.0;
pub const DEFAULT_BOUNDS: [f32; 3] = [5.0, 1.0, 5.0];
pub const DEFAULT_TEMPERATURE: f32 = 0.0;
pub const DEFAULT_SKY_INCLINATION: f32 = 0.6;
pub const DEFAULT_SKY_AZIMUTH: f32 = 0.78;

// Readout unit suffixes
pub const CELSIUS_SUFFIX: &str = "C˚";
pub const FAHRENHEIT_SUFFIX: &str = "F˚";
