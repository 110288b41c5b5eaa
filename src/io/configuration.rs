//! Algorithm constants and runtime configuration defaults

// Sampling and transparency
/// Upper bound on pixels handed to quantization
pub const MAX_SAMPLES: usize = 40_000;
/// Alpha cutoff separating stitched pixels from background
pub const OPACITY_THRESHOLD: u8 = 64;

// Grid bounds keep the O(cells x palette) assignment pass chart-sized
/// Smallest grid dimension produced by the aspect-ratio helper
pub const MIN_GRID_DIMENSION: usize = 5;
/// Largest grid width accepted from the command line
pub const MAX_GRID_DIMENSION: usize = 500;
/// Source pixels per stitch when no width is requested
pub const DEFAULT_WIDTH_DIVISOR: usize = 20;

// Palette size
/// Fewest thread colours accepted from the command line
pub const MIN_COLORS: usize = 2;
/// Most thread colours accepted from the command line
pub const MAX_COLORS: usize = 100;
/// Default number of thread colours
pub const DEFAULT_COLORS: usize = 8;
/// Fallback colour channel value when nothing opaque was sampled
pub const NEUTRAL_GRAY: u8 = 128;

// Chart rendering
/// Cell edge in pixels at zoom 1.0
pub const BASE_CELL_SIZE: f32 = 20.0;
/// Smallest rendered cell edge in pixels
pub const MIN_CELL_SIZE: u32 = 4;
/// Cells smaller than this are drawn without symbols
pub const SYMBOL_MIN_CELL_SIZE: u32 = 10;
/// Lowest zoom factor
pub const MIN_ZOOM: f32 = 0.2;
/// Highest zoom factor
pub const MAX_ZOOM: f32 = 5.0;
/// Cells between bold grid lines
pub const MAJOR_GRID_INTERVAL: usize = 10;

// Persistence
/// Session directory used when none is given
pub const DEFAULT_SESSION_DIR: &str = ".stitchgrid";
/// File holding the serialized pattern
pub const PATTERN_FILE: &str = "pattern.json";
/// File holding the serialized stitch progress
pub const PROGRESS_FILE: &str = "progress.json";

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
