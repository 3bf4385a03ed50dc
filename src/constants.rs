/// Interaction and visual tuning constants.
///
/// These constants express intended behavior (counts, durations, offsets)
/// and keep magic numbers out of the wiring code.
// Falling-line particle field behind the hero section
pub const RAIN_PARTICLE_COUNT: usize = 50;
pub const RAIN_MIN_SPEED: f32 = 0.5; // units per frame
pub const RAIN_SPEED_SPAN: f32 = 2.0; // seeded speed = min + [0,1) * span
pub const RAIN_MARK_WIDTH: f64 = 2.0;
pub const RAIN_MARK_HEIGHT: f64 = 20.0;
pub const RAIN_FILL: &str = "rgba(255, 255, 255, 0.1)";

// Custom cursor: the dot lands immediately, the outline glides after it
pub const OUTLINE_GLIDE_SECS: f32 = 0.15;
pub const OUTLINE_HOVER_SCALE: f32 = 1.5;
pub const OUTLINE_REST_SCALE: f32 = 1.0;

// Floating work-item preview panel
pub const PREVIEW_FADE_SECS: f32 = 0.3;
pub const PREVIEW_GLIDE_SECS: f32 = 0.5;
pub const PREVIEW_HIDDEN_SCALE: f32 = 0.8;
pub const PREVIEW_POINTER_OFFSET: f32 = 20.0; // px past the viewport center
pub const PREVIEW_PLACEHOLDER: &str = "#141414";

// Smooth scrolling
pub const SCROLL_DURATION_SECS: f64 = 1.2;
