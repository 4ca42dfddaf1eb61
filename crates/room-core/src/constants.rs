use std::f32::consts::{FRAC_PI_2, TAU};

// Interaction timing and tuning shared by the core and the web front-end.
// All durations are seconds.

// Hover groups authored by the scene processor
pub const MUG_HOVER_GROUP: &str = "mugSet";
pub const MAILBOX_HOVER_GROUP: &str = "mailboxSet";

// Scale pulse
pub const HOVER_SCALE_UP: f32 = 1.1;
pub const HOVER_SCALE_DOWN: f32 = 1.0;
pub const HOVER_SCALE_DURATION: f32 = 0.3;

// Hinged covers (mailbox)
pub const HINGE_OPEN_ANGLE: f32 = FRAC_PI_2; // quarter turn
pub const HINGE_DURATION: f32 = 0.8;

// Spin-with-sparkle
pub const SPIN_AMOUNT: f32 = TAU; // one full turn
pub const SPIN_DURATION: f32 = 2.0;
pub const SPIN_COOLDOWN: f32 = 2.0;
pub const SPIN_SQUASH_DURATION: f32 = 0.2;
pub const SPIN_POP_SCALE: f32 = 1.1;
pub const SPIN_POP_DURATION: f32 = 0.2;

// External links: open after a short delay, re-enable after focus returns
pub const LINK_OPEN_DELAY: f32 = 0.05;
pub const LINK_FOCUS_SETTLE: f32 = 0.5;

// Ambient instrument feedback (erhu)
pub const AMBIENT_VOLUME: f32 = 0.3;
pub const AMBIENT_FADE: f32 = 0.3;
pub const AMBIENT_GLOW_HEX: u32 = 0x442200;
pub const AMBIENT_GLOW_INTENSITY: f32 = 0.5;

// Music-note sprites emitted while the instrument is hovered
pub const NOTE_SPAWN_INTERVAL: f32 = 0.15;
pub const NOTE_LIFETIME_MIN: f32 = 2.0;
pub const NOTE_LIFETIME_SPAN: f32 = 1.0;
pub const NOTE_SPIN_RATE: f32 = 2.0; // radians per second
pub const NOTE_GLYPHS: [char; 3] = ['♪', '♫', '♬'];

// Sparkle bursts around spun objects
pub const SPARKLE_BURST_DURATION: f32 = 3.0;
pub const SPARKLE_GRAVITY: f32 = 0.1;
pub const SPARKLE_FADE_IN: f32 = 0.3; // fraction of particle life
pub const SPARKLE_FADE_OUT_START: f32 = 0.7;
