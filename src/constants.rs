// Front-end wiring constants: DOM hooks, audio assets and mix levels

// Canvas
pub const CANVAS_ID: &str = "experience-canvas";

// Modal system
pub const MODAL_OVERLAY_SELECTOR: &str = ".overlay";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal-close-btn";
pub const MODAL_ABOUT_SELECTOR: &str = ".about-modal";
pub const MODAL_PROJECTS_SELECTOR: &str = ".projects-modal";
pub const MODAL_ERHU_SELECTOR: &str = ".erhu-modal";
pub const MODAL_CONTACT_SELECTOR: &str = ".contact-modal";

// Fade image overlay
pub const IMAGE_OVERLAY_SELECTOR: &str = ".fade-overlay";
pub const IMAGE_OVERLAY_IMG_SELECTOR: &str = ".fade-overlay-img";
pub const IMAGE_OVERLAY_TEXT_SELECTOR: &str = ".fade-overlay-text";
pub const IMAGE_OVERLAY_CLOSE_SELECTOR: &str = ".fade-overlay-close-btn";

// Events dispatched on window for the JS scene host
pub const CAMERA_MODE_EVENT: &str = "room:camera-mode";
pub const TOGGLE_GROUP_EVENT: &str = "room:toggle-group";
pub const HIGHLIGHT_EVENT: &str = "room:highlight";

// Audio assets
pub const CLICK_SRC: &str = "audio/ui-click.wav";
pub const BGM_SRC: &str = "audio/imok.ogg";
pub const INSTRUMENT_SRC: &str = "audio/erhu-sample.mp3";

// Mix levels (linear gain)
pub const CLICK_VOLUME: f32 = 0.1;
pub const BGM_VOLUME: f32 = 0.5;
pub const BGM_DUCKED_VOLUME: f32 = 0.1; // while the instrument plays

// Cursor
pub const CURSOR_POINTER: &str = "pointer";
pub const CURSOR_DEFAULT: &str = "default";
