//! Routing tables and reaction tuning for the controller.
//!
//! `InteractionConfig::default()` reproduces the portfolio room; tests and
//! other scenes build their own.

use fnv::FnvHashMap;

use crate::constants::*;
use crate::scene::Emissive;

/// Modal panels the page can open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModalId {
    About,
    Projects,
    Erhu,
    Contact,
}

impl ModalId {
    pub fn as_str(self) -> &'static str {
        match self {
            ModalId::About => "about",
            ModalId::Projects => "projects",
            ModalId::Erhu => "erhu",
            ModalId::Contact => "contact",
        }
    }
}

/// Focused camera views that also switch the page into a special mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// Zoom onto the whiteboard and enable drawing.
    Whiteboard,
    /// Zoom onto the monitor and enable the embedded page.
    Monitor,
}

impl CameraMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CameraMode::Whiteboard => "whiteboard",
            CameraMode::Monitor => "monitor",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageOverlay {
    pub src: String,
    pub caption: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverScaleParams {
    pub up: f32,
    pub down: f32,
    pub duration: f32,
}

impl Default for HoverScaleParams {
    fn default() -> Self {
        Self {
            up: HOVER_SCALE_UP,
            down: HOVER_SCALE_DOWN,
            duration: HOVER_SCALE_DURATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HingeParams {
    pub open_angle: f32,
    pub duration: f32,
}

impl Default for HingeParams {
    fn default() -> Self {
        Self {
            open_angle: HINGE_OPEN_ANGLE,
            duration: HINGE_DURATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinParams {
    pub amount: f32,
    pub duration: f32,
    pub cooldown: f32,
    pub squash_duration: f32,
    pub pop_scale: f32,
    pub pop_duration: f32,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            amount: SPIN_AMOUNT,
            duration: SPIN_DURATION,
            cooldown: SPIN_COOLDOWN,
            squash_duration: SPIN_SQUASH_DURATION,
            pop_scale: SPIN_POP_SCALE,
            pop_duration: SPIN_POP_DURATION,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkTiming {
    pub open_delay: f32,
    pub focus_settle: f32,
}

impl Default for LinkTiming {
    fn default() -> Self {
        Self {
            open_delay: LINK_OPEN_DELAY,
            focus_settle: LINK_FOCUS_SETTLE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientParams {
    pub volume: f32,
    pub fade: f32,
    pub glow: Emissive,
    pub spawn_interval: f32,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Self {
            volume: AMBIENT_VOLUME,
            fade: AMBIENT_FADE,
            glow: Emissive::from_hex(AMBIENT_GLOW_HEX, AMBIENT_GLOW_INTENSITY),
            spawn_interval: NOTE_SPAWN_INTERVAL,
        }
    }
}

#[derive(Clone, Debug)]
pub struct InteractionConfig {
    /// Name substrings that open a modal, checked in order.
    pub modal_patterns: Vec<(String, ModalId)>,
    /// Exact object names that show an image overlay.
    pub image_overlays: FnvHashMap<String, ImageOverlay>,
    /// `(key, url)`; matched case-insensitively as a name substring, in order.
    pub social_links: Vec<(String, String)>,
    /// Name substrings that enter a focused camera mode, checked in order.
    pub camera_patterns: Vec<(String, CameraMode)>,
    /// Name substrings that swallow the click with only the click sound.
    pub click_only_patterns: Vec<String>,
    /// Hover group whose click toggles a hinged sub-object (mug lid).
    pub toggle_group: Option<String>,
    /// Hover group that opens the mailbox cover while hovered.
    pub mailbox_group: String,
    pub hover_scale: HoverScaleParams,
    pub hinge: HingeParams,
    pub spin: SpinParams,
    pub links: LinkTiming,
    pub ambient: AmbientParams,
}

impl InteractionConfig {
    /// A config with empty routing tables and default tuning.
    pub fn empty() -> Self {
        Self {
            modal_patterns: Vec::new(),
            image_overlays: FnvHashMap::default(),
            social_links: Vec::new(),
            camera_patterns: Vec::new(),
            click_only_patterns: Vec::new(),
            toggle_group: None,
            mailbox_group: MAILBOX_HOVER_GROUP.to_string(),
            hover_scale: HoverScaleParams::default(),
            hinge: HingeParams::default(),
            spin: SpinParams::default(),
            links: LinkTiming::default(),
            ambient: AmbientParams::default(),
        }
    }

    pub fn with_image_overlay(mut self, name: &str, src: &str, caption: &str) -> Self {
        self.image_overlays.insert(
            name.to_string(),
            ImageOverlay {
                src: src.to_string(),
                caption: caption.to_string(),
            },
        );
        self
    }

    pub fn with_social_link(mut self, key: &str, url: &str) -> Self {
        self.social_links.push((key.to_string(), url.to_string()));
        self
    }
}

const PORTFOLIO_IMAGES: &[(&str, &str, &str)] = &[
    ("ac-card-ten-raycast", "images/ac-2.webp", "my acnh villagers"),
    ("baby-casper-ten-raycast", "images/caspuh.webp", "casper as a puppy"),
    ("baby-cyrus-ten-raycast", "images/bb-cyrus.webp", "my pet bunny"),
    ("casp-cyrus-ten-raycast", "images/cc.webp", "my two best friends"),
    (
        "casper-lobster-ten-raycast",
        "images/lobster-casper.webp",
        "posture pal on my dog's head",
    ),
    (
        "casper-pawty-ten-raycast",
        "images/caspuh_party.webp",
        "my dog's 4th birthday 🎉",
    ),
    (
        "casper-sideeye-ten-raycast",
        "images/sussy-casper.webp",
        "Casper side eyeing me",
    ),
    (
        "casper-sleep-ten-raycast",
        "images/sleeper.webp",
        "i finally let my dog on the bed",
    ),
    ("caspuh-frame-ten-raycast", "images/caspuh2.webp", "he looks so goofy"),
    ("cyrus-frame-ten-raycast", "images/cyrus.webp", "hello there"),
    ("ded-casper-ten-raycast", "images/casper-buh.webp", "buh"),
    ("goofy-casper-ten-raycast", "images/lmao.webp", "he looks so goofy"),
];

impl Default for InteractionConfig {
    fn default() -> Self {
        let mut cfg = Self::empty();
        cfg.modal_patterns = vec![
            ("about-raycast".to_string(), ModalId::About),
            ("work-raycast".to_string(), ModalId::Projects),
            ("erhu-raycast".to_string(), ModalId::Erhu),
            ("TV-raycast".to_string(), ModalId::Projects),
        ];
        for (name, src, caption) in PORTFOLIO_IMAGES {
            cfg = cfg.with_image_overlay(name, src, caption);
        }
        cfg = cfg
            .with_social_link("Github", "https://github.com/curtislow777")
            .with_social_link("LinkedIn", "https://www.linkedin.com/in/curtis-low/");
        cfg.camera_patterns = vec![
            ("whiteboard-raycast".to_string(), CameraMode::Whiteboard),
            ("monitor".to_string(), CameraMode::Monitor),
        ];
        // the steam toggle lives with the mug; the click is only acknowledged
        cfg.click_only_patterns = vec!["perry-hat".to_string()];
        cfg.toggle_group = Some(MUG_HOVER_GROUP.to_string());
        cfg
    }
}
