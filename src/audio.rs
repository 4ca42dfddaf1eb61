use crate::constants::{
    BGM_DUCKED_VOLUME, BGM_SRC, BGM_VOLUME, CLICK_SRC, CLICK_VOLUME, INSTRUMENT_SRC,
};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start playback; autoplay rejections arrive asynchronously and are logged.
fn play_element(el: &web::HtmlMediaElement, label: &'static str) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[audio] {} play rejected: {:?}", label, e);
            }
        }),
        Err(e) => log::warn!("[audio] {} play failed: {:?}", label, e),
    }
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx).map_err(|e| {
        log::error!("{} GainNode error: {:?}", label, e);
        anyhow::anyhow!("{} GainNode: {:?}", label, e)
    })?;
    g.gain().set_value(value);
    Ok(g)
}

/// Looping media element routed through its own gain node.
pub struct Track {
    element: web::HtmlAudioElement,
    gain: web::GainNode,
    label: &'static str,
}

impl Track {
    fn new(audio_ctx: &web::AudioContext, src: &str, label: &'static str) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow::anyhow!("{} audio element: {:?}", label, e))?;
        element.set_loop(true);
        element.set_cross_origin(Some("anonymous"));
        let source = audio_ctx
            .create_media_element_source(&element)
            .map_err(|e| anyhow::anyhow!("{} media source: {:?}", label, e))?;
        let gain = create_gain(audio_ctx, 0.0, label)?;
        let _ = source.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(&audio_ctx.destination());
        Ok(Self {
            element,
            gain,
            label,
        })
    }

    fn play(&self) {
        if self.element.paused() {
            play_element(&self.element, self.label);
        }
    }

    /// Linear ramp from the current gain to `target` over `secs`.
    fn ramp_to(&self, now: f64, target: f32, secs: f32) {
        let param = self.gain.gain();
        let current = param.value();
        let _ = param.cancel_scheduled_values(now);
        let _ = param.set_value_at_time(current, now);
        let _ = param.linear_ramp_to_value_at_time(target, now + secs.max(0.0) as f64);
    }
}

/// Click, background music and the hover instrument.
///
/// The instrument ducks the background track while it plays and is paused
/// once a fade-out has fully finished (see [`RoomAudio::poll`]).
pub struct RoomAudio {
    ctx: web::AudioContext,
    click: web::HtmlAudioElement,
    bgm: Track,
    instrument: Track,
    instrument_stop_at: Option<f64>,
    unlocked: bool,
}

impl RoomAudio {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let click = web::HtmlAudioElement::new_with_src(CLICK_SRC)
            .map_err(|e| anyhow::anyhow!("click audio element: {:?}", e))?;
        click.set_volume(CLICK_VOLUME as f64);
        let bgm = Track::new(&ctx, BGM_SRC, "bgm")?;
        let instrument = Track::new(&ctx, INSTRUMENT_SRC, "instrument")?;
        Ok(Self {
            ctx,
            click,
            bgm,
            instrument,
            instrument_stop_at: None,
            unlocked: false,
        })
    }

    /// Resume the context and start background music on the first gesture.
    pub fn unlock(&mut self) {
        if self.unlocked {
            return;
        }
        self.unlocked = true;
        let _ = self.ctx.resume();
        self.bgm.play();
        self.bgm.ramp_to(self.ctx.current_time(), BGM_VOLUME, 1.0);
        log::info!("[audio] unlocked");
    }

    pub fn play_click(&self) {
        self.click.set_current_time(0.0);
        play_element(&self.click, "click");
    }

    pub fn fade_in_instrument(&mut self, volume: f32, fade_secs: f32) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            let _ = self.ctx.resume();
        }
        let now = self.ctx.current_time();
        self.instrument_stop_at = None;
        self.instrument.play();
        self.instrument.ramp_to(now, volume, fade_secs);
        if self.unlocked {
            self.bgm.ramp_to(now, BGM_DUCKED_VOLUME, fade_secs);
        }
    }

    pub fn fade_out_instrument(&mut self, fade_secs: f32) {
        let now = self.ctx.current_time();
        self.instrument.ramp_to(now, 0.0, fade_secs);
        self.instrument_stop_at = Some(now + fade_secs as f64);
        if self.unlocked {
            self.bgm.ramp_to(now, BGM_VOLUME, fade_secs);
        }
    }

    /// Per-frame housekeeping: pause the instrument after its fade-out.
    pub fn poll(&mut self) {
        let Some(stop_at) = self.instrument_stop_at else {
            return;
        };
        if self.ctx.current_time() >= stop_at {
            let _ = self.instrument.element.pause();
            self.instrument_stop_at = None;
        }
    }
}
