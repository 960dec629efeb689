//! Audio for the browser build
//!
//! Background music is a looping media element; the game-over sting is
//! generated with Web Audio oscillators, no extra asset needed.

use web_sys::{AudioContext, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

use crate::settings::Settings;

/// Default background track, relative to the page
pub const BGM_URL: &str = "./assets/audios/bgm/moyaji-kaju.mp3";

/// Audio manager for the game
pub struct AudioManager {
    bgm: Option<HtmlAudioElement>,
    ctx: Option<AudioContext>,
    music_volume: f32,
    sfx_volume: f32,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        let bgm = match HtmlAudioElement::new_with_src(BGM_URL) {
            Ok(el) => {
                el.set_loop(true);
                Some(el)
            }
            Err(e) => {
                log::warn!("Failed to create background music element: {:?}", e);
                None
            }
        };
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - effects disabled");
        }

        let mut audio = Self {
            bgm,
            ctx,
            music_volume: 0.0,
            sfx_volume: 0.0,
        };
        audio.apply_settings(settings);
        audio
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.music_volume = settings.effective_music_volume();
        self.sfx_volume = settings.effective_sfx_volume();
        if let Some(bgm) = &self.bgm {
            bgm.set_volume(self.music_volume as f64);
        }
    }

    /// Start the looping background track from the beginning
    pub fn play_bgm(&self) {
        let Some(bgm) = &self.bgm else { return };
        bgm.set_current_time(0.0);
        // Autoplay may be refused until the first user gesture
        if let Err(e) = bgm.play() {
            log::warn!("Background music blocked: {:?}", e);
        }
    }

    pub fn stop_bgm(&self) {
        if let Some(bgm) = &self.bgm {
            let _ = bgm.pause();
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Descending four-note sting
    pub fn play_game_over(&self) {
        let vol = self.sfx_volume;
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
            let delay = i as f64 * 0.2;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }
}
