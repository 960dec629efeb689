//! Browser bindings
//!
//! The page's renderer owns the canvas and calls into `WebSession` once per
//! animation frame. Input is forwarded from DOM events already converted
//! to playfield coordinates. The game-over panel, retry button and audio
//! are handled here.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::audio::AudioManager;
use crate::highscores::HighScores;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::{Direction, GameEvent};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier instance
        return;
    }
    log::info!("Ring Dodge starting...");
}

/// Everything one page needs, shared with DOM callbacks
struct WebGame {
    session: Session,
    audio: AudioManager,
    settings: Settings,
    high_scores: HighScores,
}

impl WebGame {
    /// React to simulation events
    fn handle_events(&mut self) {
        for event in self.session.drain_events() {
            match event {
                GameEvent::SessionStarted { .. } => {
                    set_panel_visible(false);
                    self.audio.play_bgm();
                }
                GameEvent::GameOver { score } => {
                    // Sting plays over silence, the retry restarts the track
                    self.audio.stop_bgm();
                    self.audio.play_game_over();
                    let secs = self.session.state().elapsed_secs();
                    if let Some(rank) = self.high_scores.add_score(score, secs, js_sys::Date::now()) {
                        log::info!("New high score #{}: {}", rank, score);
                        if let Err(e) = self.high_scores.save() {
                            log::warn!("Could not save high scores: {}", e);
                        }
                    }
                    show_final_score(score);
                }
                GameEvent::ProjectileSpawned { .. } | GameEvent::SpawnIntervalChanged { .. } => {}
            }
        }
    }

    fn restart(&mut self) {
        let seed = js_sys::Date::now() as u64;
        self.session.reset(seed);
        self.session.set_autopilot(self.settings.autopilot);
        self.handle_events();
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Toggle the panel's `hidden` class, leaving any page classes alone
fn set_panel_visible(visible: bool) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id("game-over")) {
        let _ = el.class_list().toggle_with_force("hidden", !visible);
    }
}

fn show_final_score(score: u64) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id("score-text")) {
        el.set_text_content(Some(&format!("Score: {}", score)));
    }
    set_panel_visible(true);
}

/// JS handle to a running game
#[wasm_bindgen]
pub struct WebSession {
    game: Rc<RefCell<WebGame>>,
}

#[wasm_bindgen]
impl WebSession {
    /// Create a session. `tuning_json` overrides the default balance.
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> Result<WebSession, JsValue> {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Tuning::default(),
        };
        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;

        let mut session = Session::new(tuning, seed);
        session.set_autopilot(settings.autopilot);
        let game = Rc::new(RefCell::new(WebGame {
            session,
            audio: AudioManager::new(&settings),
            settings,
            high_scores: HighScores::load(),
        }));
        game.borrow_mut().handle_events();

        Self::setup_retry_button(Rc::clone(&game));
        Ok(WebSession { game })
    }

    fn setup_retry_button(game: Rc<RefCell<WebGame>>) {
        let Some(btn) = document().and_then(|d| d.get_element_by_id("retry-button")) else {
            log::warn!("No #retry-button element, restart only via reset()");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            game.borrow_mut().restart();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Advance by one animation frame
    pub fn update(&self, delta_ms: f64) {
        let mut game = self.game.borrow_mut();
        game.session.update(delta_ms);
        game.handle_events();
    }

    /// Returns true if the key is a game control
    pub fn key_down(&self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.game.borrow_mut().session.key_down(dir);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(dir) => {
                self.game.borrow_mut().session.key_up(dir);
                true
            }
            None => false,
        }
    }

    pub fn pointer_down(&self, x: f32, y: f32) {
        let mut guard = self.game.borrow_mut();
        let game = &mut *guard;
        game.audio.resume();
        game.session.pointer_down(x, y);
    }

    pub fn pointer_move(&self, x: f32, y: f32) {
        self.game.borrow_mut().session.pointer_move(x, y);
    }

    pub fn pointer_up(&self) {
        self.game.borrow_mut().session.pointer_up();
    }

    /// Start over with a fresh session
    pub fn reset(&self) {
        self.game.borrow_mut().restart();
    }

    pub fn set_autopilot(&self, enabled: bool) {
        let mut guard = self.game.borrow_mut();
        let game = &mut *guard;
        game.settings.autopilot = enabled;
        game.session.set_autopilot(enabled);
        if let Err(e) = game.settings.save() {
            log::warn!("Could not save settings: {}", e);
        }
        log::info!("Autopilot: {}", enabled);
    }

    pub fn set_muted(&self, muted: bool) {
        let mut guard = self.game.borrow_mut();
        let game = &mut *guard;
        game.settings.muted = muted;
        game.audio.apply_settings(&game.settings);
        if let Err(e) = game.settings.save() {
            log::warn!("Could not save settings: {}", e);
        }
    }

    pub fn score(&self) -> f64 {
        self.game.borrow().session.score() as f64
    }

    pub fn is_game_over(&self) -> bool {
        self.game.borrow().session.is_game_over()
    }

    /// Best score on this device, 0 if none
    pub fn best_score(&self) -> f64 {
        self.game.borrow().high_scores.top_score().unwrap_or(0) as f64
    }

    /// Full game state as JSON for the renderer
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.game.borrow().session.state())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Radius of the decorative arena ring
    pub fn arena_visual_radius() -> f32 {
        crate::consts::ARENA_VISUAL_RADIUS
    }
}
