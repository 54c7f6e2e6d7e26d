//! Crimson Survivor entry point
//!
//! Handles platform-specific initialization and drives the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, KeyboardEvent};

    use crimson_survivor::frame::FrameClock;
    use crimson_survivor::input::InputState;
    use crimson_survivor::sim::{GamePhase, GameState, exp_for_next_level, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: InputState,
        clock: FrameClock,
        /// True while an animation frame is scheduled
        loop_running: bool,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                input: InputState::new(),
                clock: FrameClock::new(),
                loop_running: false,
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Crimson Survivor starting...");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        publish_frame(&game.borrow().state);
    }

    /// Schedule the next animation frame
    fn schedule_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One animation frame: check phase, tick, publish, reschedule
    ///
    /// The phase check runs before anything else, so a callback that was
    /// already pending when the game paused or ended mutates nothing and the
    /// chain simply stops.
    fn frame(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            if g.state.phase != GamePhase::Playing {
                g.loop_running = false;
                g.clock.reset();
                false
            } else {
                if let Some(dt) = g.clock.sample(time) {
                    let input = g.input.snapshot();
                    tick(&mut g.state, &input, dt);
                }
                publish_frame(&g.state);
                if g.state.phase != GamePhase::Playing {
                    // Game over landed in this tick
                    g.loop_running = false;
                    g.clock.reset();
                    false
                } else {
                    true
                }
            }
        };
        if keep_running {
            schedule_frame(game);
        }
    }

    /// Start the frame chain if the game is playing and it isn't running yet
    fn start_loop(game: &Rc<RefCell<Game>>) {
        let should_schedule = {
            let mut g = game.borrow_mut();
            if g.state.phase == GamePhase::Playing && !g.loop_running {
                g.loop_running = true;
                g.clock.reset();
                true
            } else {
                false
            }
        };
        if should_schedule {
            schedule_frame(game.clone());
        }
    }

    /// Publish the frame snapshot to the HUD and phase overlays
    ///
    /// The presentation layer is strictly read-only here; phase changes only
    /// flow back through the command handlers below.
    fn publish_frame(state: &GameState) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        set_text(&document, "#hud-score .hud-value", &state.score.to_string());
        set_text(
            &document,
            "#hud-time .hud-value",
            &format!("{}s", state.elapsed_secs.floor() as u64),
        );
        set_text(
            &document,
            "#hud-level .hud-value",
            &state.player.level.to_string(),
        );
        set_text(
            &document,
            "#hud-exp .hud-value",
            &format!(
                "{} / {} EXP",
                state.player.exp,
                exp_for_next_level(state.player.level)
            ),
        );

        set_bar_width(
            &document,
            "#health-bar .fill",
            state.player.health / state.player.max_health,
        );
        set_bar_width(
            &document,
            "#exp-bar .fill",
            (state.player.exp % 100) as f32 / 100.0,
        );

        show_overlay(&document, "menu-screen", state.phase == GamePhase::Menu);
        show_overlay(&document, "pause-screen", state.phase == GamePhase::Paused);
        show_overlay(
            &document,
            "game-over-screen",
            state.phase == GamePhase::GameOver,
        );

        if state.phase == GamePhase::GameOver {
            if let Some(el) = document.get_element_by_id("final-score") {
                el.set_text_content(Some(&state.score.to_string()));
            }
            if let Some(el) = document.get_element_by_id("final-stats") {
                el.set_text_content(Some(&format!(
                    "Level {} | Survived {}s",
                    state.player.level,
                    state.elapsed_secs.floor() as u64
                )));
            }
        }
    }

    fn set_text(document: &Document, selector: &str, text: &str) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            el.set_text_content(Some(text));
        }
    }

    fn set_bar_width(document: &Document, selector: &str, fraction: f32) {
        if let Some(el) = document.query_selector(selector).ok().flatten() {
            if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
                let pct = (fraction.clamp(0.0, 1.0) * 100.0) as u32;
                let _ = el.style().set_property("width", &format!("{pct}%"));
            }
        }
    }

    fn show_overlay(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if visible { "overlay" } else { "overlay hidden" });
        }
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down: movement flags, plus Escape toggling pause
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if key == "Escape" {
                    toggle_pause(&game);
                    return;
                }
                game.borrow_mut().input.key_down(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn toggle_pause(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            match g.state.phase {
                GamePhase::Playing => {
                    g.state.pause();
                    g.input.clear();
                    publish_frame(&g.state);
                }
                GamePhase::Paused => {
                    g.state.resume();
                }
                _ => return,
            }
        }
        start_loop(game);
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        // Start (menu screen)
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.start();
                start_loop(&game);
                log::info!("Game started");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pause (HUD button)
        if let Some(btn) = document.get_element_by_id("pause-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                g.state.pause();
                g.input.clear();
                publish_frame(&g.state);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Resume (pause screen)
        if let Some(btn) = document.get_element_by_id("resume-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().state.resume();
                start_loop(&game);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart (game-over screen): full re-initialization with a new seed
        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                {
                    let mut g = game.borrow_mut();
                    g.state.restart(seed);
                    g.input.clear();
                }
                start_loop(&game);
                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.phase == GamePhase::Playing {
                        g.state.pause();
                        g.input.clear();
                        publish_frame(&g.state);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Playing {
                    g.state.pause();
                    g.input.clear();
                    publish_frame(&g.state);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use crimson_survivor::sim::{GamePhase, GameState, TickInput, tick};

    env_logger::init();
    log::info!("Crimson Survivor (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke run: no input, fixed 60 Hz frames, until death or 2 minutes
    let mut state = GameState::new(0x5eed);
    state.start();
    let input = TickInput::default();
    let dt = 1.0 / 60.0;
    while state.phase == GamePhase::Playing && state.elapsed_secs < 120.0 {
        tick(&mut state, &input, dt);
    }

    log::info!(
        "Run ended: phase {:?}, survived {:.1}s, score {}, level {}, {} enemies on field",
        state.phase,
        state.elapsed_secs,
        state.score,
        state.player.level,
        state.enemies.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
