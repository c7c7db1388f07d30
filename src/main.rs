//! Lane Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, TouchEvent};

    use lane_rush::consts::STEP_INTERVAL_MS;
    use lane_rush::render::CanvasSurface;
    use lane_rush::sim::{GameState, InputEvent, Viewport, step};
    use lane_rush::{ScoreHistory, render};

    /// Second Space press within this window opens the score history
    const DOUBLE_PRESS_MS: f64 = 300.0;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        rng: Pcg32,
        history: ScoreHistory,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
        last_step_ms: f64,
        last_space_ms: f64,
    }

    impl Game {
        fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
            let seed = js_sys::Date::now() as u64;
            log::info!("Starting with seed {seed}");
            Self {
                state: GameState::new(),
                rng: Pcg32::seed_from_u64(seed),
                history: ScoreHistory::load(),
                surface: CanvasSurface::new(ctx),
                canvas,
                last_step_ms: 0.0,
                last_space_ms: 0.0,
            }
        }

        fn viewport(&self) -> Viewport {
            Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
        }

        /// Forward an input event; `RequestHistory` is answered here, the
        /// rest are single-field state edits.
        fn handle(&mut self, event: InputEvent) {
            if event == InputEvent::RequestHistory {
                self.show_history();
                return;
            }
            self.state.apply(event);
        }

        fn show_history(&self) {
            if self.history.is_empty() {
                log::info!("No finished runs yet");
                return;
            }
            for entry in &self.history.entries {
                log::info!("score {} at {}", entry.score, entry.timestamp_ms);
            }
        }

        /// Capture the finished run into the history, then replace the
        /// state wholesale with a fresh, running one.
        fn restart(&mut self) {
            self.history.record(self.state.score, js_sys::Date::now());
            self.history.save();
            log::info!("Run ended with score {}", self.state.score);

            self.state = GameState::new();
            self.state.apply(InputEvent::TogglePause);
        }

        /// One animation frame: step at the fixed cadence, render always
        fn frame(&mut self, now_ms: f64) {
            if now_ms - self.last_step_ms > STEP_INTERVAL_MS {
                let viewport = self.viewport();
                self.state = step(&self.state, now_ms, viewport, &mut self.rng);
                self.last_step_ms = now_ms;
            }
            render(&mut self.surface, &self.state, self.viewport());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Lane Rush starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no #canvas element")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(Game::new(canvas, ctx)));
        setup_keyboard(game.clone(), &window)?;
        setup_touch(game.clone())?;
        start_frame_loop(game, window)
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>, window: &web_sys::Window) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "ArrowLeft" => g.handle(InputEvent::MoveLeft),
                "ArrowRight" => g.handle(InputEvent::MoveRight),
                " " => {
                    let now = js_sys::Date::now();
                    if g.state.is_game_over {
                        g.restart();
                    } else if now - g.last_space_ms < DOUBLE_PRESS_MS {
                        g.handle(InputEvent::RequestHistory);
                    } else {
                        g.handle(InputEvent::TogglePause);
                    }
                    g.last_space_ms = now;
                }
                _ => {}
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_touch(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let canvas = game.borrow().canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            let Some(touch) = event.touches().get(0) else {
                return;
            };
            let mut g = game.borrow_mut();
            if g.state.is_game_over {
                g.restart();
                return;
            }

            let rect = g.canvas.get_bounding_client_rect();
            let x = touch.client_x() as f64 - rect.left();
            // Left third steers left, right third steers right, middle pauses
            if x < rect.width() / 3.0 {
                g.handle(InputEvent::MoveLeft);
            } else if x > rect.width() * 2.0 / 3.0 {
                g.handle(InputEvent::MoveRight);
            } else {
                g.handle(InputEvent::TogglePause);
            }
        });
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn start_frame_loop(game: Rc<RefCell<Game>>, window: web_sys::Window) -> Result<(), JsValue> {
        let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let starter = callback.clone();
        let win = window.clone();

        *starter.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
            game.borrow_mut().frame(now_ms);
            if let Some(cb) = callback.borrow().as_ref() {
                let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }));

        if let Some(cb) = starter.borrow().as_ref() {
            window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(err) = wasm_game::run() {
        log::error!("Failed to start: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lane Rush (native) starting...");
    log::info!("Native mode has no renderer - run the web build for the playable game");

    demo_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted headless run: the simulation needs no platform to be exercised
#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use lane_rush::consts::STEP_INTERVAL_MS;
    use lane_rush::sim::{GameState, InputEvent, Viewport, step};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    let viewport = Viewport::new(390.0, 844.0);
    let mut rng = Pcg32::seed_from_u64(1);
    let mut state = GameState::new();
    state.apply(InputEvent::TogglePause);

    let mut now = 0.0;
    while !state.is_game_over && state.score < 100_000 {
        now += STEP_INTERVAL_MS;
        state = step(&state, now, viewport, &mut rng);
    }

    println!(
        "Scripted run ended: score {}, speed {:.2}x, {} obstacles live",
        state.score,
        state.speed,
        state.obstacles.len()
    );
}
