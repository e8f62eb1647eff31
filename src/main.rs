//! Drag Merge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent as DomPointerEvent};

    use drag_merge::renderer::CanvasRenderer;
    use drag_merge::sim::PointerEvent;
    use drag_merge::{FrameClock, Game, GamePhase, HighScore, Settings};

    /// Game instance plus everything the browser loop needs
    struct App {
        game: Game,
        renderer: CanvasRenderer,
        clock: FrameClock,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            self.clock.tick(time);
            let dt = self.clock.delta();

            self.renderer.clear();
            self.game.frame(dt, &mut self.renderer);
            if self.game.phase() == GamePhase::Playing {
                self.renderer
                    .draw_hud(&self.game.session, self.game.sim.geometry.unit);
            }
        }

        fn pointer(&mut self, event: PointerEvent) {
            // Title and game-over screens: any press starts a round
            if self.game.phase() != GamePhase::Playing {
                if matches!(event, PointerEvent::Down { .. }) {
                    self.game.start_round();
                }
                return;
            }
            self.game.handle_pointer(event);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Drag Merge starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(
            Settings::load(),
            width as f32,
            height as f32,
            seed,
            HighScore::load(),
        );

        let app = Rc::new(RefCell::new(App {
            game,
            renderer: CanvasRenderer::new(ctx, width, height),
            clock: FrameClock::new(),
        }));

        setup_input_handlers(&canvas, app.clone());
        request_animation_frame(app);

        log::info!("Drag Merge running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: DomPointerEvent| {
                event.prevent_default();
                app.borrow_mut().pointer(PointerEvent::Down {
                    x: event.offset_x() as f32,
                    y: event.offset_y() as f32,
                });
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: DomPointerEvent| {
                app.borrow_mut().pointer(PointerEvent::Move {
                    x: event.offset_x() as f32,
                    y: event.offset_y() as f32,
                });
            });
            let _ = canvas
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        for name in ["pointerup", "pointercancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: DomPointerEvent| {
                app.borrow_mut().pointer(PointerEvent::Up);
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            app.borrow_mut().frame(time);
            request_animation_frame(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Drag Merge (native) starting...");
    log::info!("Native mode runs a headless demo round - build for wasm32 to play");

    headless_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted round: spawn from each target, drag the new piece into the
/// middle and let the simulation run until everything settles.
#[cfg(not(target_arch = "wasm32"))]
fn headless_round() {
    use drag_merge::renderer::RecordingRenderer;
    use drag_merge::sim::PointerEvent;
    use drag_merge::{FrameClock, Game, HighScore, Settings};

    let (width, height) = (1280.0, 720.0);
    let settings = Settings {
        seed: Some(2024),
        ..Settings::load()
    };
    let mut game = Game::new(settings, width, height, 0, HighScore::load());
    game.start_round();

    let mut clock = FrameClock::new();
    let mut renderer = RecordingRenderer::default();
    let mut time_ms = 0.0;
    let unit = game.sim.geometry.unit;
    let targets: Vec<_> = game.sim.targets.iter().map(|t| t.pos).collect();

    for (i, target) in targets.iter().enumerate() {
        game.handle_pointer(PointerEvent::Down { x: target.x, y: target.y });
        let drop_x = width / 2.0 + (i as f32 - 1.0) * unit;
        game.handle_pointer(PointerEvent::Move { x: drop_x, y: height / 2.0 });

        for _ in 0..90 {
            clock.tick(time_ms);
            time_ms += 1000.0 / 60.0;
            renderer.clear();
            game.frame(clock.delta(), &mut renderer);
        }
        game.handle_pointer(PointerEvent::Up);
        game.add_score(1, Some(glam::Vec2::new(drop_x, height / 2.0)));
    }

    let mut removed = 0;
    for _ in 0..600 {
        clock.tick(time_ms);
        time_ms += 1000.0 / 60.0;
        renderer.clear();
        removed += game.frame(clock.delta(), &mut renderer).removed;
    }

    log::info!(
        "Headless round done: {} frames, {} removed, {} draggables live, {} sprites drawn last frame, score {}",
        game.sim.frame,
        removed,
        game.sim.draggables.len(),
        renderer.sprites.len(),
        game.session.score
    );

    for _ in 0..game.session.lives {
        if game.lose_life() {
            break;
        }
    }
    log::info!("Best score: {}", game.session.high_score.best);
}
