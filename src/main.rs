//! Flappy Bird entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_bird::audio::{AudioManager, SoundEffect};
    use flappy_bird::consts::SIM_DT;
    use flappy_bird::platform::{
        Action, FpsCounter, LocalStorageStore, PointerKind, action_for_key, action_for_pointer,
    };
    use flappy_bird::renderer::{RenderState, build_scene};
    use flappy_bird::{Session, Settings, Tuning};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorageStore>,
        settings: Settings,
        settings_store: LocalStorageStore,
        audio: AudioManager,
        render_state: Option<RenderState>,
        last_time: f64,
        fps: FpsCounter,
    }

    impl Game {
        fn new(session: Session<LocalStorageStore>) -> Self {
            let settings_store = LocalStorageStore::new();
            let settings = Settings::load(&settings_store);
            let mut audio = AudioManager::new();
            audio.set_volume(settings.effective_volume());
            Self {
                session,
                settings,
                settings_store,
                audio,
                render_state: None,
                last_time: 0.0,
                fps: FpsCounter::default(),
            }
        }

        fn handle_action(&mut self, action: Action) {
            match action {
                Action::Activate => {
                    self.audio.resume();
                    self.session.activate();
                }
                Action::ToggleMute => {
                    self.settings.toggle_mute();
                    self.audio.set_volume(self.settings.effective_volume());
                    if let Err(e) = self.settings.save(&mut self.settings_store) {
                        log::warn!("Failed to save settings: {}", e);
                    }
                }
                Action::ToggleDemo => {
                    let demo = !self.session.demo();
                    self.session.set_demo(demo);
                }
            }
        }

        /// Run simulation ticks and react to what happened
        fn update(&mut self, dt: f32, time: f64) {
            for event in self.session.update(dt) {
                if let Some(effect) = SoundEffect::for_event(&event) {
                    self.audio.play(effect);
                }
            }
            self.fps.record(time);
        }

        fn render(&mut self) {
            let Some(ref mut render_state) = self.render_state else {
                return;
            };
            let vertices = build_scene(&self.session.frame_view(), &self.settings);
            match render_state.render(&vertices) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = self.session.hud();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score_text()));
            }

            if let Some(el) = document.get_element_by_id("instructions") {
                let _ = el
                    .class_list()
                    .toggle_with_force("hidden", !hud.show_instructions());
            }

            if let Some(el) = document.get_element_by_id("gameOver") {
                let _ = el
                    .class_list()
                    .toggle_with_force("hidden", !hud.show_game_over());
            }

            if hud.show_game_over() {
                if let Some(el) = document.get_element_by_id("finalScore") {
                    el.set_inner_html(&hud.final_score_html());
                }
            }

            if let Some(el) = document.get_element_by_id("fps") {
                let _ = el
                    .class_list()
                    .toggle_with_force("hidden", !self.settings.show_fps);
                if self.settings.show_fps {
                    el.set_text_content(Some(&format!("{} FPS", self.fps.fps())));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Bird starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::default();
        let seed = js_sys::Date::now() as u64;
        let session =
            Session::new(tuning, seed, LocalStorageStore::new()).expect("default tuning is valid");
        let game = Rc::new(RefCell::new(Game::new(session)));

        // Backing store at device resolution, playfield stretched over it
        let dpr = window.device_pixel_ratio();
        let client_w = match canvas.client_width() {
            0 => tuning.playfield_width as i32,
            w => w,
        };
        let client_h = match canvas.client_height() {
            0 => tuning.playfield_height as i32,
            h => h,
        };
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (tuning.playfield_width, tuning.playfield_height),
        )
        .await
        .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        request_animation_frame(game);

        log::info!("Flappy Bird running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for_key(&event.code()) {
                    if action.prevents_default() {
                        event.prevent_default();
                    }
                    game.borrow_mut().handle_action(action);
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Mouse
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if let Some(action) = action_for_pointer(PointerKind::Mouse, event.button()) {
                    game.borrow_mut().handle_action(action);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(action) = action_for_pointer(PointerKind::Touch, 0) {
                    game.borrow_mut().handle_action(action);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless run: the autopilot plays a seeded game and the final frame is
/// printed as JSON.
///
/// Usage: `flappy-bird [seed] [ticks]`
#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use flappy_bird::consts::SIM_DT;
    use flappy_bird::platform::MemoryStore;
    use flappy_bird::sim::GameEvent;
    use flappy_bird::{Session, Tuning};

    env_logger::init();
    log::info!("Flappy Bird (native) starting...");
    log::info!("Native mode runs headless - use `trunk serve` for the web version");

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse()?,
        None => 42,
    };
    let ticks: u32 = match args.next() {
        Some(s) => s.parse()?,
        None => 60 * 60,
    };

    let mut session = Session::new(Tuning::default(), seed, MemoryStore::new())?;
    session.set_demo(true);

    for _ in 0..ticks {
        for event in session.update(SIM_DT) {
            match event {
                GameEvent::Scored { score, .. } => log::debug!("Score {}", score),
                GameEvent::GameOver {
                    score, high_score, ..
                } => log::info!("Round over at {} (best {})", score, high_score),
                GameEvent::RoundStarted | GameEvent::Flap => {}
            }
        }
    }

    let hud = session.hud();
    log::info!(
        "Finished {} ticks of seed {}: phase {:?}, score {}, best {}",
        ticks,
        session.state().seed,
        hud.phase,
        hud.score,
        hud.high_score
    );
    println!("{}", serde_json::to_string_pretty(&session.frame_view())?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
