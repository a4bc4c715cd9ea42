//! Main application handler for the game

use std::process;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::AppConfig;
use crate::input::KeyState;
use crate::renderer::Renderer;
use crate::simulation::LocalGame;
use crate::window::window_attributes_from_config;

/// Main game application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    game: LocalGame,
    keys: KeyState,
    last_update: Option<Instant>,
}

impl App {
    /// Creates a new game application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting game");
        info!(?config.window, "Window configuration");

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(12345);

        Self {
            config,
            window: None,
            renderer: None,
            game: LocalGame::new(seed),
            keys: KeyState::new(),
            last_update: None,
        }
    }

    /// Creates a new game application with configuration loaded from environment
    pub fn from_env() -> Self {
        let config = AppConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            AppConfig::default()
        });
        Self::new(config)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = window_attributes_from_config(&self.config.window);

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    let size = window.inner_size();
                    info!(
                        window.width = size.width,
                        window.height = size.height,
                        "Window created successfully"
                    );

                    let window = Arc::new(window);

                    // winit's event loop is synchronous; block on renderer setup
                    let renderer = tokio::runtime::Runtime::new()
                        .expect("Failed to create tokio runtime")
                        .block_on(Renderer::new(window.clone(), self.config.window.vsync));

                    match renderer {
                        Ok(renderer) => {
                            info!("Renderer initialized successfully");
                            self.renderer = Some(renderer);
                            self.window = Some(window);
                            self.last_update = Some(Instant::now());
                        }
                        Err(e) => {
                            // Missing sprite files land here; there is no recovery path
                            error!(error = %e, "Failed to initialize renderer");
                            process::exit(1);
                        }
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to create window");
                    event_loop.exit();
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(last_update) = self.last_update {
            let now = Instant::now();
            let dt = (now - last_update).as_secs_f32();
            self.last_update = Some(now);

            self.game.step(dt, self.keys.dir(0), self.keys.dir(1));

            let events = &self.game.events;
            if events.wall_bounce {
                debug!("Tumbleweed bounced off a wall");
            }
            if events.cowboy_hit {
                debug!("Tumbleweed hit a cowboy");
            }
            if events.left_won {
                info!("Left cowboy wins");
            }
            if events.right_won {
                info!("Right cowboy wins");
            }

            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let pressed = event.state.is_pressed();
                    if code == KeyCode::KeyT {
                        // Edge-triggered toggle; OS key repeat is ignored
                        if pressed && !event.repeat {
                            self.game.toggle_single_player();
                            info!(
                                single_player = self.game.mode.single_player,
                                "Toggled play mode"
                            );
                        }
                    } else {
                        self.keys.apply(code, pressed);
                    }
                }
            }
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size.width, new_size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    let state = self.game.render_state();
                    match renderer.draw(&state, &self.game.config) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            warn!("Surface lost, reconfiguring");
                            let size = window.inner_size();
                            renderer.resize(size.width, size.height);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("Out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => {
                            error!(error = %e, "Render error");
                        }
                    }
                }
            }
            _ => {}
        }
    }
}
