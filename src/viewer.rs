//! Standalone viewer window backed by winit.
//!
//! ```no_run
//! # use tankyard::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("Tankyard")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    engine::SceneEngine,
    error::TankyardError,
    options::Options,
    util::diag::{Diagnostics, TitleDiagnostics},
    InputEvent, MouseButton,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "Tankyard",
    /// default options).
    fn new() -> Self {
        Self {
            options: None,
            title: "Tankyard".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that displays the tank scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// is closed.
    ///
    /// # Errors
    ///
    /// Returns [`TankyardError::Viewer`] if the event loop cannot be
    /// created or fails while running.
    pub fn run(self) -> Result<(), TankyardError> {
        let event_loop = EventLoop::new()
            .map_err(|e| TankyardError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let diag = TitleDiagnostics::new(self.title.clone());
        let mut app = ViewerApp {
            window: None,
            engine: None,
            last_frame_time: Instant::now(),
            last_status_push: Instant::now(),
            options: self.options,
            title: self.title,
            diag,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| TankyardError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<SceneEngine>,
    last_frame_time: Instant,
    last_status_push: Instant,
    options: Option<Options>,
    title: String,
    diag: TitleDiagnostics,
}

impl ViewerApp {
    /// Move the OS cursor back to the viewport center so mouse-look
    /// offsets stay relative.
    fn recenter_cursor(&self, x: f32, y: f32) {
        let (Some(window), Some(engine)) = (&self.window, &self.engine)
        else {
            return;
        };
        let (cx, cy) = engine.cursor_center();
        if (x - cx).abs() < 0.5 && (y - cy).abs() < 0.5 {
            return;
        }
        if let Err(e) = window.set_cursor_position(
            winit::dpi::PhysicalPosition::new(cx, cy),
        ) {
            log::debug!("cursor recenter unavailable: {e}");
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (mon_size.width as f64 / scale * 0.75) as u32;
            let logical_h = (mon_size.height as f64 / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let size = (inner.width.max(1), inner.height.max(1));
        let options = self.options.take().unwrap_or_default();

        let engine = match pollster::block_on(SceneEngine::new(
            window.clone(),
            size,
            options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };

        // Center-relative mouse look works best without a visible
        // cursor, matching the original center-lock scheme.
        window.set_cursor_visible(false);

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        // Guard: both window and engine must be initialised.
        if self.window.is_none() || self.engine.is_none() {
            return;
        }

        match event {
            WindowEvent::Resized(event_size) => {
                if let Some(engine) = &mut self.engine {
                    engine.resize(
                        event_size.width.max(1),
                        event_size.height.max(1),
                    );
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let inner = self.window.as_ref().map(|w| w.inner_size());
                if let (Some(engine), Some(inner)) =
                    (&mut self.engine, inner)
                {
                    engine.resize(inner.width.max(1), inner.height.max(1));
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt =
                    now.duration_since(self.last_frame_time).as_secs_f32();
                self.last_frame_time = now;

                if let Some(engine) = &mut self.engine {
                    engine.update(dt);
                    match engine.render() {
                        Ok(()) => {}
                        Err(
                            wgpu::SurfaceError::Outdated
                            | wgpu::SurfaceError::Lost,
                        ) => {
                            if let Some(w) = &self.window {
                                let inner = w.inner_size();
                                engine.resize(
                                    inner.width.max(1),
                                    inner.height.max(1),
                                );
                            }
                        }
                        Err(e) => {
                            log::error!("render error: {e:?}");
                        }
                    }

                    // Push the status line to the window title at ~4 Hz.
                    if now.duration_since(self.last_status_push)
                        >= Duration::from_millis(250)
                    {
                        self.diag.print(&engine.status_line());
                        if let Some(w) = &self.window {
                            w.set_title(self.diag.current());
                        }
                        self.last_status_push = now;
                    }
                }
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::MouseButton {
                        button: MouseButton::from(button),
                        pressed,
                    });
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::CursorMoved { x, y });
                }
                self.recenter_cursor(x, y);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll_delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * 0.01
                    }
                };
                if let Some(engine) = &mut self.engine {
                    engine.handle_input(InputEvent::Scroll {
                        delta: scroll_delta,
                    });
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                use winit::keyboard::{KeyCode, PhysicalKey};
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if code == KeyCode::Escape {
                    event_loop.exit();
                    return;
                }
                if event.repeat {
                    return;
                }
                let pressed = event.state == ElementState::Pressed;
                let key_str = format!("{code:?}");
                if let Some(engine) = &mut self.engine {
                    engine.handle_key(&key_str, pressed);
                }
            }

            _ => (),
        }
    }
}
