//! Standalone navigation window backed by winit.
//!
//! The window draws nothing: it feeds real keyboard and mouse events into a
//! [`NavEngine`] and reports the resulting camera frame in the title bar and
//! the log. Hosts with a renderer embed the engine in their own loop instead.
//!
//! ```no_run
//! # use navcam::Viewer;
//! Viewer::builder()
//!     .with_title("walkthrough")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::NavError, options::Options, InputEvent, MouseButton, NavEngine,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "navcam", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "navcam".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that drives a [`NavEngine`] from real input.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::Viewer`] if the event loop cannot be created or
    /// exits with an error.
    pub fn run(self) -> Result<(), NavError> {
        let event_loop =
            EventLoop::new().map_err(|e| NavError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: NavEngine::new(self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| NavError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: NavEngine,
    title: String,
}

impl ViewerApp {
    /// Show the current frame in the title bar.
    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            let cam = self.engine.camera();
            window.set_title(&format!(
                "{} | eye {} at {}",
                self.title, cam.eye, cam.at
            ));
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(960, 640));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        self.engine.resize(inner.width, inner.height);
        self.window = Some(window);
        self.refresh_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        let changed = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }

            WindowEvent::Resized(size) => {
                self.engine.resize(size.width, size.height);
                false
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.engine.handle_input(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                })
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.engine.handle_input(InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key_str = format!("{code:?}");
                self.engine.handle_key_press(&key_str)
            }

            _ => false,
        };

        if changed {
            self.refresh_title();
        }
    }
}
