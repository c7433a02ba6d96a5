//=========================================================================
// Platform Subsystem
//
// Owns the OS window and the graphics backend, and turns Winit events
// into window signals.
//
// Architecture:
// ```text
//  Main Thread
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop (ControlFlow::Poll)        │
//  │   ├─ resumed          → create window        │
//  │   │                     backend.setup()      │
//  │   │                     signals.created      │
//  │   ├─ Resized          → backend.resize()     │
//  │   │                     signals.resized      │
//  │   ├─ KeyboardInput    → signals.key_*        │
//  │   ├─ CursorMoved      → signals.cursor_moved │
//  │   ├─ RedrawRequested  → signals.frame        │
//  │   │                     request_redraw()     │
//  │   └─ CloseRequested   → signals.close_*      │
//  │                         exit                 │
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: one `frame` trigger per redraw,
//   and the next redraw is requested immediately (continuous polling)
// - **Fatal setup errors are stored**: window or graphics failures exit
//   the loop and are returned from `run()`
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod window_signals;

pub use window_signals::WindowSignals;

//=== Standard Library Imports ============================================

use std::rc::Rc;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::error::EngineError;
use crate::graphics::GraphicsBackend;
use crate::input::KeyCode;
use event_mapper::map_physical_key;

//=== LoopControl =========================================================
//
// Outcome of handling a single window event.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

//=== WindowConfig ========================================================

/// Window parameters chosen through the engine builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== Platform ============================================================

/// Window owner and signal source.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(..)` - no OS resources yet
/// 2. **Execution**: `platform.run()` - blocks in the Winit event loop
/// 3. **Window creation**: lazily in `resumed()` (mobile compatibility)
/// 4. **Shutdown**: close requested or fatal error → loop exits → `run()`
///    returns
///
/// # Thread Safety
///
/// Not Send/Sync: the window signals hold single-threaded listeners.
pub(crate) struct Platform<B: GraphicsBackend> {
    config: WindowConfig,

    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    backend: B,
    signals: Rc<WindowSignals>,

    /// Index passed to the next `frame` trigger.
    frame_index: u64,

    /// First fatal error raised inside the event loop.
    failure: Option<EngineError>,
}

impl<B: GraphicsBackend> Platform<B> {
    //--- Construction -----------------------------------------------------

    pub fn new(config: WindowConfig, backend: B, signals: Rc<WindowSignals>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            config,
            window: None,
            backend,
            signals,
            frame_index: 0,
            failure: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or a fatal error occurs.
    ///
    /// # Errors
    ///
    /// - [`EngineError::EventLoopCreation`] if Winit cannot start
    /// - [`EngineError::WindowCreation`] / [`EngineError::Graphics`] if the
    ///   window or its surface could not be set up
    /// - [`EngineError::EventLoopExecution`] if the loop itself fails
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement),
    /// or if a signal listener panics.
    pub fn run(mut self) -> Result<(), EngineError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(EngineError::EventLoopCreation)?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self)
            .map_err(EngineError::EventLoopExecution)?;

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    //--- Event Handlers ---------------------------------------------------
    //
    // Each handler reacts to one kind of window event. They do not need an
    // active event loop, the Winit glue below decides what to do with the
    // returned `LoopControl`.
    //

    /// Runs graphics setup for a freshly created window.
    fn on_window_created(&mut self, window: Window) -> LoopControl {
        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        if let Err(err) = self.backend.setup(&window) {
            error!(target: "platform", "Graphics setup failed: {}", err);
            return self.fail(err.into());
        }

        window.request_redraw();
        self.window = Some(window);
        self.signals.created.trigger((size.width, size.height));

        LoopControl::Continue
    }

    fn on_resized(&mut self, width: u32, height: u32) {
        trace!(target: "platform", "Window resized: {}x{}", width, height);
        self.backend.resize(width, height);
        self.signals.resized.trigger((width, height));
    }

    fn on_key(&mut self, key: KeyCode, state: ElementState, repeat: bool) {
        if repeat {
            return;
        }

        match state {
            ElementState::Pressed => self.signals.key_pressed.trigger(key),
            ElementState::Released => self.signals.key_released.trigger(key),
        }
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.signals.cursor_moved.trigger((x, y));
    }

    /// Publishes the current frame and advances the frame counter.
    fn on_frame(&mut self) {
        let index = self.frame_index;
        self.frame_index += 1;
        self.signals.frame.trigger(index);
    }

    fn on_close_requested(&mut self) -> LoopControl {
        info!(target: "platform", "Window close requested");
        self.signals.close_requested.trigger(());
        LoopControl::Exit
    }

    /// Records a fatal error; only the first one is kept.
    fn fail(&mut self, err: EngineError) -> LoopControl {
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        LoopControl::Exit
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl<B: GraphicsBackend> ApplicationHandler for Platform<B> {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let control = match event_loop.create_window(attrs) {
            Ok(window) => self.on_window_created(window),
            Err(e) => {
                error!(target: "platform", "Failed to create window: {}", e);
                self.fail(e.into())
            }
        };

        if control == LoopControl::Exit {
            event_loop.exit();
        }
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let control = match event {
            WindowEvent::CloseRequested => self.on_close_requested(),

            WindowEvent::Resized(size) => {
                self.on_resized(size.width, size.height);
                LoopControl::Continue
            }

            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key, state, repeat, .. },
                ..
            } => {
                let key = map_physical_key(physical_key);
                if key == KeyCode::Unidentified {
                    trace!(target: "platform", "Unmapped key: {:?}", physical_key);
                }
                self.on_key(key, state, repeat);
                LoopControl::Continue
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x as f32, position.y as f32);
                LoopControl::Continue
            }

            WindowEvent::RedrawRequested => {
                self.on_frame();

                // Request next frame
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                LoopControl::Continue
            }

            _ => LoopControl::Continue,
        };

        if control == LoopControl::Exit {
            event_loop.exit();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
