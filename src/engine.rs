//=========================================================================
// Faelight Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Event Loop]
//         │                          │
//         ├─ with_title()            ├─ init(|signals| ...)
//         ├─ with_size()             └─ runs platform,
//         └─ build_with(backend)        blocks until exit
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::rc::Rc;

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::error::EngineError;
use crate::graphics::{GraphicsBackend, HeadlessBackend};
use crate::platform::{Platform, WindowConfig, WindowSignals};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: `"Faelight"`
/// - **Size**: 1280x720 (logical pixels)
///
/// # Examples
///
/// ```no_run
/// use faelight::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_title("Sandbox")
///     .with_size(1920, 1080)
///     .build()
///     .run()
///     .expect("engine failed");
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Faelight".to_string(),
            width: 1280,
            height: 720,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner size of the window in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Window size must be positive, got {}x{}",
            width,
            height
        );
        self.width = width;
        self.height = height;
        self
    }

    /// Builds an engine that renders through `backend`.
    pub fn build_with<B: GraphicsBackend>(self, backend: B) -> Engine<B> {
        info!(
            target: "engine",
            "Building engine (window: \"{}\" {}x{})",
            self.title,
            self.width,
            self.height
        );

        Engine {
            config: WindowConfig {
                title: self.title,
                width: self.width,
                height: self.height,
            },
            backend,
            signals: Rc::new(WindowSignals::new()),
        }
    }

    /// Builds an engine with the [`HeadlessBackend`].
    pub fn build(self) -> Engine<HeadlessBackend> {
        self.build_with(HeadlessBackend::new())
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Faelight engine runtime.
///
/// Create via [`EngineBuilder`]. Connect listeners to the window signals
/// with [`Engine::init`] or [`Engine::signals`], then call [`Engine::run`].
///
/// # Examples
///
/// ```no_run
/// use faelight::EngineBuilder;
/// use faelight::input::KeyCode;
///
/// EngineBuilder::new()
///     .build()
///     .init(|signals| {
///         signals.frame.connect_once(|_| log::info!("First frame"));
///         signals.key_pressed.connect(|key| {
///             if key == KeyCode::Escape {
///                 log::info!("Escape pressed");
///             }
///         });
///     })
///     .run()
///     .expect("engine failed");
/// ```
pub struct Engine<B: GraphicsBackend> {
    config: WindowConfig,
    backend: B,
    signals: Rc<WindowSignals>,
}

impl<B: GraphicsBackend> Engine<B> {
    //--- Initialization ---------------------------------------------------

    /// Gives `init_fn` access to the window signals before the engine runs.
    pub fn init<F>(self, init_fn: F) -> Self
    where
        F: FnOnce(&WindowSignals),
    {
        info!(target: "engine", "Initializing engine signals");
        init_fn(&self.signals);
        info!(
            target: "engine",
            "Engine initialization complete ({} listeners)",
            self.signals.listener_count()
        );
        self
    }

    /// Shared handle to the window signals.
    ///
    /// Listeners that need to connect further listeners at runtime can
    /// capture this handle.
    pub fn signals(&self) -> Rc<WindowSignals> {
        Rc::clone(&self.signals)
    }

    //--- Execution --------------------------------------------------------

    /// Opens the window and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the event loop, the window or the
    /// graphics backend cannot be set up.
    pub fn run(self) -> Result<(), EngineError> {
        info!(target: "engine", "Starting engine runtime");

        let platform = Platform::new(self.config, self.backend, self.signals);
        let result = platform.run();

        match &result {
            Ok(()) => info!(target: "engine", "Engine shutdown complete"),
            Err(e) => error!(target: "engine", "Engine stopped: {}", e),
        }

        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.title, "Faelight");
        assert_eq!(builder.width, 1280);
        assert_eq!(builder.height, 720);
    }

    #[test]
    fn builder_with_title() {
        let builder = EngineBuilder::new().with_title("Sandbox");
        assert_eq!(builder.title, "Sandbox");
    }

    #[test]
    fn builder_with_size() {
        let builder = EngineBuilder::new().with_size(800, 600);
        assert_eq!((builder.width, builder.height), (800, 600));
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_size_panics_on_zero_width() {
        EngineBuilder::new().with_size(0, 600);
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_size_panics_on_zero_height() {
        EngineBuilder::new().with_size(800, 0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_title("Chained")
            .with_size(640, 480)
            .build();

        assert_eq!(
            engine.config,
            WindowConfig {
                title: "Chained".to_string(),
                width: 640,
                height: 480,
            }
        );
        assert!(engine.backend.surface().is_none(), "Backend is set up on run");
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn init_connects_listeners() {
        let engine = EngineBuilder::new().build().init(|signals| {
            signals.frame.connect(|_| {});
            signals.close_requested.connect_once(|()| {});
        });

        assert_eq!(engine.signals().listener_count(), 2);
    }

    #[test]
    fn signals_handle_is_shared() {
        let engine = EngineBuilder::new().build();
        let handle = engine.signals();
        handle.resized.connect(|_| {});

        assert_eq!(engine.signals().resized.len(), 1);
    }
}
