//=========================================================================
// Graphics Backend
//=========================================================================
//
// Contract between the platform layer and whatever owns the graphics
// device. The platform calls `setup()` once the OS window exists and
// forwards resizes; the backend exposes the drawable surface it created.
//
// Only a headless backend ships with the engine. A GPU backend plugs in
// through `EngineBuilder::build_with`.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info};
use thiserror::Error;
use winit::window::Window;

//=== GraphicsError =======================================================

/// Graphics device or surface failures.
#[derive(Debug, Error)]
pub enum GraphicsError {
    /// The backend could not create a surface for the window.
    #[error("Failed to create surface: {0}")]
    SurfaceCreation(String),

    /// `setup()` was called on a backend that already owns a surface.
    #[error("Graphics backend is already set up")]
    AlreadyInitialized,
}

//=== SurfaceHandle =======================================================

/// Drawable area owned by a graphics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceHandle {
    pub width: u32,
    pub height: u32,
}

impl SurfaceHandle {
    /// Returns true if the surface has no drawable pixels (minimized window).
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

//=== GraphicsBackend =====================================================

/// Graphics context bound to one window.
pub trait GraphicsBackend {
    /// Creates the graphics context and surface for `window`.
    fn setup(&mut self, window: &Window) -> Result<(), GraphicsError>;

    /// The drawable surface, once `setup()` succeeded.
    fn surface(&self) -> Option<&SurfaceHandle>;

    /// Called when the window's inner size changes.
    fn resize(&mut self, width: u32, height: u32);
}

//=== HeadlessBackend =====================================================

/// Backend that tracks the surface size without touching a GPU.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    surface: Option<SurfaceHandle>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a surface of the given size.
    ///
    /// This is what `setup()` does with the window's inner size; it is
    /// exposed so the backend can be driven without an OS window.
    pub fn attach(&mut self, width: u32, height: u32) -> Result<(), GraphicsError> {
        if self.surface.is_some() {
            return Err(GraphicsError::AlreadyInitialized);
        }

        self.surface = Some(SurfaceHandle { width, height });
        info!(target: "graphics", "Headless surface created: {}x{}", width, height);
        Ok(())
    }
}

impl GraphicsBackend for HeadlessBackend {
    fn setup(&mut self, window: &Window) -> Result<(), GraphicsError> {
        let size = window.inner_size();
        self.attach(size.width, size.height)
    }

    fn surface(&self) -> Option<&SurfaceHandle> {
        self.surface.as_ref()
    }

    fn resize(&mut self, width: u32, height: u32) {
        let Some(surface) = self.surface.as_mut() else {
            debug!(target: "graphics", "Resize before setup ignored");
            return;
        };

        let requested = SurfaceHandle { width, height };
        if requested.is_degenerate() {
            // Minimized: keep the last drawable size.
            debug!(target: "graphics", "Degenerate resize {}x{} ignored", width, height);
            return;
        }

        *surface = requested;
        debug!(target: "graphics", "Surface resized to {}x{}", width, height);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_backend_starts_without_surface() {
        let backend = HeadlessBackend::new();
        assert!(backend.surface().is_none());
    }

    #[test]
    fn attach_creates_surface() {
        let mut backend = HeadlessBackend::new();
        backend.attach(1280, 720).expect("attach should succeed");

        assert_eq!(
            backend.surface(),
            Some(&SurfaceHandle { width: 1280, height: 720 })
        );
    }

    #[test]
    fn attach_twice_is_an_error() {
        let mut backend = HeadlessBackend::new();
        backend.attach(10, 10).unwrap();

        let err = backend.attach(20, 20).unwrap_err();
        assert!(matches!(err, GraphicsError::AlreadyInitialized));
        assert_eq!(backend.surface().unwrap().width, 10, "First surface is kept");
    }

    #[test]
    fn resize_updates_surface() {
        let mut backend = HeadlessBackend::new();
        backend.attach(800, 600).unwrap();
        backend.resize(1024, 768);

        assert_eq!(
            backend.surface(),
            Some(&SurfaceHandle { width: 1024, height: 768 })
        );
    }

    #[test]
    fn resize_before_setup_is_ignored() {
        let mut backend = HeadlessBackend::new();
        backend.resize(640, 480);
        assert!(backend.surface().is_none());
    }

    #[test]
    fn degenerate_resize_keeps_last_size() {
        let mut backend = HeadlessBackend::new();
        backend.attach(800, 600).unwrap();
        backend.resize(0, 0);
        backend.resize(1024, 0);

        assert_eq!(
            backend.surface(),
            Some(&SurfaceHandle { width: 800, height: 600 }),
            "Minimized window must not shrink the surface to zero"
        );
    }

    #[test]
    fn degenerate_surface_detection() {
        assert!(SurfaceHandle { width: 0, height: 720 }.is_degenerate());
        assert!(!SurfaceHandle { width: 1, height: 1 }.is_degenerate());
    }

    #[test]
    fn graphics_error_display_format() {
        let err = GraphicsError::SurfaceCreation("no adapter".to_string());
        assert_eq!(err.to_string(), "Failed to create surface: no adapter");
    }
}
