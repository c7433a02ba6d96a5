//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use faelight::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};
pub use crate::error::EngineError;

// Events
pub use crate::platform::WindowSignals;
pub use crate::signal::Signal;

// Input
pub use crate::input::KeyCode;

// Graphics
pub use crate::graphics::{GraphicsBackend, GraphicsError, HeadlessBackend, SurfaceHandle};

// Logging
pub use crate::logging::LogLevel;
