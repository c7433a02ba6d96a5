//=========================================================================
// Engine Errors
//=========================================================================
//
// Failures that stop the engine from starting or keep it from running.
// All of them are fatal: `Engine::run()` returns them to the caller.
//
//=========================================================================

//=== External Crates =====================================================

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

//=== Internal Dependencies ===============================================

use crate::graphics::GraphicsError;

//=== EngineError =========================================================

/// Engine initialization and runtime errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Failed to create the event loop (OS-level issue).
    #[error("Event loop creation failed: {0}")]
    EventLoopCreation(#[source] EventLoopError),

    /// The event loop stopped with an error.
    #[error("Event loop error: {0}")]
    EventLoopExecution(#[source] EventLoopError),

    /// The OS refused to create the window.
    #[error("Failed to create window: {0}")]
    WindowCreation(#[from] OsError),

    /// Graphics context or surface setup failed.
    #[error(transparent)]
    Graphics(#[from] GraphicsError),
}

//=========================================================================
// Unit Tests
//=========================================================================
