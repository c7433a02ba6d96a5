//=========================================================================
// Window Signals
//=========================================================================
//
// The set of signals the platform layer triggers. Application code
// connects to them through `Engine::signals()` before calling `run()`.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::input::KeyCode;
use crate::signal::Signal;

//=== WindowSignals =======================================================

/// Window and input events published by the platform layer.
///
/// All signals are triggered on the thread running the event loop, in the
/// order the OS reports the underlying events.
#[derive(Debug, Default)]
pub struct WindowSignals {
    /// Window and graphics surface are ready. Carries `(width, height)`.
    pub created: Signal<(u32, u32)>,

    /// Inner size changed. Carries the new `(width, height)`.
    pub resized: Signal<(u32, u32)>,

    /// Key pressed (OS key-repeat is not reported).
    pub key_pressed: Signal<KeyCode>,

    /// Key released.
    pub key_released: Signal<KeyCode>,

    /// Cursor position in physical pixels, `(x, y)`.
    pub cursor_moved: Signal<(f32, f32)>,

    /// Start of a frame. Carries the frame index, starting at 0.
    pub frame: Signal<u64>,

    /// The user or the OS asked to close the window. The event loop exits
    /// after this signal's listeners ran.
    pub close_requested: Signal<()>,
}

impl WindowSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of listeners across all window signals.
    pub fn listener_count(&self) -> usize {
        self.created.len()
            + self.resized.len()
            + self.key_pressed.len()
            + self.key_released.len()
            + self.cursor_moved.len()
            + self.frame.len()
            + self.close_requested.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
