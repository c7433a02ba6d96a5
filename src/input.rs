//=========================================================================
// Input Types
//
// Engine-side key identifiers carried by the window key signals.
// Keeps listener code independent of the windowing library.
//
//=========================================================================

//=== KeyCode Enum ========================================================
// Physical keyboard key in a simplified, cross-platform form.
//
// Only the keys the engine currently binds are listed; everything else
// arrives as `Unidentified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow keys -------------------------------------------------------
    ArrowDown, ArrowLeft, ArrowRight, ArrowUp,

    //--- Control keys -----------------------------------------------------
    Space, Enter, Escape,

    //--- Fallback ---------------------------------------------------------
    Unidentified,
}

impl KeyCode {
    /// Returns true for the arrow keys.
    pub fn is_arrow(self) -> bool {
        matches!(
            self,
            KeyCode::ArrowDown | KeyCode::ArrowLeft | KeyCode::ArrowRight | KeyCode::ArrowUp
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
