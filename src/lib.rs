//=========================================================================
// Faelight — Library Root
//
// This crate defines the public API surface of the Faelight engine.
//
// Responsibilities:
// - Expose the typed multicast `Signal` used for all engine events
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Keep the Winit integration (`platform`) hidden from end users
//
// Typical usage:
// ```no_run
// use faelight::{logging, EngineBuilder};
//
// fn main() {
//     logging::init(logging::LogLevel::Debug);
//     EngineBuilder::new().build().run().unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `signal` is the dispatch primitive and has no dependency on the rest of
// the engine. The other public modules describe the collaborators the
// engine plugs together: input keys, graphics backends and logging.
//
pub mod error;
pub mod graphics;
pub mod input;
pub mod logging;
pub mod prelude;
pub mod signal;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit event loop and window ownership.
// `engine` defines the main entry point and its builder.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use error::EngineError;
pub use platform::WindowSignals;
pub use signal::Signal;
