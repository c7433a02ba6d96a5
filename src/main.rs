//=========================================================================
// Faelight — Executable
//
// Opens the engine window with the headless graphics backend and logs
// the window events through signal listeners.
//
//=========================================================================

use std::process::ExitCode;

use faelight::logging::{self, LogLevel};
use faelight::prelude::*;
use log::{debug, error, info};

fn main() -> ExitCode {
    logging::init(LogLevel::Debug);
    info!("Hello! Can I have your name? <3");

    let engine = EngineBuilder::new().build().init(|signals| {
        signals.created.connect(|(width, height)| {
            info!("Surface ready: {}x{}", width, height);
        });
        signals.frame.connect_once(|index| {
            debug!("First frame started (index {})", index);
        });
        signals.resized.connect(|(width, height)| {
            debug!("Resized to {}x{}", width, height);
        });
        signals.key_pressed.connect(|key| {
            if key.is_arrow() {
                info!("Pressed: {:?}", key);
            }
        });
        signals.close_requested.connect(|()| {
            info!("Goodbye!");
        });
    });

    match engine.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}
