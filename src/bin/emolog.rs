#![deny(unsafe_code)]

use std::process::ExitCode;

use emolog::Logger;

fn main() -> ExitCode {
    let logger = match Logger::builder("MAIN").level("INFO").build() {
        Ok(logger) => logger,
        Err(error) => {
            eprintln!("emolog: {error}");
            return ExitCode::FAILURE;
        }
    };

    logger.debug("debug message");
    logger.info("info message");
    logger.warning("warning message");
    logger.error("error message");
    logger.critical("critical message");

    ExitCode::SUCCESS
}
