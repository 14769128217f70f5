pub mod accumulator;
pub mod config;
pub mod greeter;
pub mod logging;
pub mod sequence;

// Re-export the main types for easy access
pub use accumulator::accumulate;
pub use config::Config;
pub use greeter::{greet, greet_to};
pub use logging::init_logging;
pub use sequence::EntrySequence;
