//! Command implementations

pub mod play;
pub mod simulate;
pub mod suggest;

pub use play::run_play;
pub use simulate::run_simulation;
pub use suggest::run_suggest;
