pub mod console;
pub mod presenter;
pub mod round_engine;
pub mod suspense;
