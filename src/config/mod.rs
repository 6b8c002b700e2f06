pub mod sample;
pub mod settings;
