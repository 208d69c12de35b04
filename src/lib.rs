pub mod config;
pub mod logging;

// Link pipeline: argument checks → script template → attach scheduling → polling.
pub mod attach;
pub mod linker;
pub mod poll;
pub mod script;
pub mod sim;
pub mod view;
