// LogsView - lib.rs
//
// Library entry point. The service and its building blocks are usable by
// any front end; `main.rs` is only the command-line one.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
