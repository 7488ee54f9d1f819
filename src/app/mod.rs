// LogsView - app/mod.rs
//
// Application layer: the request-scoped service front ends call into.
// Depends on core and platform.

pub mod service;
