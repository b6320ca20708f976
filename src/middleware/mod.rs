// Middleware layers

pub mod cors;
