// Adapters layer: concrete implementations for external systems (stdin, fixed values).

pub mod input;
