pub mod core;
mod executor;
mod persist;
