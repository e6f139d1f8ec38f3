pub mod core;
pub mod hosts;
pub mod request;
