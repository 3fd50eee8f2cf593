//! Load configuration

pub mod load_request;

pub use load_request::*;
