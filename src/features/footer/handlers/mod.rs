mod footer_handler;

pub use footer_handler::*;
