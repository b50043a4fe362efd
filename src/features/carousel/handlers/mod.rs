mod carousel_handler;

pub use carousel_handler::*;
