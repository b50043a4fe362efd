mod carousel_service;

pub use carousel_service::{CarouselService, MoveDirection};
