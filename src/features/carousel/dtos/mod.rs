mod carousel_dto;

pub use carousel_dto::{CarouselImageResponseDto, CreateCarouselImageDto, UpdateCarouselImageDto};
