mod carousel_image;

pub use carousel_image::{CarouselImage, CarouselImagePatch, NewCarouselImage};
