mod product_dto;

pub use product_dto::{
    CreateProductDto, ProductGalleryDto, ProductQueryParams, ProductResponseDto,
    UpdateProductDto, UpdateProductGalleryDto,
};
