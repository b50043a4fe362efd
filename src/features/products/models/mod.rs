mod gallery;
mod product;

pub use gallery::ProductGallery;
pub use product::{NewProduct, Product, ProductFilter, ProductPatch};
