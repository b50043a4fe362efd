mod category;

pub use category::{Category, CategoryPatch, CategoryRemoval, CategoryUpdate, NewCategory};
