mod error;
mod model;
mod source;
mod view;

pub use self::error::CatalogError;
pub use self::model::{Catalog, Category, ItemId, Song};
pub use self::source::{CatalogSource, MediaLocation};
pub use self::view::{PlaylistView, ViewFilter};
