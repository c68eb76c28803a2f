use std::sync::Arc;

use crate::{
    audio::media::MediaEvent,
    catalog::{Catalog, CatalogError},
};

#[derive(Debug, Clone)]
pub enum Event {
    CatalogLoaded(Catalog),
    CatalogFailed(Arc<CatalogError>),
    Media(MediaEvent),
}
