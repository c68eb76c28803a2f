use super::model::{Catalog, ItemId, Song};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewFilter {
    #[default]
    All,
    Category(ItemId),
    Search(String),
}

/// The songs currently shown in the playlist. Holds catalog indices, so the
/// catalog itself is never reordered or trimmed by filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistView {
    filter: ViewFilter,
    indices: Vec<usize>,
}

impl PlaylistView {
    pub fn all(catalog: &Catalog) -> Self {
        Self {
            filter: ViewFilter::All,
            indices: (0..catalog.len()).collect(),
        }
    }

    pub fn category(catalog: &Catalog, id: &ItemId) -> Self {
        Self {
            filter: ViewFilter::Category(id.clone()),
            indices: catalog.filter_by_category(id),
        }
    }

    pub fn search(catalog: &Catalog, term: &str) -> Self {
        if term.is_empty() {
            return Self::all(catalog);
        }
        Self {
            filter: ViewFilter::Search(term.to_string()),
            indices: catalog.search(term),
        }
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Catalog index of the entry at `row`.
    pub fn catalog_index(&self, row: usize) -> Option<usize> {
        self.indices.get(row).copied()
    }

    /// Row of `catalog_index` in this view, if it is shown at all.
    pub fn row_of(&self, catalog_index: usize) -> Option<usize> {
        self.indices.iter().position(|&i| i == catalog_index)
    }

    pub fn songs<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Song> + 'a {
        catalog.songs_at(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Category;

    fn song(id: u64, title: &str, category: u64) -> Song {
        Song {
            id: id.into(),
            title: title.to_string(),
            artist: "Artist".to_string(),
            cover: String::new(),
            audio_url: format!("{id}.mp3"),
            category: category.into(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![song(10, "a", 1), song(11, "b", 2), song(12, "c", 1)],
            vec![Category {
                id: 1.into(),
                name: "One".to_string(),
                icon: String::new(),
            }],
        )
    }

    #[test]
    fn category_view_maps_rows_back_to_catalog() {
        let catalog = catalog();
        let view = PlaylistView::category(&catalog, &ItemId::from(1));
        assert_eq!(view.indices(), &[0, 2]);
        assert_eq!(view.catalog_index(1), Some(2));
        assert_eq!(view.row_of(2), Some(1));
        assert_eq!(view.row_of(1), None);
    }

    #[test]
    fn empty_search_is_the_full_view() {
        let catalog = catalog();
        let view = PlaylistView::search(&catalog, "");
        assert_eq!(view, PlaylistView::all(&catalog));
        assert_eq!(view.filter(), &ViewFilter::All);
    }

    #[test]
    fn unknown_category_yields_empty_view() {
        let catalog = catalog();
        let view = PlaylistView::category(&catalog, &ItemId::from(42));
        assert!(view.is_empty());
        assert_eq!(view.songs(&catalog).count(), 0);
    }
}
