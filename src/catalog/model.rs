use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a song or category as it appears in the catalog document.
///
/// Documents in the wild use both numeric and string ids, so both are
/// accepted. Ids compare by value and kind: `1` and `"1"` are different.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: ItemId,
    pub title: String,
    pub artist: String,
    pub cover: String,
    pub audio_url: String,
    pub category: ItemId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: ItemId,
    pub name: String,
    pub icon: String,
}

/// The song list and categories, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub songs: Vec<Song>,
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>, categories: Vec<Category>) -> Self {
        Self { songs, categories }
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.songs.iter().position(|s| &s.id == id)
    }

    pub fn category(&self, id: &ItemId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Indices of songs in `category`, in catalog order.
    pub fn filter_by_category(&self, category: &ItemId) -> Vec<usize> {
        self.songs
            .iter()
            .enumerate()
            .filter(|(_, song)| &song.category == category)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of songs whose title or artist contains `term`, ignoring case.
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<usize> {
        let needle = term.to_lowercase();
        self.songs
            .iter()
            .enumerate()
            .filter(|(_, song)| {
                song.title.to_lowercase().contains(&needle)
                    || song.artist.to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect()
    }

    pub fn songs_at<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a Song> + 'a {
        indices.iter().filter_map(|&i| self.songs.get(i))
    }
}
