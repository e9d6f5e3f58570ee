//! Carousel layout: the keyed set of photos currently on the track.
//!
//! Building a layout is a pure transformation from resolved image URLs.
//! The circular variant is a separate pure step ([`extend_circular`]) so the
//! clone placement can be tested on its own, independent of navigation.

use crate::model::photo::Photo;
use serde::Deserialize;
use std::collections::BTreeMap;

/// How the builder lays out search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Only the primary keys `0..N`.
    Linear,
    /// Primary keys plus wrap-around clones on both ends.
    #[default]
    Circular,
}

impl std::str::FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(LayoutMode::Linear),
            "circular" => Ok(LayoutMode::Circular),
            other => Err(format!("unknown layout mode: {other}")),
        }
    }
}

/// Ordered mapping from layout key to [`Photo`].
///
/// `len` is the number of logical photos N; the map may hold up to `3N - 2`
/// entries once extended with clones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselLayout {
    photos: BTreeMap<i32, Photo>,
    len: usize,
}

impl CarouselLayout {
    /// Empty layout (no search yet, or a search with zero results).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of logical photos, clones excluded.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of entries including clones.
    pub fn entry_count(&self) -> usize {
        self.photos.len()
    }

    pub fn get(&self, key: i32) -> Option<&Photo> {
        self.photos.get(&key)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.photos.contains_key(&key)
    }

    /// Photos in track order (ascending key).
    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.photos.keys().copied()
    }

    /// Key of the first photo, i.e. the key selected after a search.
    pub fn zero_key(&self) -> i32 {
        0
    }

    /// Map any key present in the layout to its logical index in `0..N`.
    ///
    /// Returns `None` for keys not in the layout.
    pub fn logical_index_of(&self, key: i32) -> Option<usize> {
        self.photos.get(&key).map(Photo::logical_index)
    }
}

/// Build the primary layout for resolved image URLs.
///
/// Key `i` holds `urls[i]` at track offset `24 - 16 * i`.
pub fn build_layout<S: AsRef<str>>(urls: &[S]) -> CarouselLayout {
    let photos = urls
        .iter()
        .enumerate()
        .map(|(index, url)| {
            let key = index as i32;
            (key, Photo::new(key, url.as_ref(), index))
        })
        .collect();

    CarouselLayout {
        photos,
        len: urls.len(),
    }
}

/// Extend a primary layout with wrap-around clones.
///
/// The last `N - 1` photos are cloned before key 0 (key `-j` duplicates photo
/// `N - j`) and the first `N - 1` photos after key `N - 1` (key `N + j`
/// duplicates photo `j`). Clone offsets continue the linear progression.
/// Clone entries already present in `base` are replaced.
pub fn extend_circular(base: CarouselLayout) -> CarouselLayout {
    let n = base.len;
    if n < 2 {
        return base;
    }

    let mut photos: BTreeMap<i32, Photo> = base
        .photos
        .into_iter()
        .filter(|(key, _)| (0..n as i32).contains(key))
        .collect();

    let mut clones = Vec::with_capacity(2 * (n - 1));
    for j in 1..n {
        let logical = n - j;
        if let Some(source) = photos.get(&(logical as i32)) {
            clones.push(Photo::new(-(j as i32), source.source_url(), logical));
        }
    }
    for j in 0..n - 1 {
        if let Some(source) = photos.get(&(j as i32)) {
            clones.push(Photo::new((n + j) as i32, source.source_url(), j));
        }
    }
    photos.extend(clones.into_iter().map(|photo| (photo.id(), photo)));

    CarouselLayout { photos, len: n }
}

/// Build a layout for `urls` in the given mode.
pub fn build_layout_with_mode<S: AsRef<str>>(urls: &[S], mode: LayoutMode) -> CarouselLayout {
    let base = build_layout(urls);
    match mode {
        LayoutMode::Linear => base,
        LayoutMode::Circular => extend_circular(base),
    }
}
