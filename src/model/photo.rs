//! A single photo as placed on the carousel track.

/// Track offset of the photo at key 0. Centers the first photo in the track.
pub const TRACK_ORIGIN: i32 = 24;

/// Distance between two neighbouring photos on the track (item width plus gap).
pub const TRACK_STRIDE: i32 = 16;

/// Track offset for the photo stored under `key`.
///
/// Linear in the key, so clones stored under negative or overflow keys
/// continue the progression of the primary photos.
pub fn track_offset_for(key: i32) -> i32 {
    TRACK_ORIGIN - TRACK_STRIDE * key
}

/// A photo in a [`CarouselLayout`](crate::model::CarouselLayout).
///
/// Photos are produced only by the layout builder and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    id: i32,
    source_url: String,
    track_offset: i32,
    logical_index: usize,
}

impl Photo {
    /// Place `source_url` under layout key `id`.
    ///
    /// `logical_index` is the position of the photo in the search results;
    /// for a clone it names the photo being duplicated.
    pub fn new(id: i32, source_url: impl Into<String>, logical_index: usize) -> Self {
        Self {
            id,
            source_url: source_url.into(),
            track_offset: track_offset_for(id),
            logical_index,
        }
    }

    /// Layout key of this photo.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Horizontal display coordinate, in track units.
    pub fn track_offset(&self) -> i32 {
        self.track_offset
    }

    pub fn logical_index(&self) -> usize {
        self.logical_index
    }

    /// True for wrap-around duplicates placed outside `0..N`.
    pub fn is_clone(&self) -> bool {
        usize::try_from(self.id).map_or(true, |id| id != self.logical_index)
    }
}
