//! Flickr photo carousel
//!
//! Terminal carousel that searches Flickr as you type and lays the results
//! out on a sliding thumbnail track.
//!
//! Pure core (`model`, `state`) with an impure shell (`client`, `view`).

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
