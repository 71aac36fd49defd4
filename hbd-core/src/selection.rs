use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The hotels chosen in the filter control.
///
/// An empty selection is valid and matches no bookings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSelection {
    hotels: BTreeSet<String>,
}

impl HotelSelection {
    pub fn new<I, S>(hotels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hotels: hotels.into_iter().map(Into::into).collect(),
        }
    }

    /// Selection matching no hotel.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, hotel: &str) -> bool {
        self.hotels.contains(hotel)
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    /// Add the hotel if absent, remove it if present.
    pub fn toggle(&mut self, hotel: &str) {
        if !self.hotels.remove(hotel) {
            self.hotels.insert(hotel.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hotels.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for HotelSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
