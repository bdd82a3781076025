//! Seat identification and per-seat data storage.
//!
//! A match always has exactly two seats, which keeps `SeatMap` a flat
//! pair and lets `split_mut` hand out simultaneous mutable access to
//! both entries — resolvers mutate both inventories in one pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the two player slots in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats, in index order.
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    /// The 0-based index of this seat.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.index())
    }
}

/// Per-seat data storage indexed by `Seat`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::First), factory(Seat::Second)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's entry.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's entry.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Mutable references to both entries, ordered as `(seat, other)`.
    pub fn split_mut(&mut self, seat: Seat) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        match seat {
            Seat::First => (first, second),
            Seat::Second => (second, first),
        }
    }

    /// Iterate over `(Seat, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> From<[T; 2]> for SeatMap<T> {
    fn from(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
