//! Bounded trail history
//!
//! A `TrailBuffer` is a sliding window over the most recent positions of one
//! particle, oldest first. Once full, every push evicts exactly one point
//! from the front.

use std::collections::vec_deque;
use std::collections::VecDeque;

use super::states::Point3;
use crate::error::{trail_capacity, ConfigError};

/// Default trail length used by the live view
pub const DEFAULT_TRAIL_CAPACITY: usize = 3000;

// upfront reservation is capped; larger windows grow on demand
fn initial_reserve(capacity: usize) -> usize {
    capacity.min(DEFAULT_TRAIL_CAPACITY)
}

#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<Point3>,
    capacity: usize,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self {
            points: VecDeque::with_capacity(DEFAULT_TRAIL_CAPACITY),
            capacity: DEFAULT_TRAIL_CAPACITY,
        }
    }
}

impl TrailBuffer {
    /// Empty buffer holding at most `capacity` points
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity(0));
        }
        Ok(Self {
            points: VecDeque::with_capacity(initial_reserve(capacity)),
            capacity,
        })
    }

    /// Same as [`TrailBuffer::new`] for a signed capacity from config
    pub fn with_raw_capacity(raw: i64) -> Result<Self, ConfigError> {
        Self::new(trail_capacity(raw)?)
    }

    /// Append the newest point, dropping the oldest ones beyond capacity
    pub fn push(&mut self, p: Point3) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.points.len() == self.capacity
    }

    pub fn latest(&self) -> Option<&Point3> {
        self.points.back()
    }

    /// Shrink or grow the window; shrinking evicts the oldest points
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity(0));
        }
        self.capacity = capacity;
        while self.points.len() > capacity {
            self.points.pop_front();
        }
        Ok(())
    }

    /// Read-only, chronologically ordered view for the renderer
    pub fn view(&self) -> TrailView<'_> {
        TrailView { points: &self.points }
    }
}

/// Borrowed view of a trail, oldest point first
#[derive(Debug, Clone, Copy)]
pub struct TrailView<'a> {
    points: &'a VecDeque<Point3>,
}

impl<'a> TrailView<'a> {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&'a Point3> {
        self.points.get(i)
    }

    pub fn iter(&self) -> vec_deque::Iter<'a, Point3> {
        self.points.iter()
    }

    /// Owned copy, e.g. for handing off to another thread or serializing
    pub fn to_vec(&self) -> Vec<Point3> {
        self.points.iter().copied().collect()
    }
}

impl<'a> IntoIterator for TrailView<'a> {
    type Item = &'a Point3;
    type IntoIter = vec_deque::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
