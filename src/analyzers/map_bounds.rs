use serde::Serialize;

use crate::models::GeoPoint;

/// Smallest latitude/longitude box containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl MapBounds {
    /// `None` for an empty set. A single point gives a zero-area box.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;

        let mut bounds = Self {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };

        for point in points {
            bounds.south = bounds.south.min(point.latitude);
            bounds.north = bounds.north.max(point.latitude);
            bounds.west = bounds.west.min(point.longitude);
            bounds.east = bounds.east.max(point.longitude);
        }

        Some(bounds)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// South-west and north-east corners, the form map widgets fit to.
    pub fn corners(&self) -> [GeoPoint; 2] {
        [
            GeoPoint::new(self.south, self.west),
            GeoPoint::new(self.north, self.east),
        ]
    }

    pub fn is_degenerate(&self) -> bool {
        self.south == self.north || self.west == self.east
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.south..=self.north).contains(&point.latitude)
            && (self.west..=self.east).contains(&point.longitude)
    }
}
