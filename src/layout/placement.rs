//! Collision-avoiding placement of node footprints
//!
//! Each candidate is tested against every footprint already placed in the
//! same batch. On a collision the candidate is pushed outward from its
//! original position, cycling right, down, left and up, one step further
//! every full turn. The search is bounded; when the bound runs out the last
//! candidate is accepted even if it still overlaps.

use log::debug;

use super::config::LayoutConfig;
use super::types::{BoundingBox, Point};

/// Direction of a collision step, in search order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    const CYCLE: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Direction and distance (in steps) of the given 0-based attempt
    fn for_attempt(attempt: usize) -> (Self, f64) {
        (Self::CYCLE[attempt % 4], (attempt / 4 + 1) as f64)
    }

    fn unit(self) -> (f64, f64) {
        match self {
            Direction::Right => (1.0, 0.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Up => (0.0, -1.0),
        }
    }
}

/// Outcome of placing one footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Accepted top-left corner
    pub position: Point,
    /// Number of perturbations applied
    pub attempts: usize,
    /// Whether the accepted footprint still overlaps an earlier one
    pub overlapping: bool,
}

/// Footprints accepted so far in one instantiation batch
#[derive(Debug, Clone)]
pub struct OccupiedRegions {
    size: (f64, f64),
    gap: f64,
    max_attempts: usize,
    step: (f64, f64),
    regions: Vec<BoundingBox>,
}

impl OccupiedRegions {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            size: config.node_size,
            gap: config.gap,
            max_attempts: config.max_attempts,
            step: (config.step_x(), config.step_y()),
            regions: Vec::new(),
        }
    }

    /// Whether a footprint at `origin` would collide with a placed one
    pub fn collides(&self, origin: Point) -> bool {
        let candidate = BoundingBox::at(origin, self.size);
        self.regions
            .iter()
            .any(|placed| candidate.overlaps_with_gap(placed, self.gap))
    }

    /// Find a slot near `desired`, record it, and return where it landed
    pub fn place(&mut self, desired: Point) -> Placement {
        let mut position = desired;
        let mut attempts = 0;
        let mut overlapping = self.collides(position);

        while overlapping && attempts < self.max_attempts {
            let (direction, distance) = Direction::for_attempt(attempts);
            let (ux, uy) = direction.unit();
            position = desired.offset(
                ux * distance * self.step.0,
                uy * distance * self.step.1,
            );
            attempts += 1;
            overlapping = self.collides(position);
        }

        if overlapping {
            debug!(
                x = position.x, y = position.y, attempts;
                "Collision search exhausted, accepting overlapping position"
            );
        }

        self.regions.push(BoundingBox::at(position, self.size));
        Placement {
            position,
            attempts,
            overlapping,
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> OccupiedRegions {
        OccupiedRegions::new(&LayoutConfig::default())
    }

    #[test]
    fn test_attempt_cycle() {
        assert_eq!(Direction::for_attempt(0), (Direction::Right, 1.0));
        assert_eq!(Direction::for_attempt(1), (Direction::Down, 1.0));
        assert_eq!(Direction::for_attempt(2), (Direction::Left, 1.0));
        assert_eq!(Direction::for_attempt(3), (Direction::Up, 1.0));
        assert_eq!(Direction::for_attempt(4), (Direction::Right, 2.0));
    }

    #[test]
    fn test_free_position_is_accepted() {
        let mut occupied = regions();
        let placement = occupied.place(Point::new(10.0, 20.0));
        assert_eq!(placement.position, Point::new(10.0, 20.0));
        assert_eq!(placement.attempts, 0);
        assert!(!placement.overlapping);
        assert_eq!(occupied.len(), 1);
    }

    #[test]
    fn test_collision_moves_right_first() {
        let mut occupied = regions();
        occupied.place(Point::new(0.0, 0.0));
        let placement = occupied.place(Point::new(0.0, 0.0));
        assert_eq!(placement.position, Point::new(330.0, 0.0));
        assert_eq!(placement.attempts, 1);
        assert!(!placement.overlapping);
    }

    #[test]
    fn test_search_spirals_outward() {
        let mut occupied = regions();
        // Fill the origin and its four neighbours one step away
        for p in [
            Point::new(0.0, 0.0),
            Point::new(330.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(-330.0, 0.0),
            Point::new(0.0, -100.0),
        ] {
            occupied.place(p);
        }
        let placement = occupied.place(Point::new(0.0, 0.0));
        assert_eq!(placement.position, Point::new(660.0, 0.0));
        assert_eq!(placement.attempts, 5);
        assert!(!placement.overlapping);
    }

    #[test]
    fn test_exhausted_bound_accepts_overlap() {
        let config = LayoutConfig::default().with_max_attempts(0);
        let mut occupied = OccupiedRegions::new(&config);
        occupied.place(Point::new(0.0, 0.0));
        let placement = occupied.place(Point::new(5.0, 5.0));
        assert_eq!(placement.position, Point::new(5.0, 5.0));
        assert!(placement.overlapping);
        assert_eq!(occupied.len(), 2);
    }

    #[test]
    fn test_bound_of_one_keeps_last_candidate() {
        let config = LayoutConfig::default().with_max_attempts(1);
        let mut occupied = OccupiedRegions::new(&config);
        occupied.place(Point::new(0.0, 0.0));
        occupied.place(Point::new(330.0, 0.0));
        let placement = occupied.place(Point::new(0.0, 0.0));
        assert_eq!(placement.attempts, 1);
        assert_eq!(placement.position, Point::new(330.0, 0.0));
        assert!(placement.overlapping);
    }
}
