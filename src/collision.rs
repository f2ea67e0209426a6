//! Axis-aligned rectangle overlap for every entity in the field
//!
//! There is no collision response in this game. Overlap only ever answers
//! "did this bullet hit that zombie" or "is the character standing on that
//! drop", so the module is just bounds, a trait and the intersection test.
//!
//! # Rust Learning Notes
//!
//! - **Trait-based design**: bullets, zombies, drops and the character all
//!   expose their bounds through `Collidable`
//! - **Generic helpers**: `check_collisions_with_collection` works for any
//!   slice of `Collidable` values without dynamic dispatch

use glam::Vec2;

/// Rectangle in world units, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Bounds {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: Vec2, width: f32, height: f32) -> Self {
        Bounds::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Trait for entities that participate in overlap tests.
///
/// # Example
///
/// ```rust
/// use fortress::collision::{Bounds, Collidable};
///
/// struct Crate { x: f32, y: f32 }
///
/// impl Collidable for Crate {
///     fn get_bounds(&self) -> Bounds {
///         Bounds::new(self.x, self.y, 30.0, 30.0)
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn get_bounds(&self) -> Bounds;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Rectangles that only share an edge do not intersect.
pub fn aabb_intersect(a: &Bounds, b: &Bounds) -> bool {
    let x_overlap = a.x < b.right() && a.right() > b.x;
    let y_overlap = a.y < b.bottom() && a.bottom() > b.y;

    x_overlap && y_overlap
}

/// Checks one entity against a collection and returns the indices it overlaps.
///
/// Indices come back in collection order, so the first entry is the earliest
/// spawned entity that was hit.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(&entity_bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}
