//! In-memory retained scene implementing [`Surface`].

use log::warn;

use super::primitive::{Primitive, PrimitiveId, PrimitiveKind, Style};
use super::surface::Surface;
use crate::geometry::Bounds;

/// Retained store for all primitives on the canvas.
///
/// Primitives are kept in creation order (first = bottom layer, last = top
/// layer), so a host shell can paint them back-to-front by iterating
/// [`Scene::primitives`]. Handles are never reused within a scene.
#[derive(Debug, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    next_id: u64,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// All primitives in draw order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Looks up a primitive by handle.
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.id == id)
    }

    /// Number of primitives currently on the scene.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns true if the scene holds no primitives.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl Surface for Scene {
    fn create(&mut self, kind: PrimitiveKind, bounds: Bounds, style: Style) -> PrimitiveId {
        let id = PrimitiveId::new(self.next_id);
        self.next_id += 1;
        self.primitives.push(Primitive {
            id,
            kind,
            bounds,
            style,
        });
        id
    }

    fn set_bounds(&mut self, id: PrimitiveId, bounds: Bounds) {
        match self.primitives.iter_mut().find(|p| p.id == id) {
            Some(primitive) => primitive.bounds = bounds,
            None => warn!("set_bounds on unknown primitive {id:?}; ignoring"),
        }
    }

    fn remove(&mut self, id: PrimitiveId) {
        let before = self.primitives.len();
        self.primitives.retain(|p| p.id != id);
        if self.primitives.len() == before {
            warn!("remove of unknown primitive {id:?}; ignoring");
        }
    }

    fn clear(&mut self) {
        self.primitives.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::geometry::Point;

    fn test_style() -> Style {
        Style {
            stroke: BLACK,
            fill: None,
            thickness: 2.0,
        }
    }

    fn unit_bounds() -> Bounds {
        Bounds::new(Point::new(0, 0), Point::new(1, 1))
    }

    #[test]
    fn create_retains_in_draw_order() {
        let mut scene = Scene::new();
        let first = scene.create(PrimitiveKind::Line, unit_bounds(), test_style());
        let second = scene.create(PrimitiveKind::Rect, unit_bounds(), test_style());

        assert_ne!(first, second);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.primitives()[0].id, first);
        assert_eq!(scene.primitives()[1].id, second);
    }

    #[test]
    fn set_bounds_updates_in_place() {
        let mut scene = Scene::new();
        let id = scene.create(PrimitiveKind::Rect, unit_bounds(), test_style());

        let moved = Bounds::new(Point::new(3, 3), Point::new(9, 9));
        scene.set_bounds(id, moved);

        assert_eq!(scene.get(id).unwrap().bounds, moved);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn remove_drops_only_the_target() {
        let mut scene = Scene::new();
        let keep = scene.create(PrimitiveKind::Line, unit_bounds(), test_style());
        let doomed = scene.create(PrimitiveKind::Oval, unit_bounds(), test_style());

        scene.remove(doomed);

        assert_eq!(scene.len(), 1);
        assert!(scene.get(keep).is_some());
        assert!(scene.get(doomed).is_none());
    }

    #[test]
    fn unknown_handles_are_ignored() {
        let mut scene = Scene::new();
        let id = scene.create(PrimitiveKind::Line, unit_bounds(), test_style());
        scene.remove(id);

        // Stale handle: both mutations are silent no-ops.
        scene.set_bounds(id, unit_bounds());
        scene.remove(id);
        assert!(scene.is_empty());
    }

    #[test]
    fn handles_are_not_reused_after_removal() {
        let mut scene = Scene::new();
        let first = scene.create(PrimitiveKind::Line, unit_bounds(), test_style());
        scene.remove(first);

        let second = scene.create(PrimitiveKind::Line, unit_bounds(), test_style());
        assert_ne!(first, second);
    }

    #[test]
    fn clear_empties_the_scene() {
        let mut scene = Scene::new();
        for _ in 0..4 {
            scene.create(PrimitiveKind::Oval, unit_bounds(), test_style());
        }
        scene.clear();
        assert!(scene.is_empty());
    }
}
