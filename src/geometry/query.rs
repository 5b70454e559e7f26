use super::Rect;

/// Check if two rectangles overlap.
///
/// Rectangles that only share an edge do not intersect.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    !(a.right <= b.left || b.right <= a.left || a.bottom <= b.top || b.bottom <= a.top)
}

/// Check if `container` fully contains `contained`, edges included
pub fn contains(container: &Rect, contained: &Rect) -> bool {
    container.left <= contained.left
        && container.top <= contained.top
        && container.right >= contained.right
        && container.bottom >= contained.bottom
}

/// Overlapping region of two rectangles, or `None` when they do not intersect
pub fn intersection(a: &Rect, b: &Rect) -> Option<Rect> {
    if !intersects(a, b) {
        return None;
    }

    Some(Rect::new(
        a.left.max(b.left),
        a.top.max(b.top),
        a.right.min(b.right),
        a.bottom.min(b.bottom),
    ))
}

/// Smallest rectangle covering both inputs
pub fn union(a: &Rect, b: &Rect) -> Rect {
    Rect::new(
        a.left.min(b.left),
        a.top.min(b.top),
        a.right.max(b.right),
        a.bottom.max(b.bottom),
    )
}

/// Distance between the nearest edges of two rectangles.
///
/// Zero when they intersect. Otherwise the horizontal and vertical gaps
/// (zero on an axis where the rectangles overlap) are combined as a
/// Euclidean distance and truncated.
#[expect(
    clippy::cast_possible_truncation,
    reason = "distance is truncated to whole pixels"
)]
pub fn distance(a: &Rect, b: &Rect) -> i32 {
    if intersects(a, b) {
        return 0;
    }

    let dx = axis_gap(a.left, a.right, b.left, b.right);
    let dy = axis_gap(a.top, a.bottom, b.top, b.bottom);

    (dx * dx + dy * dy).sqrt() as i32
}

fn axis_gap(a_min: i32, a_max: i32, b_min: i32, b_max: i32) -> f64 {
    if a_max < b_min {
        f64::from(b_min) - f64::from(a_max)
    } else if b_max < a_min {
        f64::from(a_min) - f64::from(b_max)
    } else {
        0.0
    }
}

/// Union of every rectangle in `rects`, or `None` if there are none
pub fn bounding_box<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Option<Rect> {
    rects
        .into_iter()
        .copied()
        .reduce(|acc, r| union(&acc, &r))
}

impl Rect {
    pub fn intersects(&self, other: &Rect) -> bool {
        intersects(self, other)
    }

    /// Check if this rectangle fully contains another
    pub fn contains(&self, other: &Rect) -> bool {
        contains(self, other)
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        intersection(self, other)
    }

    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        union(self, other)
    }

    pub fn distance(&self, other: &Rect) -> i32 {
        distance(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 15, 15);
        let c = Rect::new(20, 20, 30, 30);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 20, 10);
        let below = Rect::new(0, 10, 10, 20);
        let corner = Rect::new(10, 10, 20, 20);

        for other in [right, below, corner] {
            assert!(!intersects(&a, &other));
            assert!(!intersects(&other, &a));
        }
    }

    #[test]
    fn test_intersects_symmetry() {
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(5, -5, 8, 30),
            Rect::new(10, 0, 20, 10),
            Rect::new(-10, -10, 0, 0),
            Rect::new(2, 2, 3, 3),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(intersects(a, b), intersects(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_contains() {
        let outer = Rect::new(0, 0, 20, 20);
        let inner = Rect::new(5, 5, 10, 10);
        let partial = Rect::new(15, 15, 25, 25);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&partial));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 15, 15);
        assert_eq!(intersection(&a, &b), Some(Rect::new(5, 5, 10, 10)));
        assert_eq!(a.intersection(&Rect::new(10, 0, 20, 10)), None);
        assert_eq!(a.intersection(&Rect::new(50, 50, 60, 60)), None);
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 15, 15);
        assert_eq!(union(&a, &b), Rect::new(0, 0, 15, 15));

        let far = Rect::new(100, -50, 110, -40);
        assert_eq!(a.union(&far), Rect::new(0, -50, 110, 10));
    }

    #[test]
    fn test_distance() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(distance(&a, &Rect::new(20, 0, 30, 10)), 10);
        assert_eq!(distance(&a, &Rect::new(0, 25, 10, 30)), 15);
        assert_eq!(distance(&a, &Rect::new(5, 5, 15, 15)), 0);
        // 3-4-5 triangle between corners
        assert_eq!(distance(&a, &Rect::new(13, 14, 20, 20)), 5);
        // sqrt(2) truncates to 1
        assert_eq!(distance(&a, &Rect::new(11, 11, 20, 20)), 1);
        // touching but not intersecting
        assert_eq!(distance(&a, &Rect::new(10, 0, 20, 10)), 0);
    }

    #[test]
    fn test_distance_symmetry() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(-40, 30, -20, 50);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_bounding_box() {
        let rects = [
            Rect::new(0, 0, 10, 10),
            Rect::new(20, 5, 30, 15),
            Rect::new(-5, 2, 0, 3),
        ];
        assert_eq!(bounding_box(&rects), Some(Rect::new(-5, 0, 30, 15)));
        assert_eq!(bounding_box(&[] as &[Rect]), None);
    }
}
