use engine_core::{BoundingBox, CollisionStatus, Vec2};
use proptest::prelude::*;

// Integer-valued coordinates keep the float comparisons exact.
fn arb_box() -> impl Strategy<Value = BoundingBox> {
    (-50i32..50, -50i32..50, 0u32..40, 0u32..40).prop_map(|(x, y, w, h)| {
        BoundingBox::from_corners(
            Vec2::new(x as f32, y as f32),
            Vec2::new((x + w as i32) as f32, (y + h as i32) as f32),
        )
    })
}

proptest! {
    #[test]
    fn intersection_is_symmetric(a in arb_box(), b in arb_box()) {
        prop_assert_eq!(a.intersects_bound(&b), b.intersects_bound(&a));
    }

    #[test]
    fn outside_iff_not_intersecting(a in arb_box(), b in arb_box()) {
        let status = a.bound_collide_status(&b);
        prop_assert_eq!(status.is_outside(), !a.intersects_bound(&b));
    }

    #[test]
    fn inside_iff_within_all_sides(a in arb_box(), b in arb_box()) {
        let status = a.bound_collide_status(&b);
        let within = b.min_x() >= a.min_x()
            && b.max_x() <= a.max_x()
            && b.min_y() >= a.min_y()
            && b.max_y() <= a.max_y();
        prop_assert_eq!(status == CollisionStatus::INSIDE, a.intersects_bound(&b) && within);
    }

    #[test]
    fn merge_covers_both_minimally(a in arb_box(), b in arb_box()) {
        let m = BoundingBox::merged(&a, &b);

        for bbox in [&a, &b] {
            prop_assert!(m.min_x() <= bbox.min_x() && m.max_x() >= bbox.max_x());
            prop_assert!(m.min_y() <= bbox.min_y() && m.max_y() >= bbox.max_y());
        }

        prop_assert_eq!(m.min_x(), a.min_x().min(b.min_x()));
        prop_assert_eq!(m.max_x(), a.max_x().max(b.max_x()));
        prop_assert_eq!(m.min_y(), a.min_y().min(b.min_y()));
        prop_assert_eq!(m.max_y(), a.max_y().max(b.max_y()));
    }

    #[test]
    fn interior_points_contained_boundary_excluded(
        a in arb_box(),
        fx in 0.01f32..0.99,
        fy in 0.01f32..0.99,
    ) {
        prop_assume!(a.width() > 0.0 && a.height() > 0.0);

        let x = a.min_x() + a.width() * fx;
        let y = a.min_y() + a.height() * fy;
        prop_assert!(a.contains_point(x, y));

        prop_assert!(!a.contains_point(a.min_x(), y));
        prop_assert!(!a.contains_point(a.max_x(), y));
        prop_assert!(!a.contains_point(x, a.min_y()));
        prop_assert!(!a.contains_point(x, a.max_y()));
    }
}
