//! Property tests for coordinate arithmetic and the geometric queries.

use coord2::{Coord, Diagnostics, Exact, Fast, GeomError, Plane, PlaneCfg, SqrtStrategy};
use proptest::prelude::*;

fn coord_i32() -> impl Strategy<Value = Coord<i32>> {
    (-10_000i32..10_000, -10_000i32..10_000).prop_map(|(x, y)| Coord::new(x, y))
}

fn coord_u16() -> impl Strategy<Value = Coord<u16>> {
    (any::<u16>(), any::<u16>()).prop_map(|(x, y)| Coord::new(x, y))
}

fn quiet() -> Plane {
    Plane::with_cfg(
        Exact,
        PlaneCfg {
            diagnostics: Diagnostics::Silent,
        },
    )
}

proptest! {
    #[test]
    fn equality_is_componentwise(a in coord_i32(), b in coord_i32()) {
        prop_assert_eq!(a == b, a.x == b.x && a.y == b.y);
        prop_assert_eq!(Coord::coincides(&a, &b), a == b);
    }

    #[test]
    fn sub_then_add_round_trips(a in coord_i32(), b in coord_i32()) {
        prop_assert_eq!((a - b) + b, a);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_diagonal(a in coord_u16(), b in coord_u16()) {
        let p = quiet();
        prop_assert_eq!(p.distance(&a, &a), 0.0);
        prop_assert_eq!(p.distance(&a, &b), p.distance(&b, &a));
    }

    #[test]
    fn manhattan_bounds_euclidean(a in coord_u16(), b in coord_u16()) {
        let p = quiet();
        prop_assert!(p.manhattan_distance(&a, &b) >= p.distance(&a, &b));
    }

    #[test]
    fn area_is_permutation_invariant(a in coord_i32(), b in coord_i32(), c in coord_i32()) {
        let p = quiet();
        let base = p.triangle_area(&a, &b, &c);
        for area in [
            p.triangle_area(&a, &c, &b),
            p.triangle_area(&b, &a, &c),
            p.triangle_area(&b, &c, &a),
            p.triangle_area(&c, &a, &b),
            p.triangle_area(&c, &b, &a),
        ] {
            prop_assert_eq!(area, base);
        }
    }

    #[test]
    fn repeated_vertex_has_zero_area(a in coord_i32(), b in coord_i32()) {
        prop_assert_eq!(quiet().triangle_area(&a, &a, &b), 0.0);
    }

    #[test]
    fn vertical_slope_is_always_an_error(x in any::<i16>(), y0 in any::<i16>(), y1 in any::<i16>()) {
        let p = quiet();
        let a = Coord::new(x, y0);
        let b = Coord::new(x, y1);
        prop_assert_eq!(p.try_slope(&a, &b), Err(GeomError::UndefinedSlope));
        prop_assert_eq!(p.slope(&a, &b), 0.0);
    }

    #[test]
    fn fast_sqrt_relative_error(v in 1e-6f64..1e6) {
        let exact = Exact.sqrt(v);
        prop_assert!((Fast.sqrt(v) - exact).abs() / exact < 1e-3);
    }

    #[test]
    fn display_parse_round_trip(a in coord_i32()) {
        let back: Coord<i32> = a.to_string().parse().unwrap();
        prop_assert_eq!(back, a);
    }
}
