#![cfg(feature = "dev")]

use retail_analytics::internals::primitives::point::{Planar, Point};

/// A household record carrying fields the clustering never reads.
#[derive(Debug, Clone, PartialEq)]
struct Household {
    id: u32,
    spend: f64,
    size: f64,
    loyal: bool,
}

impl Planar<f64> for Household {
    fn x(&self) -> f64 {
        self.spend
    }

    fn y(&self) -> f64 {
        self.size
    }
}

#[test]
fn test_point_construction_and_display() {
    let p = Point::new(1.5, -2.0);
    assert_eq!(p.x, 1.5);
    assert_eq!(p.y, -2.0);
    assert_eq!(format!("{}", p), "(1.5, -2)");
    assert_eq!(Point::from((1.5, -2.0)), p);
    assert_eq!(Point::<f64>::default(), Point::new(0.0, 0.0));
}

#[test]
fn test_point_is_finite() {
    assert!(Point::new(0.0, 1.0).is_finite());
    assert!(!Point::new(f64::NAN, 1.0).is_finite());
    assert!(!Point::new(0.0, f64::INFINITY).is_finite());
}

#[test]
fn test_planar_implementations() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.position(), p);

    let t = (3.0, 4.0);
    assert_eq!(Planar::x(&t), 3.0);
    assert_eq!(t.position(), p);

    let r = &p;
    assert_eq!(Planar::y(&r), 4.0);
}

#[test]
fn test_planar_for_domain_record() {
    let h = Household {
        id: 7,
        spend: 250.0,
        size: 3.0,
        loyal: true,
    };
    assert_eq!(h.position(), Point::new(250.0, 3.0));
    assert_eq!(h.id, 7);
    assert!(h.loyal);
}
