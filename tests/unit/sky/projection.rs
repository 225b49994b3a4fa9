//! Tests for the Mollweide inverse projection

#[cfg(test)]
mod tests {
    use skyoverlap::sky::MollweideGrid;
    use std::f64::consts::{FRAC_PI_2, PI};

    // Tests the 2:1 aspect ratio
    // Verified by using a square grid
    #[test]
    fn test_with_width() {
        let grid = MollweideGrid::with_width(800);
        assert_eq!((grid.width, grid.height), (800, 400));
        assert_eq!(grid.pixel_count(), 320_000);
        assert_eq!(MollweideGrid::with_width(1).height, 1);
    }

    // Tests the image centre looks at the equator at zero longitude
    // Verified by offsetting the longitude origin
    #[test]
    fn test_inverse_centre() {
        let grid = MollweideGrid::with_width(801);
        let (theta, phi) = grid.inverse(400, 200).unwrap();
        assert!((theta - FRAC_PI_2).abs() < 0.01);
        assert!(phi < 0.01 || phi > 2.0 * PI - 0.01);
    }

    // Tests the top centre is near the north pole
    // Verified by flipping the vertical axis
    #[test]
    fn test_inverse_north() {
        let grid = MollweideGrid::with_width(400);
        let (theta, _) = grid.inverse(200, 0).unwrap();
        assert!(theta < 0.2);
    }

    // Tests longitude grows towards the left of the image
    // Verified by dropping the sign flip
    #[test]
    fn test_inverse_longitude_direction() {
        let grid = MollweideGrid::with_width(400);
        let (_, left) = grid.inverse(100, 100).unwrap();
        let (_, right) = grid.inverse(300, 100).unwrap();
        assert!(left > 0.0 && left < PI);
        assert!(right > PI && right < 2.0 * PI);
    }

    // Tests image corners fall outside the ellipse
    // Verified by removing the ellipse test
    #[test]
    fn test_inverse_outside() {
        let grid = MollweideGrid::with_width(400);
        assert!(grid.inverse(0, 0).is_none());
        assert!(grid.inverse(399, 199).is_none());
        assert!(grid.inverse(0, 100).is_some());
    }
}
