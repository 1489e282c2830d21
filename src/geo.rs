/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees (haversine).
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal points, which would make asin NaN.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const SAN_FRANCISCO: (f64, f64) = (37.7749, -122.4194);
    const LONDON: (f64, f64) = (51.5072, -0.1275);

    #[test]
    fn test_coincident_points_are_zero() {
        for (lat, lon) in [SAN_FRANCISCO, LONDON, (90.0, 0.0), (-90.0, 180.0), (0.0, -180.0)] {
            assert_eq!(distance_km(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            (SAN_FRANCISCO, LONDON),
            ((-33.8588, 151.2153), (35.6895, 139.6917)),
            ((41.9028, 12.4964), (-90.0, 0.0)),
        ];
        for ((lat1, lon1), (lat2, lon2)) in pairs {
            let forward = distance_km(lat1, lon1, lat2, lon2);
            let backward = distance_km(lat2, lon2, lat1, lon1);
            assert!((forward - backward).abs() < 1e-9, "{forward} != {backward}");
        }
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let half = PI * EARTH_RADIUS_KM;
        for ((lat1, lon1), (lat2, lon2)) in [
            ((0.0, 0.0), (0.0, 180.0)),
            ((90.0, 0.0), (-90.0, 0.0)),
            ((45.0, 10.0), (-45.0, -170.0)),
            (SAN_FRANCISCO, (-37.7749, 57.5806)),
        ] {
            let d = distance_km(lat1, lon1, lat2, lon2);
            assert!(!d.is_nan());
            assert!((d - half).abs() < 1e-2, "expected ~{half}, got {d}");
        }
        assert!((half - 20015.0).abs() < 1.0);
    }

    #[test]
    fn test_san_francisco_to_london() {
        let d = distance_km(SAN_FRANCISCO.0, SAN_FRANCISCO.1, LONDON.0, LONDON.1);
        assert!((8550.0..8700.0).contains(&d), "got {d}");
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }
}
