//! End-to-end workflow over a small grid-planning scenario: chain route
//! fragments, measure the route, hull the supply area and compute its size.

use approx::assert_relative_eq;
use gridgeo::area::ring_area;
use gridgeo::chain::chain_fragments;
use gridgeo::hull::{convex_hull, DEFAULT_HULL_PRECISION};
use gridgeo::{latlon, Datum, Length, LineString};

const DATUM: Datum = Datum::WGS84;

#[test]
fn chained_route_has_the_expected_length() {
    let west = LineString::new(vec![latlon!(51.0, 7.0), latlon!(51.0, 7.5)]);
    // Digitized in the opposite direction, the chainer has to flip it.
    let east = LineString::new(vec![latlon!(51.0, 8.0), latlon!(51.0, 7.5)]);

    let route = chain_fragments(&[west, east], Length::kilometers(100.0), &DATUM)
        .expect("route fragments should chain");
    assert_eq!(
        route.points(),
        &[latlon!(51.0, 7.0), latlon!(51.0, 7.5), latlon!(51.0, 8.0)]
    );

    // One degree of longitude along the 51st parallel.
    let expected = 6_378_137.0 * 1f64.to_radians() * 51f64.to_radians().cos();
    assert_relative_eq!(
        route.length(&DATUM).as_meters(),
        expected,
        max_relative = 1e-3
    );
}

#[test]
fn supply_area_from_substation_positions() {
    let substations = [
        latlon!(51.0, 7.0),
        latlon!(51.0, 8.0),
        latlon!(52.0, 8.0),
        latlon!(52.0, 7.0),
        latlon!(51.5, 7.5),
        latlon!(51.2, 7.3),
    ];

    let boundary =
        convex_hull(&substations, DEFAULT_HULL_PRECISION).expect("hull of substation cluster");
    assert!(boundary.is_closed());
    assert_eq!(boundary.len(), 5);
    assert!(boundary.contains(&latlon!(51.5, 7.5)));

    let area = ring_area(&boundary, &DATUM).expect("area of supply boundary");
    // Roughly one degree squared at 51..52° latitude.
    let square_kilometers = area.abs().as_square_kilometers();
    assert!(
        (7_000.0..8_500.0).contains(&square_kilometers),
        "unexpected supply area: {square_kilometers} km²"
    );
}

#[test]
fn noisy_import_is_sanitized_before_measuring() {
    let noisy = LineString::new(vec![
        latlon!(51.0, 7.0),
        latlon!(51.0, 7.0),
        latlon!(51.0, 7.5),
    ]);

    let clean = noisy.sanitized();
    assert_eq!(clean.len(), 2);
    assert_relative_eq!(
        clean.length(&DATUM).as_meters(),
        noisy.length(&DATUM).as_meters(),
        max_relative = 1e-9
    );
}
