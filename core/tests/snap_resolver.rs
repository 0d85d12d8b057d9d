use folio_core::config::SnapSettings;
use folio_core::pin::PinSpan;
use folio_core::snap::{PinnedRegion, SnapResolver};

const BUFFER: f64 = 0.02;

fn assert_close(actual: f64, expected: f64) {
    let delta = (actual - expected).abs();
    assert!(
        delta <= 1e-9,
        "expected {:.9} got {:.9} (delta {:.9})",
        expected,
        actual,
        delta
    );
}

fn two_regions() -> SnapResolver {
    SnapResolver::new(
        vec![PinnedRegion::new(0.25, 0.35), PinnedRegion::new(0.65, 0.75)],
        BUFFER,
    )
}

fn scenario() -> SnapResolver {
    SnapResolver::new(
        vec![PinnedRegion::new(0.0, 0.1), PinnedRegion::new(0.5, 0.65)],
        BUFFER,
    )
}

fn samples() -> impl Iterator<Item = f64> {
    (0..=1000).map(|step| step as f64 / 1000.0)
}

#[test]
fn resolve_is_idempotent_inside_regions() {
    for resolver in [two_regions(), scenario()] {
        for x in samples() {
            if !resolver.in_pinned(x) {
                continue;
            }
            let once = resolver.resolve(x);
            assert_eq!(resolver.resolve(once), once, "x = {x}");
        }
    }
}

#[test]
fn free_scroll_passes_through() {
    let resolver = two_regions();
    for x in samples() {
        if resolver.in_pinned(x) {
            continue;
        }
        assert_eq!(resolver.resolve(x), x);
    }
    assert_eq!(resolver.resolve(0.5), 0.5);
    assert_eq!(resolver.resolve(0.1), 0.1);
}

#[test]
fn nearest_center_wins() {
    let resolver = two_regions();
    assert_close(resolver.resolve(0.35), 0.30);
    assert_close(resolver.resolve(0.68), 0.70);
}

#[test]
fn buffer_boundary_on_zero_span_region() {
    let resolver = SnapResolver::new(vec![PinnedRegion::new(0.40, 0.40)], BUFFER);
    assert_close(resolver.resolve(0.419), 0.40);
    assert_close(resolver.resolve(0.381), 0.40);
    assert_eq!(resolver.resolve(0.421), 0.421);
    assert_eq!(resolver.resolve(0.379), 0.379);
}

#[test]
fn empty_region_set_is_a_no_op() {
    let resolver = SnapResolver::new(Vec::new(), BUFFER);
    assert!(resolver.is_empty());
    for x in samples() {
        assert_eq!(resolver.resolve(x), x);
    }
}

#[test]
fn unscrollable_page_disables_snapping() {
    let settings = SnapSettings::default();
    let pins = [PinSpan::pinned(0.0, 1300.0)];
    assert!(SnapResolver::from_pins(&pins, 0.0, &settings).is_none());
    assert!(SnapResolver::from_pins(&pins, -5.0, &settings).is_none());
    assert!(SnapResolver::from_pins(&pins, f64::NAN, &settings).is_none());
}

#[test]
fn no_pinned_spans_disables_snapping() {
    let settings = SnapSettings::default();
    assert!(SnapResolver::from_pins(&[], 5000.0, &settings).is_none());
    let flowing = PinSpan {
        start: 100.0,
        end: Some(400.0),
        pinned: false,
    };
    assert!(SnapResolver::from_pins(&[flowing], 5000.0, &settings).is_none());
}

#[test]
fn scenario_from_two_regions() {
    let resolver = scenario();
    assert_close(resolver.resolve(0.08), 0.05);
    assert_eq!(resolver.resolve(0.3), 0.3);
    assert_close(resolver.resolve(0.49), 0.575);
}

#[test]
fn overlapping_windows_resolve_by_distance() {
    let resolver = SnapResolver::new(
        vec![PinnedRegion::new(0.40, 0.40), PinnedRegion::new(0.43, 0.43)],
        BUFFER,
    );
    assert_close(resolver.resolve(0.414), 0.40);
    assert_close(resolver.resolve(0.416), 0.43);
}

#[test]
fn exact_tie_keeps_first_region() {
    let resolver = SnapResolver::new(
        vec![PinnedRegion::new(0.25, 0.25), PinnedRegion::new(0.75, 0.75)],
        0.3,
    );
    assert_eq!(resolver.resolve(0.5), 0.25);
}

#[test]
fn from_pins_normalizes_and_sorts() {
    let settings = SnapSettings::default();
    let pins = [
        PinSpan::pinned(6000.0, 7400.0),
        PinSpan::pinned(0.0, 1300.0),
        PinSpan {
            start: 3000.0,
            end: None,
            pinned: true,
        },
    ];
    let resolver = SnapResolver::from_pins(&pins, 10_000.0, &settings).expect("resolver");
    let regions = resolver.regions();
    assert_eq!(regions.len(), 3);
    assert_close(regions[0].start, 0.0);
    assert_close(regions[0].end, 0.13);
    assert_close(regions[0].center, 0.065);
    assert_close(regions[1].start, 0.3);
    assert_close(regions[1].end, 0.3);
    assert_close(regions[2].center, 0.67);
    assert_close(resolver.buffer(), settings.buffer);
}

#[test]
fn normalized_pin_center_is_the_region_midpoint() {
    let region = PinSpan::pinned(2500.0, 4500.0)
        .normalize(10_000.0)
        .expect("region");
    assert_close(region.start, 0.25);
    assert_close(region.end, 0.45);
    assert_close(region.center, (region.start + region.end) * 0.5);

    let inverted = PinSpan::pinned(4000.0, 3000.0)
        .normalize(10_000.0)
        .expect("region");
    assert_close(inverted.start, 0.4);
    assert_close(inverted.end, 0.4);
    assert_close(inverted.center, 0.4);
}

#[test]
fn custom_buffer_widens_windows() {
    let mut settings = SnapSettings::default();
    settings.buffer = 0.05;
    let pins = [PinSpan::pinned(4000.0, 4000.0)];
    let resolver = SnapResolver::from_pins(&pins, 10_000.0, &settings).expect("resolver");
    assert_close(resolver.resolve(0.445), 0.4);
    assert_eq!(resolver.resolve(0.46), 0.46);
}
