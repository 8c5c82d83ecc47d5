use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Progress ring
// =============================================================

#[test]
fn ring_radius_leaves_room_for_stroke() {
    let ring = ring_geometry(50.0, 80.0, 8.0);
    assert_eq!(ring.center, 40.0);
    assert_eq!(ring.radius, 36.0);
    assert!(close(ring.circumference, 72.0 * std::f64::consts::PI));
}

#[test]
fn dash_offset_tracks_progress() {
    let empty = ring_geometry(0.0, 80.0, 8.0);
    let half = ring_geometry(50.0, 80.0, 8.0);
    let full = ring_geometry(100.0, 80.0, 8.0);
    assert!(close(empty.dash_offset, empty.circumference));
    assert!(close(half.dash_offset, half.circumference / 2.0));
    assert!(close(full.dash_offset, 0.0));
}

#[test]
fn progress_outside_range_is_clamped() {
    assert!(close(ring_geometry(140.0, 80.0, 8.0).dash_offset, 0.0));
    let ring = ring_geometry(-5.0, 80.0, 8.0);
    assert!(close(ring.dash_offset, ring.circumference));
    let nan = ring_geometry(f64::NAN, 80.0, 8.0);
    assert!(close(nan.dash_offset, nan.circumference));
}

// =============================================================
// Bars
// =============================================================

#[test]
fn percent_bars_scale_to_max_height() {
    assert_eq!(percent_bar_px(100.0), BAR_MAX_PX);
    assert_eq!(percent_bar_px(50.0), BAR_MAX_PX / 2.0);
    assert_eq!(percent_bar_px(250.0), BAR_MAX_PX);
}

#[test]
fn relative_bars_scale_against_series_max() {
    assert_eq!(relative_bar_px(18.0, 18.0), BAR_MAX_PX);
    assert_eq!(relative_bar_px(9.0, 18.0), BAR_MAX_PX / 2.0);
    assert_eq!(relative_bar_px(5.0, 0.0), 0.0);
}
