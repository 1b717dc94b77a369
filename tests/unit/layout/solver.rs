use super::*;

fn holder(width: f64, height: f64) -> HolderBox {
    HolderBox {
        width,
        height,
        offset_top: 0.0,
    }
}

#[test]
fn height_constrained_worked_example() {
    // holder 800x400, aspect 2.0 (1600x800 source), window 1000, speed 0.2
    let layout = cover_fit(1000.0, holder(800.0, 400.0), 0.2, 2.0);
    assert_eq!(layout.image_height, 880.0); // round(1000 - 600 * 0.2)
    assert_eq!(layout.image_width, 1760.0);
    assert_eq!(layout.offset_x, -480.0);
    assert_eq!(layout.offset_base_y, 0.0);
}

#[test]
fn width_constrained_fit_centers_vertically() {
    // Tall source: aspect 0.5, the width constraint forces extra height.
    let layout = cover_fit(1000.0, holder(800.0, 400.0), 0.2, 0.5);
    assert_eq!(layout.image_width, 800.0);
    assert_eq!(layout.image_height, 1600.0); // round(800 / 0.5)
    assert_eq!(layout.offset_x, 0.0);
    assert_eq!(layout.offset_base_y, -360.0); // round((880 - 1600) / 2)
}

#[test]
fn image_height_min_spans_window_at_speed_zero() {
    assert_eq!(image_height_min(1000.0, 400.0, 0.0), 1000.0);
    assert_eq!(image_height_min(1000.0, 400.0, 1.0), 400.0);
    // Negative speed needs more headroom than the window itself.
    assert_eq!(image_height_min(1000.0, 400.0, -0.5), 1300.0);
}

#[test]
fn cover_fit_never_under_covers() {
    let aspects = [0.3, 0.75, 1.0, 1.5, 2.0, 4.0];
    let speeds = [-1.0, -0.2, 0.0, 0.2, 0.5, 1.0];
    let holders = [
        holder(320.0, 100.0),
        holder(800.0, 400.0),
        holder(1920.0, 0.0),
        holder(500.5, 260.25),
    ];

    for &aspect in &aspects {
        for &speed in &speeds {
            for &h in &holders {
                let min_height = image_height_min(768.0, h.height, speed);
                let layout = cover_fit(768.0, h, speed, aspect);
                // Within half a pixel of rounding on each derived value.
                assert!(
                    layout.image_width >= h.width - 0.5,
                    "width under-covers: aspect {aspect} speed {speed}"
                );
                assert!(
                    layout.image_height >= min_height - 0.5,
                    "height under-covers: aspect {aspect} speed {speed}"
                );
            }
        }
    }
}

#[test]
fn cover_fit_is_bit_reproducible() {
    let h = holder(500.5, 260.25);
    let first = cover_fit(768.0, h, 0.3, 1.7777777);
    let second = cover_fit(768.0, h, 0.3, 1.7777777);
    assert_eq!(first, second);
}

#[test]
fn parallax_offset_worked_example() {
    // scroll 200, holder top 0, speed 0.2, base_y 0 -> round(200 - 40)
    assert_eq!(parallax_offset_y(200.0, 0.0, 0.2, 0.0), 160.0);
}

#[test]
fn speed_one_pins_image_to_base_offset() {
    for scroll in [0.0, 123.0, 999.5] {
        assert_eq!(parallax_offset_y(scroll, 50.0, 1.0, -360.0), -360.0);
    }
}

#[test]
fn speed_zero_tracks_scroll_one_to_one() {
    for scroll in [0.0, 40.0, 1000.0] {
        assert_eq!(parallax_offset_y(scroll, 25.0, 0.0, 7.0) - 7.0, scroll - 25.0);
    }
}

#[test]
fn negative_speed_moves_against_scroll() {
    // base = 100; speed -0.5 amplifies travel beyond the scroll delta.
    assert_eq!(parallax_offset_y(100.0, 0.0, -0.5, 0.0), 150.0);
}

#[test]
fn raising_speed_moves_image_toward_scroll_lock() {
    // Distance from the locked position (offset_base_y) strictly shrinks as
    // speed approaches 1, reaching zero at the lock.
    let mut last = f64::INFINITY;
    for speed in [-0.4, 0.0, 0.2, 0.5, 0.9, 1.0] {
        let travel = parallax_offset_y(200.0, 0.0, speed, 0.0).abs();
        assert!(
            travel < last,
            "travel must strictly decrease toward speed 1 (speed {speed})"
        );
        last = travel;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn rounding_is_half_away_from_zero() {
    // min height 3, aspect 1.5 puts the fitted width on a .5 boundary:
    // image_width = round(4.5) = 5, not the 4 that round-half-even would give.
    let l = cover_fit(3.0, holder(3.0, 3.0), 0.0, 1.5);
    assert_eq!(l.image_width, 5.0);

    // offset_x = round((2 - 5) / 2) = round(-1.5) = -2, away from zero.
    let l = cover_fit(3.0, holder(2.0, 3.0), 0.0, 1.5);
    assert_eq!(l.image_width, 5.0);
    assert_eq!(l.offset_x, -2.0);
}
