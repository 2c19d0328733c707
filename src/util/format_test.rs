use super::*;

// =============================================================
// format_distance
// =============================================================

#[test]
fn sub_kilometer_distances_render_as_meters() {
    assert_eq!(format_distance(0.5), "500m");
    assert_eq!(format_distance(0.0), "0m");
    assert_eq!(format_distance(0.1234), "123m");
}

#[test]
fn meters_round_to_nearest_whole() {
    assert_eq!(format_distance(0.2346), "235m");
    assert_eq!(format_distance(0.9996), "1000m");
}

#[test]
fn kilometer_distances_render_with_one_decimal() {
    assert_eq!(format_distance(1.0), "1.0km");
    assert_eq!(format_distance(2.34), "2.3km");
    assert_eq!(format_distance(12.0), "12.0km");
}

#[test]
fn kilometer_ties_round_up() {
    assert_eq!(format_distance(1.25), "1.3km");
}

#[test]
fn negative_zero_renders_as_zero_meters() {
    assert_eq!(format_distance(-0.0), "0m");
    assert_eq!(format_distance(-0.0001), "0m");
}

// =============================================================
// format_rating
// =============================================================

#[test]
fn missing_or_zero_rating_has_placeholder() {
    assert_eq!(format_rating(None), NO_RATING);
    assert_eq!(format_rating(Some(0.0)), NO_RATING);
    assert_eq!(format_rating(Some(f64::NAN)), NO_RATING);
}

#[test]
fn fractional_rating_gets_half_star() {
    assert_eq!(format_rating(Some(3.7)), "★★★⯨☆ 3.7");
    assert_eq!(format_rating(Some(4.5)), "★★★★⯨ 4.5");
}

#[test]
fn rating_ties_round_up() {
    assert_eq!(format_rating(Some(4.25)), "★★★★☆ 4.3");
    assert_eq!(format_rating(Some(3.75)), "★★★⯨☆ 3.8");
}

#[test]
fn low_fraction_rounds_down_to_empty_star() {
    assert_eq!(format_rating(Some(3.2)), "★★★☆☆ 3.2");
}

#[test]
fn perfect_rating_has_no_empty_stars() {
    assert_eq!(format_rating(Some(5.0)), "★★★★★ 5.0");
}

#[test]
fn out_of_range_ratings_are_clamped() {
    assert_eq!(format_rating(Some(7.2)), "★★★★★ 5.0");
    assert_eq!(format_rating(Some(-1.0)), "☆☆☆☆☆ 0.0");
}

#[test]
fn star_counts_always_fill_five_positions() {
    for tenths in 0..=60 {
        let counts = StarCounts::from_rating(f64::from(tenths) / 10.0);
        assert_eq!(counts.full + u8::from(counts.half) + counts.empty, MAX_STARS);
    }
}

#[test]
fn star_counts_split_rating() {
    assert_eq!(
        StarCounts::from_rating(2.5),
        StarCounts { full: 2, half: true, empty: 2 }
    );
    assert_eq!(StarCounts::from_rating(2.5).glyphs(), "★★⯨☆☆");
}
