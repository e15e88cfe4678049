use super::*;
use crate::test_support::{DAY, HOUR, base_midnight, sample_daily, sample_hourly, sample_snapshot};

fn hourly_points(points: &[ForecastListPoint]) -> Vec<HourlyListPoint> {
    points
        .iter()
        .map(|point| match point {
            ForecastListPoint::Hourly(hour) => *hour,
            ForecastListPoint::Daily(_) => panic!("expected hourly point"),
        })
        .collect()
}

#[test]
fn repeated_calls_with_same_inputs_are_identical() {
    let snapshot = sample_snapshot(168, 7);
    let now = base_midnight() + 10 * HOUR + 1_234;

    for kind in [SeriesKind::Hourly, SeriesKind::Daily] {
        assert_eq!(
            build_forecast(&snapshot, kind, now),
            build_forecast(&snapshot, kind, now)
        );
    }
}

#[test]
fn empty_hourly_block_yields_empty_and_zeroed_outputs() {
    let mut snapshot = sample_snapshot(0, 7);
    snapshot.hourly = sample_hourly(base_midnight(), 0);
    let now = base_midnight();

    for kind in [SeriesKind::Hourly, SeriesKind::Daily] {
        let output = build_forecast(&snapshot, kind, now);
        assert!(output.chart_series.is_empty());
        assert_eq!(output.temperature_metrics, TemperatureMetrics::default());
    }
    assert!(build_list_points(&snapshot, SeriesKind::Hourly, now).is_empty());
}

#[test]
fn empty_daily_block_yields_empty_chart_and_lists() {
    let mut snapshot = sample_snapshot(48, 0);
    snapshot.daily = sample_daily(base_midnight(), 0);
    let now = base_midnight();

    assert!(build_chart_series(&snapshot, SeriesKind::Hourly, now).is_empty());
    assert!(build_chart_series(&snapshot, SeriesKind::Daily, now).is_empty());
    assert!(build_list_points(&snapshot, SeriesKind::Hourly, now).is_empty());
    assert!(build_list_points(&snapshot, SeriesKind::Daily, now).is_empty());
}

#[test]
fn hourly_chart_starts_at_first_sample_not_before_now() {
    let snapshot = sample_snapshot(168, 7);
    let now = base_midnight() + 10 * HOUR + 30 * 60;

    let series = build_chart_series(&snapshot, SeriesKind::Hourly, now);
    assert_eq!(series.len(), HOURLY_CHART_POINTS);
    assert_eq!(series[0].time, base_midnight() + 11 * HOUR);
    assert_eq!(series[0].temperature, snapshot.hourly.temperature_at(11));
    assert_eq!(series[0].rain, snapshot.hourly.precipitation_probability_at(11));
    assert_eq!(series[0].wind, snapshot.hourly.wind_speed_at(11));
}

#[test]
fn hourly_chart_includes_sample_exactly_at_now() {
    let snapshot = sample_snapshot(48, 2);
    let now = base_midnight() + 5 * HOUR;

    let series = build_chart_series(&snapshot, SeriesKind::Hourly, now);
    assert_eq!(series[0].time, now);
}

#[test]
fn daily_chart_starts_at_first_day_even_when_it_is_in_the_past() {
    let snapshot = sample_snapshot(168, 7);
    let now = base_midnight() + 15 * HOUR;

    let series = build_chart_series(&snapshot, SeriesKind::Daily, now);
    assert_eq!(series.len(), DAILY_CHART_POINTS);
    assert_eq!(series[0].time, base_midnight());
    assert_eq!(
        series.last().map(|point| point.time),
        Some(base_midnight() + 119 * HOUR)
    );
}

#[test]
fn chart_slice_is_clipped_to_remaining_samples() {
    let snapshot = sample_snapshot(100, 5);

    let daily = build_chart_series(&snapshot, SeriesKind::Daily, base_midnight());
    assert_eq!(daily.len(), 100);

    let hourly = build_chart_series(&snapshot, SeriesKind::Hourly, base_midnight() + 90 * HOUR);
    assert_eq!(hourly.len(), 10);
}

#[test]
fn chart_series_is_ascending() {
    let snapshot = sample_snapshot(168, 7);
    let series = build_chart_series(&snapshot, SeriesKind::Daily, base_midnight());
    assert!(series.windows(2).all(|pair| pair[0].time < pair[1].time));
}

#[test]
fn now_after_all_samples_yields_empty_outputs() {
    let snapshot = sample_snapshot(48, 2);
    let now = base_midnight() + 48 * HOUR;

    assert!(build_chart_series(&snapshot, SeriesKind::Hourly, now).is_empty());
    assert!(build_list_points(&snapshot, SeriesKind::Hourly, now).is_empty());
}

#[test]
fn chart_copies_missing_values_verbatim() {
    let mut snapshot = sample_snapshot(48, 2);
    snapshot.hourly.temperature[1] = None;
    snapshot.hourly.wind_speed[2] = None;

    let series = build_chart_series(&snapshot, SeriesKind::Daily, base_midnight());
    assert_eq!(series[1].temperature, None);
    assert_eq!(series[2].wind, None);
    assert!(series[2].temperature.is_some());
}

fn series_with_temperatures(values: &[f64]) -> Vec<ChartSeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| ChartSeriesPoint {
            time: idx as i64 * HOUR,
            temperature: Some(value),
            rain: None,
            wind: None,
        })
        .collect()
}

#[test]
fn metrics_pad_domain_by_a_fifth_of_the_range() {
    let metrics = build_temperature_metrics(&series_with_temperatures(&[10.0, 20.0]));
    assert_eq!(metrics.domain, [8, 22]);
    assert_eq!(metrics.ticks, vec![10, 20]);
    assert_eq!(metrics.min, 10);
    assert_eq!(metrics.max, 20);
}

#[test]
fn metrics_floor_and_ceil_padded_bounds() {
    let metrics = build_temperature_metrics(&series_with_temperatures(&[-3.4, 7.6, 2.0]));
    // padding = 11.0 * 0.2 = 2.2
    assert_eq!(metrics.domain, [-6, 10]);
    assert_eq!(metrics.ticks, vec![-3, 8]);
}

#[test]
fn flat_series_uses_fixed_padding() {
    let metrics = build_temperature_metrics(&series_with_temperatures(&[12.0, 12.0, 12.0]));
    assert_eq!(metrics.domain, [7, 17]);
    assert_eq!(metrics.ticks, vec![12, 12]);
}

#[test]
fn empty_series_metrics_are_degenerate_but_defined() {
    let metrics = build_temperature_metrics(&[]);
    assert_eq!(metrics.domain, [0, 0]);
    assert_eq!(metrics.min, 0);
    assert_eq!(metrics.max, 0);
    assert_eq!(metrics.ticks, vec![0]);
}

#[test]
fn metrics_skip_missing_temperatures() {
    let mut series = series_with_temperatures(&[10.0, 20.0]);
    series.push(ChartSeriesPoint {
        time: 99,
        temperature: None,
        rain: Some(40.0),
        wind: None,
    });
    assert_eq!(build_temperature_metrics(&series).domain, [8, 22]);

    let all_missing = vec![ChartSeriesPoint {
        time: 0,
        temperature: None,
        rain: None,
        wind: None,
    }];
    assert_eq!(
        build_temperature_metrics(&all_missing),
        TemperatureMetrics::default()
    );
}

#[test]
fn daily_list_takes_first_five_days_verbatim() {
    let snapshot = sample_snapshot(168, 7);
    let points = build_list_points(&snapshot, SeriesKind::Daily, base_midnight() + 20 * DAY);

    assert_eq!(points.len(), DAILY_LIST_POINTS);
    let ForecastListPoint::Daily(third) = points[2] else {
        panic!("expected daily point");
    };
    assert_eq!(third.time, base_midnight() + 2 * DAY);
    assert_eq!(third.temperature_max, Some(10.0));
    assert_eq!(third.temperature_min, Some(2.0));
    assert_eq!(third.weather_code, Some(3));
}

#[test]
fn daily_list_is_shorter_when_snapshot_has_fewer_days() {
    let snapshot = sample_snapshot(72, 3);
    assert_eq!(build_daily_list(&snapshot).len(), 3);
}

#[test]
fn hourly_list_starts_at_next_full_hour() {
    let snapshot = sample_snapshot(72, 3);
    let now = base_midnight() + 4 * HOUR + 10;

    let points = build_hourly_list(&snapshot, now);
    assert_eq!(points[0].time, base_midnight() + 5 * HOUR);
    assert_eq!(points.len(), HOURLY_LIST_POINTS);
}

#[test]
fn hourly_list_recomputes_day_night_from_sun_times() {
    // Every upstream is_day flag in the fixture is `true`.
    let snapshot = sample_snapshot(48, 2);
    let points = build_hourly_list(&snapshot, base_midnight() - 1);

    let flags = points
        .iter()
        .map(|point| ((point.time - base_midnight()) / HOUR, point.is_day))
        .collect::<Vec<_>>();
    assert_eq!(
        flags,
        vec![
            (0, false),
            (3, false),
            (6, false),
            (9, true),
            (12, true),
            (15, true),
            (18, false),
            (21, false),
        ]
    );
}

#[test]
fn daylight_window_is_half_open() {
    let sunrise = base_midnight() + 7 * HOUR;
    let sunset = sunrise + 10 * HOUR;

    assert!(is_daylight(sunrise + 2 * HOUR, sunrise, sunset));
    assert!(is_daylight(sunrise, sunrise, sunset));
    assert!(!is_daylight(sunrise - 1, sunrise, sunset));
    assert!(!is_daylight(sunset, sunrise, sunset));
    assert!(!is_daylight(sunrise + 11 * HOUR, sunrise, sunset));
}

#[test]
fn point_missing_weather_code_is_dropped_and_order_kept() {
    let mut snapshot = sample_snapshot(48, 2);
    snapshot.hourly.weather_code[9] = None;

    let points = build_hourly_list(&snapshot, base_midnight() - 1);
    assert_eq!(points.len(), HOURLY_LIST_POINTS - 1);
    assert!(points.iter().all(|point| point.time != base_midnight() + 9 * HOUR));
    assert!(points.windows(2).all(|pair| pair[0].time < pair[1].time));
}

#[test]
fn point_missing_sun_times_is_dropped() {
    let mut snapshot = sample_snapshot(48, 2);
    snapshot.daily.sunset[1] = None;

    let points = build_hourly_list(&snapshot, base_midnight() + 11 * HOUR);
    // Start is 12:00; 00:00 and later on day two have no sunset.
    assert!(points.iter().all(|point| point.time < base_midnight() + DAY));
    assert_eq!(points.len(), 4);
}

#[test]
fn hours_before_first_day_are_dropped() {
    let base = base_midnight();
    let mut snapshot = sample_snapshot(0, 2);
    snapshot.hourly = sample_hourly(base - 6 * HOUR, 48);

    let points = build_hourly_list(&snapshot, base - 7 * HOUR);
    assert_eq!(points[0].time, base);
    assert_eq!(points.len(), 6);
}

#[test]
fn stride_truncates_at_end_of_hourly_coverage() {
    let snapshot = sample_snapshot(18, 1);

    let points = build_hourly_list(&snapshot, base_midnight() - 1);
    let offsets = points
        .iter()
        .map(|point| (point.time - base_midnight()) / HOUR)
        .collect::<Vec<_>>();
    assert_eq!(offsets, vec![0, 3, 6, 9, 12, 15]);
}

#[test]
fn list_points_wrap_hourly_variant() {
    let snapshot = sample_snapshot(48, 2);
    let points = build_list_points(&snapshot, SeriesKind::Hourly, base_midnight() - 1);
    let hours = hourly_points(&points);
    assert_eq!(hours.len(), HOURLY_LIST_POINTS);
    assert_eq!(hours[1].temperature, 6.5);
    assert_eq!(hours[1].weather_code, 61);
    assert_eq!(points[1].time(), base_midnight() + 3 * HOUR);
}

#[test]
fn next_hour_alignment_always_advances() {
    let hour = base_midnight() + 5 * HOUR;
    assert_eq!(align_to_next_hour(hour, 0), hour + HOUR);
    assert_eq!(align_to_next_hour(hour + 1, 0), hour + HOUR);
    assert_eq!(align_to_next_hour(hour + HOUR - 1, 0), hour + HOUR);
    assert_eq!(align_to_next_hour(hour, -7200), hour + HOUR);
}

#[test]
fn half_hour_offsets_align_to_the_local_hour() {
    const KOLKATA: i32 = 19_800;
    let half = HOUR / 2;
    let hour = base_midnight() + 5 * HOUR;
    // 10:40 local is 05:10 UTC; the next local hour is 11:00, i.e. 05:30 UTC.
    assert_eq!(align_to_next_hour(hour + 600, KOLKATA), hour + half);
    assert_eq!(align_to_next_hour(hour + half, KOLKATA), hour + HOUR + half);
}

#[test]
fn hourly_list_starts_at_next_local_hour_in_kolkata() {
    const KOLKATA: i32 = 19_800;
    let local_midnight = base_midnight() - i64::from(KOLKATA);
    let mut snapshot = sample_snapshot(0, 0);
    snapshot.utc_offset_seconds = KOLKATA;
    snapshot.hourly = sample_hourly(local_midnight, 48);
    snapshot.daily = sample_daily(local_midnight, 2);

    let now = local_midnight + 10 * HOUR + 40 * 60;
    let points = build_hourly_list(&snapshot, now);
    assert_eq!(points.first().map(|p| p.time), Some(local_midnight + 11 * HOUR));
    assert_eq!(points.get(1).map(|p| p.time), Some(local_midnight + 14 * HOUR));
}

#[test]
fn containing_day_picks_last_day_started() {
    let days = [0, DAY, 2 * DAY];
    assert_eq!(containing_day(&days, -1), None);
    assert_eq!(containing_day(&days, 0), Some(0));
    assert_eq!(containing_day(&days, DAY - 1), Some(0));
    assert_eq!(containing_day(&days, DAY), Some(1));
    assert_eq!(containing_day(&days, 10 * DAY), Some(2));
}

#[test]
fn hourly_ticks_every_sixth_point() {
    let snapshot = sample_snapshot(48, 2);
    let series = build_chart_series(&snapshot, SeriesKind::Hourly, base_midnight());

    let ticks = chart_time_ticks(&series, &snapshot, SeriesKind::Hourly);
    let base = base_midnight();
    assert_eq!(ticks, vec![base, base + 6 * HOUR, base + 12 * HOUR, base + 18 * HOUR]);
}

#[test]
fn daily_ticks_are_interior_day_starts() {
    let snapshot = sample_snapshot(120, 5);
    let series = build_chart_series(&snapshot, SeriesKind::Daily, base_midnight());

    let ticks = chart_time_ticks(&series, &snapshot, SeriesKind::Daily);
    let base = base_midnight();
    assert_eq!(ticks, vec![base + DAY, base + 2 * DAY, base + 3 * DAY]);
    assert!(chart_time_ticks(&[], &snapshot, SeriesKind::Daily).is_empty());
}

#[test]
fn midnight_markers_stay_inside_series_range() {
    let snapshot = sample_snapshot(168, 7);
    let series = build_chart_series(&snapshot, SeriesKind::Hourly, base_midnight() + 12 * HOUR);

    assert_eq!(
        midnight_markers(&series, &snapshot),
        vec![base_midnight() + DAY]
    );
    assert!(midnight_markers(&[], &snapshot).is_empty());
}

#[test]
fn secondary_axes_bound_rain_and_wind() {
    let snapshot = sample_snapshot(48, 2);
    let series = build_chart_series(&snapshot, SeriesKind::Hourly, base_midnight());

    assert_eq!(rain_axis_bounds(), [0.0, 105.0]);
    assert_eq!(wind_axis_bounds(&series), [0.0, 26.0]);
    assert_eq!(wind_axis_bounds(&[]), [0.0, 10.0]);
}

#[test]
fn temperature_layer_cannot_be_hidden() {
    let mut layers = DisplayLayers::default();
    layers.toggle(ChartLayer::Temperature);
    layers.toggle(ChartLayer::Wind);

    assert!(layers.contains(ChartLayer::Temperature));
    assert_eq!(layers.active(), vec![ChartLayer::Temperature, ChartLayer::Wind]);

    layers.toggle(ChartLayer::Wind);
    assert_eq!(layers.active(), vec![ChartLayer::Temperature]);
}
