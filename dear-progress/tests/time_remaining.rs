use dear_progress::*;
use std::borrow::Cow;

struct Shouting;

impl Localizer for Shouting {
    fn find(&self, token: &str) -> Option<Cow<'_, str>> {
        match token {
            "#vgui_TimeLeftSeconds" => Some(Cow::Borrowed("%s1 SECONDS")),
            "#vgui_TimeLeftSecondsRemaining" => Some(Cow::Borrowed("%s1 SECONDS LEFT")),
            _ => None,
        }
    }
}

#[test]
fn reference_sample_reads_ten_seconds() {
    let label = ProgressBar::construct_time_remaining_string(&EnglishLocalizer, 0.0, 10.0, 0.5, 10.0, false);
    assert_eq!(label.as_deref(), Some("10 seconds"));

    let label = ProgressBar::construct_time_remaining_string(&EnglishLocalizer, 0.0, 10.0, 0.5, 10.0, true);
    assert_eq!(label.as_deref(), Some("10 seconds remaining"));
}

#[test]
fn stale_sample_never_exceeds_fresh_estimate() {
    let fresh = TimeRemaining::estimate(0.0, 10.0, 0.5, 10.0);
    for now in [10.5_f32, 12.0, 15.0, 30.0] {
        let stale = TimeRemaining::estimate(0.0, now, 0.5, 10.0);
        assert!(stale.total_seconds() <= fresh.total_seconds(), "now={now}: {stale:?}");
        assert!(stale.total_seconds() >= fresh.total_seconds() - 1, "now={now}: {stale:?}");
    }
}

#[test]
fn offset_start_time_is_respected() {
    // 30s elapsed since t=100 at 75% => 40s total, 10s left
    let t = TimeRemaining::estimate(100.0, 130.0, 0.75, 130.0);
    assert_eq!(t, TimeRemaining { minutes: 0, seconds: 10 });
}

#[test]
fn long_tasks_report_minutes() {
    let label = construct_time_remaining_string(&EnglishLocalizer, 0.0, 60.0, 0.25, 60.0, false);
    assert_eq!(label.as_deref(), Some("3 minutes 0 seconds"));

    // 61s elapsed at 50% => 61s left
    let label = construct_time_remaining_string(&EnglishLocalizer, 0.0, 61.0, 0.5, 61.0, false);
    assert_eq!(label.as_deref(), Some("1 minute 1 second"));
}

#[test]
fn done_reports_nothing() {
    assert_eq!(
        construct_time_remaining_string(&EnglishLocalizer, 5.0, 25.0, 1.0, 25.0, false),
        None
    );
}

#[test]
fn custom_localizer_wins_with_english_fallback() {
    assert_eq!(
        construct_time_remaining_string(&Shouting, 0.0, 10.0, 0.5, 10.0, true).as_deref(),
        Some("10 SECONDS LEFT")
    );
    // 0.5s left rounds up to the singular template, which Shouting lacks
    assert_eq!(
        construct_time_remaining_string(&Shouting, 0.0, 9.5, 0.95, 9.5, false).as_deref(),
        Some("1 second")
    );
}
