//! Time-remaining label
//!
//! Estimates how long a task still needs by linearly extrapolating elapsed
//! time against progress, then renders the result with one of six singular or
//! plural templates, optionally in their `Remaining` variant.
//!
//! All arithmetic is done in `f32` and truncated towards zero, so results match
//! hosts that compute the same label natively.

use crate::localize::{Localizer, construct_string, find_or_builtin};

/// Minutes and seconds left on a task.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeRemaining {
    pub minutes: i32,
    pub seconds: i32,
}

impl TimeRemaining {
    /// Estimates the time left.
    ///
    /// `current_progress` is the progress reported at `last_progress_update_time`.
    /// When that sample is older than `current_time` the estimate is
    /// re-extrapolated to `current_time`. A non-zero estimate never reports
    /// less than one second.
    ///
    /// Callers must pass `current_progress > 0` and
    /// `last_progress_update_time <= current_time`; both are only checked in
    /// debug builds.
    pub fn estimate(
        start_time: f32,
        current_time: f32,
        current_progress: f32,
        last_progress_update_time: f32,
    ) -> Self {
        debug_assert!(current_progress > 0.0, "time estimate needs progress > 0");
        debug_assert!(last_progress_update_time <= current_time);

        let time_elapsed = last_progress_update_time - start_time;
        let total_time = time_elapsed / current_progress;

        let mut seconds = (total_time - time_elapsed) as i32;
        if last_progress_update_time < current_time {
            // stale sample, extrapolate to now
            let progress_rate = current_progress / time_elapsed;
            let extrapolated_progress = progress_rate * (current_time - start_time);
            let extrapolated_total_time = (current_time - start_time) / extrapolated_progress;
            seconds = (extrapolated_total_time - time_elapsed) as i32;
        }

        if seconds == 0 && (total_time - time_elapsed) > 0.0 {
            seconds = 1;
        }

        let mut minutes = 0;
        if seconds >= 60 {
            minutes = seconds / 60;
            seconds %= 60;
        }

        Self { minutes, seconds }
    }

    /// Whole seconds left.
    pub fn total_seconds(&self) -> i64 {
        i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }

    /// Template token for this value, `None` when nothing is left to show.
    pub fn token(&self, add_remaining_suffix: bool) -> Option<String> {
        let base = if self.minutes > 0 {
            match (self.minutes == 1, self.seconds == 1) {
                (true, true) => "#vgui_TimeLeftMinuteSecond",
                (true, false) => "#vgui_TimeLeftMinuteSeconds",
                (false, true) => "#vgui_TimeLeftMinutesSecond",
                (false, false) => "#vgui_TimeLeftMinutesSeconds",
            }
        } else if self.seconds > 0 {
            if self.seconds == 1 {
                "#vgui_TimeLeftSecond"
            } else {
                "#vgui_TimeLeftSeconds"
            }
        } else {
            return None;
        };

        let mut token = base.to_owned();
        if add_remaining_suffix {
            token.push_str("Remaining");
        }
        Some(token)
    }

    /// Renders the label through `localizer`.
    pub fn format(&self, localizer: &dyn Localizer, add_remaining_suffix: bool) -> Option<String> {
        let token = self.token(add_remaining_suffix)?;
        let template = find_or_builtin(localizer, &token)?;

        let minutes = self.minutes.to_string();
        let seconds = self.seconds.to_string();
        let text = if self.minutes > 0 {
            construct_string(&template, &[&minutes, &seconds])
        } else {
            construct_string(&template, &[&seconds])
        };
        Some(text)
    }
}

/// Builds a localized "time remaining" label such as `3 minutes 12 seconds`.
///
/// Returns `None` when the estimate has no whole minute or second left.
/// See [`TimeRemaining::estimate`] for the input contract.
pub fn construct_time_remaining_string(
    localizer: &dyn Localizer,
    start_time: f32,
    current_time: f32,
    current_progress: f32,
    last_progress_update_time: f32,
    add_remaining_suffix: bool,
) -> Option<String> {
    TimeRemaining::estimate(
        start_time,
        current_time,
        current_progress,
        last_progress_update_time,
    )
    .format(localizer, add_remaining_suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localize::EnglishLocalizer;

    #[test]
    fn fresh_sample_does_not_extrapolate() {
        let t = TimeRemaining::estimate(0.0, 10.0, 0.5, 10.0);
        assert_eq!(t, TimeRemaining { minutes: 0, seconds: 10 });
        assert_eq!(
            construct_time_remaining_string(&EnglishLocalizer, 0.0, 10.0, 0.5, 10.0, false).as_deref(),
            Some("10 seconds")
        );
    }

    #[test]
    fn minutes_split_off_whole_sixties() {
        // elapsed 64s at 25% => 256s total, 192s left
        let t = TimeRemaining::estimate(0.0, 64.0, 0.25, 64.0);
        assert_eq!(t, TimeRemaining { minutes: 3, seconds: 12 });
        assert_eq!(t.total_seconds(), 192);
    }

    #[test]
    fn sub_second_remainder_reports_one_second() {
        // 0.5s left
        let t = TimeRemaining::estimate(0.0, 9.5, 0.95, 9.5);
        assert_eq!(t, TimeRemaining { minutes: 0, seconds: 1 });
    }

    #[test]
    fn finished_task_yields_no_string() {
        let t = TimeRemaining::estimate(0.0, 10.0, 1.0, 10.0);
        assert_eq!(t, TimeRemaining::default());
        assert_eq!(t.token(false), None);
        assert_eq!(
            construct_time_remaining_string(&EnglishLocalizer, 0.0, 10.0, 1.0, 10.0, true),
            None
        );
    }

    #[test]
    fn template_selection_follows_grammar() {
        let cases = [
            ((1, 1), "#vgui_TimeLeftMinuteSecond"),
            ((1, 5), "#vgui_TimeLeftMinuteSeconds"),
            ((3, 1), "#vgui_TimeLeftMinutesSecond"),
            ((3, 12), "#vgui_TimeLeftMinutesSeconds"),
            ((0, 1), "#vgui_TimeLeftSecond"),
            ((0, 9), "#vgui_TimeLeftSeconds"),
        ];
        for ((minutes, seconds), token) in cases {
            let t = TimeRemaining { minutes, seconds };
            assert_eq!(t.token(false).as_deref(), Some(token));
            assert_eq!(t.token(true), Some(format!("{token}Remaining")));
        }
    }

    #[test]
    fn format_uses_both_arguments_for_minutes() {
        let t = TimeRemaining { minutes: 3, seconds: 12 };
        assert_eq!(
            t.format(&EnglishLocalizer, false).as_deref(),
            Some("3 minutes 12 seconds")
        );
        let t = TimeRemaining { minutes: 1, seconds: 1 };
        assert_eq!(
            t.format(&EnglishLocalizer, true).as_deref(),
            Some("1 minute 1 second remaining")
        );
    }
}
