use chrono::{DateTime, Utc};
use glowclock_proto::config::GmtOffset;

const MILLIS_PER_SECOND: i64 = 1_000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Hour and minute readout shown on the clock face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayedTime {
    pub hours:         String,
    pub minutes:       String,
    pub colon_visible: bool,
}

impl DisplayedTime {
    /// Readout shown before the first tick.
    pub fn placeholder() -> Self {
        Self {
            hours:         "--".to_owned(),
            minutes:       "--".to_owned(),
            colon_visible: true,
        }
    }

    /// Computes the readout for `instant` shifted by `offset`.
    ///
    /// The UTC milliseconds of the instant are shifted by the offset and the
    /// hour, minute and second fields are taken from the resulting time of
    /// day. The separator is visible on even seconds.
    pub fn compute(instant: DateTime<Utc>, offset: GmtOffset) -> Self {
        let shifted = instant.timestamp_millis() + offset.millis();
        let time_of_day = shifted.rem_euclid(MILLIS_PER_DAY);

        let hours = time_of_day / MILLIS_PER_HOUR;
        let minutes = (time_of_day % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
        let seconds = (time_of_day % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;

        Self {
            hours:         format!("{hours:02}"),
            minutes:       format!("{minutes:02}"),
            colon_visible: seconds % 2 == 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.hours == "--"
    }

    /// `HH:MM` form used for the window title.
    pub fn label(&self) -> String {
        format!("{}:{}", self.hours, self.minutes)
    }
}

impl Default for DisplayedTime {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};

    use super::*;

    fn instant(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, s)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn utc_offset_yields_utc_fields() {
        let now = instant(9, 5, 0);
        let time = DisplayedTime::compute(now, GmtOffset::UTC);

        assert_eq!(time.hours, format!("{:02}", now.hour()));
        assert_eq!(time.minutes, format!("{:02}", now.minute()));
        assert_eq!(time.label(), "09:05");
    }

    #[test]
    fn positive_offset_wraps_past_midnight() {
        let time = DisplayedTime::compute(instant(22, 30, 0), GmtOffset::clamped(3));

        assert_eq!(time.hours, "01");
        assert_eq!(time.minutes, "30");
    }

    #[test]
    fn negative_offset_wraps_before_midnight() {
        let time = DisplayedTime::compute(instant(2, 45, 0), GmtOffset::clamped(-5));

        assert_eq!(time.hours, "21");
        assert_eq!(time.minutes, "45");
    }

    #[test]
    fn extreme_offsets() {
        let now = instant(12, 0, 0);

        assert_eq!(DisplayedTime::compute(now, GmtOffset::clamped(-12)).hours, "00");
        assert_eq!(DisplayedTime::compute(now, GmtOffset::clamped(14)).hours, "02");
    }

    #[test]
    fn every_offset_stays_in_range_and_padded() {
        let samples = [instant(0, 0, 0), instant(11, 59, 59), instant(23, 59, 59)];

        for now in samples {
            for offset in GmtOffset::all() {
                let time = DisplayedTime::compute(now, offset);

                assert_eq!(time.hours.len(), 2, "hours for {offset}");
                assert_eq!(time.minutes.len(), 2, "minutes for {offset}");

                let hours: u32 = time.hours.parse().expect("numeric hours");
                let minutes: u32 = time.minutes.parse().expect("numeric minutes");
                assert!(hours <= 23);
                assert!(minutes <= 59);
            }
        }
    }

    #[test]
    fn colon_blinks_with_seconds() {
        assert!(DisplayedTime::compute(instant(10, 0, 0), GmtOffset::UTC).colon_visible);
        assert!(!DisplayedTime::compute(instant(10, 0, 1), GmtOffset::UTC).colon_visible);
    }

    #[test]
    fn instants_before_epoch_are_handled() {
        let before_epoch = Utc
            .with_ymd_and_hms(1969, 12, 31, 23, 15, 0)
            .single()
            .expect("valid instant");

        let time = DisplayedTime::compute(before_epoch, GmtOffset::UTC);
        assert_eq!(time.label(), "23:15");
    }

    #[test]
    fn placeholder_is_dashes() {
        let time = DisplayedTime::default();

        assert!(time.is_placeholder());
        assert_eq!(time.label(), "--:--");
    }
}
