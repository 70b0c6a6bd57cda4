use chrono::{DateTime, Datelike, Local, Offset, TimeZone, Timelike, Weekday};

/// Full display names, indexed by days from Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One reading of the wall clock, decomposed for display. Recomputed every
/// tick; nothing carries over between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub is_dst: bool,
    pub weekday: Weekday,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub day_of_year: u32,
}

impl ClockState {
    pub fn sample() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
            is_dst: is_dst(&now),
            weekday: now.weekday(),
            year: now.year(),
            month: now.month(),
            day: now.day(),
            day_of_year: now.ordinal(),
        }
    }

    pub fn digital(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    pub fn date_line(&self) -> String {
        format!(
            "{:04}.{:02}.{:02}  DoY {:03}",
            self.year, self.month, self.day, self.day_of_year
        )
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday.num_days_from_sunday() as usize]
    }

    pub fn dst_label(&self) -> &'static str {
        if self.is_dst {
            "Daylight Saving Time"
        } else {
            "Standard Time"
        }
    }
}

// Chrono exposes no `tm_isdst`, so compare against the zone's standard
// offset, taken as the smaller of the January and July offsets so both
// hemispheres work. Zones without DST always report standard time.
fn is_dst(now: &DateTime<Local>) -> bool {
    let offset_at = |month| {
        Local
            .with_ymd_and_hms(now.year(), month, 1, 12, 0, 0)
            .single()
            .map(|dt| dt.offset().fix().local_minus_utc())
    };

    match (offset_at(1), offset_at(7)) {
        (Some(jan), Some(jul)) => now.offset().fix().local_minus_utc() > jan.min(jul),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ClockState {
        ClockState {
            hour: 3,
            minute: 0,
            second: 0,
            is_dst: false,
            weekday: Weekday::Mon,
            year: 2026,
            month: 8,
            day: 31,
            day_of_year: 243,
        }
    }

    #[test]
    fn digital_readout_is_zero_padded() {
        assert_eq!(state().digital(), "03:00:00");

        let late = ClockState {
            hour: 23,
            minute: 59,
            second: 7,
            ..state()
        };
        assert_eq!(late.digital(), "23:59:07");
    }

    #[test]
    fn date_line_pads_day_of_year() {
        assert_eq!(state().date_line(), "2026.08.31  DoY 243");

        let january = ClockState {
            month: 1,
            day: 2,
            day_of_year: 2,
            ..state()
        };
        assert_eq!(january.date_line(), "2026.01.02  DoY 002");
    }

    #[test]
    fn weekday_table_starts_on_sunday() {
        assert_eq!(WEEKDAY_NAMES[0], "Sunday");
        assert_eq!(WEEKDAY_NAMES[6], "Saturday");

        assert_eq!(state().weekday_name(), "Monday");

        let sunday = ClockState {
            weekday: Weekday::Sun,
            ..state()
        };
        assert_eq!(sunday.weekday_name(), "Sunday");
    }

    #[test]
    fn dst_label_follows_flag() {
        assert_eq!(state().dst_label(), "Standard Time");

        let summer = ClockState {
            is_dst: true,
            ..state()
        };
        assert_eq!(summer.dst_label(), "Daylight Saving Time");
    }

    #[test]
    fn sampled_fields_are_in_range() {
        let now = ClockState::sample();
        assert!(now.hour < 24);
        assert!(now.minute < 60);
        assert!(now.second < 60);
        assert!((1..=366).contains(&now.day_of_year));
    }
}
