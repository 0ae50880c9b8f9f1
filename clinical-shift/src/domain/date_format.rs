use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// `2025-03-07`
pub fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// `2025年3月7日` (ゼロ埋めなし)
pub fn format_date_chinese(date: NaiveDate) -> String {
    format!("{}年{}月{}日", date.year(), date.month(), date.day())
}

/// `2025-03-07 05:09` (秒は切り捨て)
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    format!(
        "{} {:02}:{:02}",
        format_date(date_time.date()),
        date_time.hour(),
        date_time.minute()
    )
}

/// 班別の開始・終了の表示用 `2025/3/7 05:09:59`
pub fn format_date_time_display(date_time: NaiveDateTime) -> String {
    format!(
        "{}/{}/{} {:02}:{:02}:{:02}",
        date_time.year(),
        date_time.month(),
        date_time.day(),
        date_time.hour(),
        date_time.minute(),
        date_time.second()
    )
}

#[cfg(test)]
mod date_format_tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    #[test]
    fn test_format_date_pads() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(date), "2025-03-07");
        assert_eq!(format_date_chinese(date), "2025年3月7日");
    }

    #[test]
    fn test_format_date_time_drops_seconds() {
        assert_eq!(format_date_time(at(2025, 3, 17, 15, 0, 21)), "2025-03-17 15:00");
        assert_eq!(format_date_time(at(2025, 12, 1, 5, 9, 59)), "2025-12-01 05:09");
    }

    #[test]
    fn test_format_date_time_display() {
        assert_eq!(format_date_time_display(at(2025, 3, 17, 7, 0, 59)), "2025/3/17 07:00:59");
    }
}
