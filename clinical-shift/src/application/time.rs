use chrono::{Local, NaiveDate, NaiveDateTime};

/// 現在時刻の取得元
///
/// 判定ロジックは時計を直接読まず、呼び出しごとに一度だけここから取得する
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// ローカルの壁時計
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 常に同じ時刻を返す (テスト・再現用)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// `2025-03-17T15:00:21` / `2025-03-17 15:00` などの壁時計表記を読む
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

/// `2025-03-17`
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod time_tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 17)
            .unwrap()
            .and_hms_opt(15, 0, 21)
            .unwrap();
        assert_eq!(parse_timestamp("2025-03-17T15:00:21"), Some(expected));
        assert_eq!(parse_timestamp(" 2025-03-17 15:00:21 "), Some(expected));

        let minute_only = NaiveDate::from_ymd_opt(2025, 3, 17)
            .unwrap()
            .and_hms_opt(7, 1, 0)
            .unwrap();
        assert_eq!(parse_timestamp("2025-03-17T07:01"), Some(minute_only));
        assert_eq!(parse_timestamp("2025-03-17 07:01"), Some(minute_only));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2025-02-30T10:00"), None);
        assert_eq!(parse_date("2025/03/17"), None);
        assert_eq!(parse_date("2025-03-17"), NaiveDate::from_ymd_opt(2025, 3, 17));
    }

    #[test]
    fn test_fixed_clock() {
        let t = NaiveDate::from_ymd_opt(2025, 3, 17)
            .unwrap()
            .and_hms_opt(23, 5, 0)
            .unwrap();
        assert_eq!(FixedClock(t).now(), t);
    }
}
