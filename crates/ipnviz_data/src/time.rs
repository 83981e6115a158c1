//! Human readable simulation time.

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = NANOSECOND * 1_000;
const MILLISECOND: u64 = MICROSECOND * 1_000;
const SECOND: u64 = MILLISECOND * 1_000;
const MINUTE: u64 = SECOND * 60;
const HOUR: u64 = MINUTE * 60;
const DAY: u64 = HOUR * 24;

const UNITS: [(&str, u64); 7] = [
    ("d", DAY),
    ("h", HOUR),
    ("m", MINUTE),
    ("s", SECOND),
    ("ms", MILLISECOND),
    ("µs", MICROSECOND),
    ("ns", NANOSECOND),
];

/// Formats nanoseconds as `"1d 2h 3m"`, largest unit first, skipping zero
/// units. `limit` keeps only the first `limit` non-zero units.
pub fn format_time(time: u64, limit: Option<usize>) -> String {
    if time == 0 {
        return "0".to_string();
    }

    let mut remaining = time;
    let parts = UNITS.iter().filter_map(|(suffix, length)| {
        let count = remaining / length;
        remaining %= length;
        (count > 0).then(|| format!("{count}{suffix}"))
    });

    match limit {
        Some(limit) => parts.take(limit).collect::<Vec<_>>().join(" "),
        None => parts.collect::<Vec<_>>().join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_time(0, None), "0");
    }

    #[test]
    fn test_mixed_units() {
        let time = DAY + 2 * HOUR + 3 * MINUTE + 4 * MILLISECOND;
        assert_eq!(format_time(time, None), "1d 2h 3m 4ms");
        assert_eq!(format_time(time, Some(2)), "1d 2h");
    }

    #[test]
    fn test_sub_second() {
        assert_eq!(format_time(1_500, None), "1µs 500ns");
    }
}
