//! Raw observation -> canonical token mapping.
//!
//! Pure functions, no clock or network access. See `conditions` for the
//! provider code table and `time` for reading the current hour.

/// Token used for a temperature bucket of exactly zero.
pub const ZERO_TEMPERATURE: &str = "zero";

/// Sentinel for an hour outside 0..=23. Callers must treat it as a failure.
pub const UNKNOWN_DAY_PART: &str = "unknown";

/// Quantize toward zero to a multiple of 5, keeping the sign.
pub fn bucket_temperature_value(raw: i32) -> i32 {
    // |i32::MIN| rounded down to a multiple of 5 still fits in i32
    let bucketed = ((raw.unsigned_abs() / 5) * 5) as i32;
    raw.signum() * bucketed
}

/// Temperature bucket rendered as a key token: `"60"`, `"-5"`, or `"zero"`.
pub fn bucket_temperature(raw: i32) -> String {
    match bucket_temperature_value(raw) {
        0 => ZERO_TEMPERATURE.to_string(),
        v => v.to_string(),
    }
}

/// Wind speed (mph) to wind token.
///
/// Negative speeds are not special-cased and fall through to `hw`.
pub fn bucket_wind(speed_mph: i32) -> &'static str {
    match speed_mph {
        0..=3 => "nw",
        4..=8 => "lw",
        _ => "hw",
    }
}

/// Hour of day (0..=23) to day-part token.
pub fn day_part(hour: u32) -> &'static str {
    match hour {
        // 5am - 6am
        4..=5 => "dawn",
        // 7am - 5pm
        6..=16 => "day",
        // 6pm - 7pm
        17..=18 => "dusk",
        19..=23 | 0..=3 => "night",
        _ => UNKNOWN_DAY_PART,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TIMES;

    #[test]
    fn test_temperature_examples() {
        assert_eq!(bucket_temperature(0), "zero");
        assert_eq!(bucket_temperature(4), "zero");
        assert_eq!(bucket_temperature(-4), "zero");
        assert_eq!(bucket_temperature(5), "5");
        assert_eq!(bucket_temperature(-5), "-5");
        assert_eq!(bucket_temperature(-7), "-5");
        assert_eq!(bucket_temperature(62), "60");
        assert_eq!(bucket_temperature(99), "95");
    }

    #[test]
    fn test_temperature_bucket_properties() {
        for t in -200..=200 {
            let b = bucket_temperature_value(t);
            assert_eq!(b % 5, 0, "{t} -> {b}");
            assert!((b - t).abs() < 5, "{t} -> {b}");
            if b != 0 {
                assert_eq!(b.signum(), t.signum(), "{t} -> {b}");
            }
        }
    }

    #[test]
    fn test_temperature_extremes_do_not_overflow() {
        assert_eq!(bucket_temperature_value(i32::MAX), 2_147_483_645);
        assert_eq!(bucket_temperature_value(i32::MIN), -2_147_483_645);
    }

    #[test]
    fn test_wind_bands() {
        assert_eq!(bucket_wind(0), "nw");
        assert_eq!(bucket_wind(3), "nw");
        assert_eq!(bucket_wind(4), "lw");
        assert_eq!(bucket_wind(8), "lw");
        assert_eq!(bucket_wind(9), "hw");
        assert_eq!(bucket_wind(100), "hw");
    }

    #[test]
    fn test_negative_wind_falls_through_to_heavy() {
        // Preserved behavior: no dedicated branch for negative speeds.
        assert_eq!(bucket_wind(-1), "hw");
        assert_eq!(bucket_wind(i32::MIN), "hw");
    }

    #[test]
    fn test_day_part_partitions_the_clock() {
        let mut counts = [0usize; 4];
        for hour in 0..24 {
            let part = day_part(hour);
            let idx = TIMES
                .iter()
                .position(|t| *t == part)
                .unwrap_or_else(|| panic!("hour {hour} mapped to {part}"));
            counts[idx] += 1;
        }
        // dawn, day, dusk, night
        assert_eq!(counts, [2, 11, 2, 9]);
        assert_eq!(counts.iter().sum::<usize>(), 24);
    }

    #[test]
    fn test_day_part_boundaries() {
        assert_eq!(day_part(3), "night");
        assert_eq!(day_part(4), "dawn");
        assert_eq!(day_part(6), "day");
        assert_eq!(day_part(16), "day");
        assert_eq!(day_part(17), "dusk");
        assert_eq!(day_part(19), "night");
        assert_eq!(day_part(24), UNKNOWN_DAY_PART);
    }
}
