//! Denominations of value, in base units.

pub const NANO_RINK: u64 = 1;
pub const MICRO_RINK: u64 = 1000 * NANO_RINK;
pub const SCHMECKLE: u64 = 49 * MICRO_RINK + 463 * NANO_RINK;
pub const MILLI_RINK: u64 = 1000 * MICRO_RINK;
pub const RINK: u64 = 1000 * MILLI_RINK;
pub const KILO_RINK: u64 = 1000 * RINK;
pub const MEGA_RINK: u64 = 1000 * KILO_RINK;

/// Named denominations in declaration order
pub const DENOMINATIONS: [(&str, u64); 7] = [
    ("NanoRink", NANO_RINK),
    ("MicroRink", MICRO_RINK),
    ("Schmeckle", SCHMECKLE),
    ("MilliRink", MILLI_RINK),
    ("Rink", RINK),
    ("KiloRink", KILO_RINK),
    ("MegaRink", MEGA_RINK),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denomination_values() {
        assert_eq!(NANO_RINK, 1);
        assert_eq!(MICRO_RINK, 1_000);
        assert_eq!(MILLI_RINK, 1_000_000);
        assert_eq!(RINK, 1_000_000_000);
        assert_eq!(KILO_RINK, 1_000_000_000_000);
        assert_eq!(MEGA_RINK, 1_000_000_000_000_000);
        assert_eq!(SCHMECKLE, 49_463);
    }

    #[test]
    fn test_largest_denomination_fits_with_headroom() {
        assert_eq!(Some(MEGA_RINK), 1000u64.checked_pow(5));
        assert!(MEGA_RINK.checked_mul(1000).is_some());
    }

    #[test]
    fn test_denominations_table_matches_constants() {
        let values: Vec<u64> = DENOMINATIONS.iter().map(|&(_, v)| v).collect();
        assert_eq!(
            values,
            vec![NANO_RINK, MICRO_RINK, SCHMECKLE, MILLI_RINK, RINK, KILO_RINK, MEGA_RINK]
        );
    }
}
