//! Common fixtures for NEXRAD search tests.

/// Station coordinates as `(id, latitude, longitude, elevation_m)`.
pub mod stations {
    pub const KIND: (&str, f64, f64, f64) = ("KIND", 39.7074962, -86.2803675, 239.935531616);
    pub const KLOT: (&str, f64, f64, f64) = ("KLOT", 41.6044264, -88.084361, 201.561080933);
    pub const KIWX: (&str, f64, f64, f64) = ("KIWX", 41.3586356, -85.7000488, 291.789398193);
}

/// Domains as `(max_lat, max_lon, min_lat, min_lon)`.
pub mod domains {
    /// Small box around Indianapolis that encloses KIND.
    pub const AROUND_KIND: (f64, f64, f64, f64) = (40.0, -86.0, 39.5, -86.5);

    /// Gulf of Guinea, far from every station.
    pub const NULL_ISLAND: (f64, f64, f64, f64) = (0.1, 0.1, 0.0, 0.0);

    /// Central Indiana, wide enough to pull in neighbouring radars.
    pub const INDIANA: (f64, f64, f64, f64) = (41.0, -85.0, 39.0, -87.5);
}

/// Archive keys for KIND on 2015-05-05, bracketing 05:00-06:00 UTC.
pub mod keys {
    pub const KIND_DAY_PREFIX: &str = "2015/05/05/KIND";

    /// Exactly at the window start.
    pub const AT_START: &str = "2015/05/05/KIND/KIND20150505_050000_V06.gz";
    pub const BEFORE_START: &str = "2015/05/05/KIND/KIND20150505_045512_V06.gz";
    pub const INSIDE_EARLY: &str = "2015/05/05/KIND/KIND20150505_050412_V06.gz";
    pub const INSIDE_LATE: &str = "2015/05/05/KIND/KIND20150505_055648_V06.gz";
    /// Exactly at the window end.
    pub const AT_END: &str = "2015/05/05/KIND/KIND20150505_060000_V06.gz";
    pub const AFTER_END: &str = "2015/05/05/KIND/KIND20150505_060333_V06.gz";
    /// Metadata sidecar, not a volume scan.
    pub const MDM: &str = "2015/05/05/KIND/KIND20150505_050412_V06_MDM";

    /// Every key listed under [`KIND_DAY_PREFIX`].
    pub fn kind_day() -> Vec<String> {
        [
            BEFORE_START,
            AT_START,
            INSIDE_EARLY,
            MDM,
            INSIDE_LATE,
            AT_END,
            AFTER_END,
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// Keys the window 05:00-06:00 should keep, in listing order.
    pub fn kind_window_expected() -> Vec<String> {
        vec![INSIDE_EARLY.to_string(), INSIDE_LATE.to_string()]
    }
}
