//! Enumerate archive keys for stations over a time range.
//!
//! The archive is partitioned as `YYYY/MM/DD/STATION/`, with one object per
//! volume scan named `STATIONYYYYMMDD_HHMMSS_V06.gz`. Enumeration lists one
//! partition per station and day, and trims the first and last day to the
//! requested window using the timestamp embedded in the key.

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::{debug, info, warn};

use nexrad_common::TimeRange;
use storage::ArchiveStore;

use crate::stations::is_known_station;

/// 2013-08-01T00:00:00Z, when the dual-polarization upgrade was complete.
pub const DATASET_START_TIMESTAMP: i64 = 1_375_315_200;

/// Byte range of the `YYYYMMDD_HHMMSS` timestamp inside a full key.
pub const KEY_TIMESTAMP_RANGE: std::ops::Range<usize> = 20..35;

const KEY_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Earliest time the archive is searched from.
pub fn dataset_start() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(DATASET_START_TIMESTAMP)
}

/// Clamp `[start, end)` to the archive: not before [`dataset_start`],
/// not after `now`.
pub fn clamp_range(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> TimeRange {
    let mut range = TimeRange::new(start, end);

    let dataset_start = dataset_start();
    if range.start < dataset_start {
        info!(
            requested = %range.start,
            using = %dataset_start,
            "Start time is before the dataset start, using dataset start"
        );
        range.start = dataset_start;
    }

    if range.end > now {
        info!(requested = %range.end, using = %now, "End time is in the future, using now");
        range.end = now;
    }

    range
}

/// `YYYY/MM/DD/` directory for a day.
pub fn day_dir(day: NaiveDate) -> String {
    format!("{:04}/{:02}/{:02}/", day.year(), day.month(), day.day())
}

/// `YYYY/MM/DD/STATION` partition for a station and day.
pub fn day_prefix(day: NaiveDate, station_id: &str) -> String {
    format!("{}{}", day_dir(day), station_id)
}

/// Partitions to list, station by station, each in day order.
///
/// Unknown station ids are skipped with a warning.
pub fn day_prefixes<S: AsRef<str>>(range: &TimeRange, station_ids: &[S]) -> Vec<String> {
    let days = range.days();
    let mut prefixes = Vec::with_capacity(days.len() * station_ids.len());

    for id in station_ids {
        let id = id.as_ref();
        if !is_known_station(id) {
            warn!(station = id, "Station not found, skipping");
            continue;
        }

        prefixes.extend(days.iter().map(|day| day_prefix(*day, id)));
    }

    prefixes
}

/// Acquisition time embedded in a key, if it has one.
pub fn parse_key_timestamp(key: &str) -> Option<DateTime<Utc>> {
    let stamp = key.get(KEY_TIMESTAMP_RANGE)?;
    let naive = NaiveDateTime::parse_from_str(stamp, KEY_TIMESTAMP_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Whether a listed key belongs to the result.
///
/// Only `.gz` volume files are kept. Keys in the first day's partition must
/// be strictly after `start`; keys in the last day's partition strictly
/// before `end`. Keys on those days without a readable timestamp are
/// dropped.
pub fn keep_key(key: &str, range: &TimeRange) -> bool {
    if !key.ends_with(".gz") {
        return false;
    }

    let start_dir = day_dir(range.start.date_naive());
    let end_dir = day_dir(range.end.date_naive());

    if !key.starts_with(&start_dir) && !key.starts_with(&end_dir) {
        return true;
    }

    let Some(stamp) = parse_key_timestamp(key) else {
        warn!(key, "Unreadable timestamp in boundary-day key, skipping");
        return false;
    };

    if key.starts_with(&start_dir) && stamp <= range.start {
        return false;
    }

    if key.starts_with(&end_dir) && stamp >= range.end {
        return false;
    }

    true
}

/// Lists archive partitions and filters their keys to a time window.
pub struct KeyEnumerator {
    store: Arc<dyn ArchiveStore>,
}

impl KeyEnumerator {
    pub fn new(store: Arc<dyn ArchiveStore>) -> Self {
        Self { store }
    }

    /// Keys for `station_ids` in `[start, end)`, after clamping to the
    /// archive window at `now`.
    ///
    /// Keys come back partition by partition in listing order. A partition
    /// that fails to list contributes nothing.
    pub async fn enumerate<S: AsRef<str>>(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        station_ids: &[S],
        now: DateTime<Utc>,
    ) -> Vec<String> {
        let range = clamp_range(start, end, now);
        let prefixes = day_prefixes(&range, station_ids);

        debug!(
            start = %range.start,
            end = %range.end,
            partitions = prefixes.len(),
            "Enumerating archive keys"
        );

        let mut keys = Vec::new();

        for prefix in &prefixes {
            let listed = match self.store.list_prefix(prefix).await {
                Ok(listed) => listed,
                Err(e) => {
                    warn!(prefix = %prefix, error = %e, "Failed to list partition, skipping");
                    metrics::counter!("nexrad_listing_failures_total").increment(1);
                    continue;
                }
            };

            let before = keys.len();
            keys.extend(listed.into_iter().filter(|key| keep_key(key, &range)));

            debug!(prefix = %prefix, kept = keys.len() - before, "Listed partition");
        }

        metrics::counter!("nexrad_keys_found_total").increment(keys.len() as u64);
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        nexrad_common::parse_datetime(s).unwrap()
    }

    #[test]
    fn test_dataset_start() {
        assert_eq!(dataset_start(), utc("2013-08-01T00:00:00Z"));
    }

    #[test]
    fn test_clamp_start_and_end() {
        let now = utc("2020-01-01T12:00:00Z");
        let range = clamp_range(utc("2010-01-01T00:00:00Z"), utc("2030-01-01T00:00:00Z"), now);
        assert_eq!(range.start, dataset_start());
        assert_eq!(range.end, now);

        let range = clamp_range(utc("2015-05-05T05:00:00Z"), utc("2015-05-05T06:00:00Z"), now);
        assert_eq!(range.start, utc("2015-05-05T05:00:00Z"));
        assert_eq!(range.end, utc("2015-05-05T06:00:00Z"));
    }

    #[test]
    fn test_single_day_prefix() {
        let range = TimeRange::new(utc("2015-05-05T05:00:00Z"), utc("2015-05-05T06:00:00Z"));
        assert_eq!(day_prefixes(&range, &["KIND"]), vec!["2015/05/05/KIND"]);
    }

    #[test]
    fn test_prefixes_span_days_per_station() {
        let range = TimeRange::new(utc("2015-05-05T22:00:00Z"), utc("2015-05-07T01:00:00Z"));
        assert_eq!(
            day_prefixes(&range, &["KIND", "XXXX", "KLOT"]),
            vec![
                "2015/05/05/KIND",
                "2015/05/06/KIND",
                "2015/05/07/KIND",
                "2015/05/05/KLOT",
                "2015/05/06/KLOT",
                "2015/05/07/KLOT",
            ]
        );
    }

    #[test]
    fn test_end_at_midnight_excludes_that_day() {
        let range = TimeRange::new(utc("2015-05-05T05:00:00Z"), utc("2015-05-06T00:00:00Z"));
        assert_eq!(day_prefixes(&range, &["KIND"]), vec!["2015/05/05/KIND"]);
    }

    #[test]
    fn test_parse_key_timestamp() {
        assert_eq!(
            parse_key_timestamp("2015/05/06/KSGF/KSGF20150506_224351_V06.gz"),
            Some(utc("2015-05-06T22:43:51Z"))
        );
        assert_eq!(parse_key_timestamp("2015/05/06/KSGF/NOP3_garbage.gz"), None);
        assert_eq!(parse_key_timestamp("short"), None);
    }

    #[test]
    fn test_keep_key_boundaries() {
        let range = TimeRange::new(utc("2015-05-05T05:00:00Z"), utc("2015-05-05T06:00:00Z"));

        assert!(!keep_key("2015/05/05/KIND/KIND20150505_050000_V06.gz", &range));
        assert!(keep_key("2015/05/05/KIND/KIND20150505_050001_V06.gz", &range));
        assert!(keep_key("2015/05/05/KIND/KIND20150505_055959_V06.gz", &range));
        assert!(!keep_key("2015/05/05/KIND/KIND20150505_060000_V06.gz", &range));
        assert!(!keep_key("2015/05/05/KIND/KIND20150505_050412_V06_MDM", &range));
        assert!(!keep_key("2015/05/05/KIND/garbage.gz", &range));
    }

    #[test]
    fn test_keep_key_middle_days_unfiltered() {
        let range = TimeRange::new(utc("2015-05-05T05:00:00Z"), utc("2015-05-07T06:00:00Z"));
        assert!(keep_key("2015/05/06/KIND/KIND20150506_000000_V06.gz", &range));
        assert!(keep_key("2015/05/06/KIND/anything.gz", &range));
        assert!(!keep_key("2015/05/07/KIND/KIND20150507_070000_V06.gz", &range));
        assert!(keep_key("2015/05/07/KIND/KIND20150507_050000_V06.gz", &range));
    }
}
