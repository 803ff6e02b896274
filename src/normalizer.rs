use crate::model::{Observation, RawTable, Series};
use crate::utils::{parse_date, parse_value};
use tracing::{debug, warn};

/// Pairs dates and values positionally and sorts newest first.
///
/// Both lists are cut to the shorter length before pairing, so the series has
/// exactly `min(dates, values)` rows. A cell that cannot be read becomes a
/// missing date or value on its row; undated rows sort after every dated one.
pub fn normalize(symbol: &str, raw: &RawTable) -> Series {
    let len = raw.dates.len().min(raw.values.len());
    if raw.dates.len() != raw.values.len() {
        warn!(
            "{}: {} dates vs {} values, keeping first {}",
            symbol,
            raw.dates.len(),
            raw.values.len(),
            len
        );
    }

    let mut observations: Vec<Observation> = raw.dates[..len]
        .iter()
        .zip(&raw.values[..len])
        .map(|(date, value)| {
            let date = parse_date(date)
                .inspect_err(|e| warn!("{}: missing date, {}", symbol, e))
                .ok();
            let value = parse_value(value)
                .inspect_err(|e| debug!("{}: missing value, {}", symbol, e))
                .ok();
            Observation { date, value }
        })
        .collect();

    // Option orders None first, so descending puts undated rows last.
    observations.sort_by(|a, b| b.date.cmp(&a.date));

    Series::new(symbol, observations)
}
