use chrono::{DateTime, Utc};

use crate::markup;
use crate::types::{Filter, Operator};

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

impl Filter {
    /// Builds a filter comparing a date/time field against an instant.
    ///
    /// The instant is rendered as `YYYY-MM-DDThh:mm:ssZ`; taking
    /// `DateTime<Utc>` keeps the trailing `Z` honest, so callers holding a
    /// zoned value convert with `with_timezone(&Utc)` first.
    /// `include_time_value` controls whether SharePoint compares the
    /// time-of-day component or the date alone.
    pub fn date_time(
        field_name: &str,
        instant: DateTime<Utc>,
        op: Operator,
        include_time_value: bool,
    ) -> Filter {
        let field_ref = markup::field_ref(field_name);
        let rendered = instant.format(DATE_TIME_FORMAT).to_string();
        let value = markup::date_time_value(include_time_value, &rendered);
        Filter {
            markup: markup::binary(op, &field_ref, &value),
        }
    }
}
