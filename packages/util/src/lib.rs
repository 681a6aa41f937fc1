//! Pure utility functions.
//!
//! Formatting (dates, latencies, compact numbers), runtime guards over
//! dynamic JSON values, and a result-shaped wrapper for fallible
//! operations. Everything here is input-to-output with no side effects;
//! failures become documented fallback strings, `false`, or a structured
//! outcome - never a panic or an error across the public boundary.

pub mod format;
pub mod guards;
pub mod outcome;

pub use format::{
    format_compact_number, format_date, format_date_time, format_latency, format_milliseconds,
    format_relative_time, format_relative_time_at, DateInput, INVALID_DATE,
};
pub use guards::{
    as_bool_array, as_date_array, as_number_array, as_string_array, is_array_of_booleans,
    is_array_of_dates, is_array_of_numbers, is_array_of_strings,
};
pub use outcome::{capture, capture_sync, Outcome};
