//! Output sinks.
//!
//! - [`csv_log`]: the append-only CSV record store
//!
//! ```text
//! transportstyrelsen_data.csv   # one row per run, header on first write
//! ```

pub mod csv_log;
