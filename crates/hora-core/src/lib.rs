//! Time-partition computer, time parsing, labels, and configuration for
//! the Hora Roman hour clock.
//!
//! # Modules
//!
//! - [`time`] -- [`TimeOfDay`] on a shared 24-hour cycle, with parsing of
//!   `h:mm am/pm` and `HH:mm` input.
//! - [`partition`] -- The pure computation from sunrise/sunset to the
//!   hour, vigil and quarter rings.
//! - [`labels`] -- Label and tooltip vocabularies keyed by ring and
//!   ordinal.
//! - [`config`] -- Configuration loading from `hora-config.yaml` into
//!   strongly-typed structs.
//!
//! [`TimeOfDay`]: time::TimeOfDay

pub mod config;
pub mod labels;
pub mod partition;
pub mod time;

pub use labels::LabelSet;
pub use partition::{DaySplit, compute_partition, compute_partition_with, split_day};
pub use time::{MILLIS_PER_DAY, TimeError, TimeOfDay};
