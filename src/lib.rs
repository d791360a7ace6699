//! # Satchel - school day attendance companion
//!
//! The attendance aggregation and calendar navigation engine of a
//! school/daycare companion application, with a small command-line front end.
//!
//! ## Features
//!
//! - **Calendar Math**: Monday-to-Sunday week ranges from any reference instant
//! - **Date Strip**: Weekday-only selector window around today
//! - **Attendance Aggregation**: Weekly tallies and percentages that never count days still ahead
//! - **Selection State**: Scoped "currently viewed date" with fail-fast handles
//! - **Child Carousel**: Clamped paging between children's datasets
//! - **Export**: Weekly attendance to CSV and JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use satchel::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
