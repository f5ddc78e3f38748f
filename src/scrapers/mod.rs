//! Page scrapers.
//!
//! | Source | Module | Extracts |
//! |--------|--------|----------|
//! | Transportstyrelsen vehicle import page | [`transportstyrelsen`] | Date of the cases currently being evaluated |
//!
//! The scraper turns raw markup into plain `(year, month, day)` text; month
//! names are resolved through [`months`].

pub mod months;
pub mod transportstyrelsen;
