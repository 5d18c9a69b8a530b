//! Employee Productivity Analysis Engine
//!
//! This crate turns a batch of monthly attendance records into
//! per-employee productivity figures and summary reports. Each run is a
//! stateless, in-memory transform:
//!
//! 1. [`ingest`] reads CSV or workbook bytes into a raw table.
//! 2. [`validation`] checks the required columns and coerces each row.
//! 3. [`calculation`] derives expected hours, productivity percentage and status.
//! 4. [`aggregation`] summarizes by department, employment type and overall.
//! 5. [`export`] renders the result as an XLSX workbook or a PDF report.
//!
//! [`pipeline::analyze`] chains steps 2 to 4.

#![warn(missing_docs)]

pub mod aggregation;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod ingest;
pub mod models;
pub mod pipeline;
pub mod validation;
