//! Land valuation calculator: roadside-price based land value, zoning, shape
//! and station-distance adjustments, acquisition cost and suggested bids.

pub mod app;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod util;
