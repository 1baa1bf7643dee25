//! Land valuation domain: inputs, coefficient tables, the pricing pipeline
//! and the form state that feeds it.

pub mod app_state;
pub mod coefficients;
pub mod entities;
pub mod form;
pub mod valuation;

pub use app_state::{AppState, FormAction, Notice, NoticeKind};
pub use coefficients::{CoefficientTables, LocationBand, ValuationPolicy};
pub use entities::{
    BidRange, DemolitionTier, LandShape, ValuationInput, ValuationResult, ZoningCategory,
};
pub use form::{FormField, ValuationForm};
pub use valuation::{compute_valuation, compute_valuation_with, ValuationError};
