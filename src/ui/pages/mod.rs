pub mod reference;
pub mod valuation;

pub use reference::ReferencePage;
pub use valuation::ValuationPage;
