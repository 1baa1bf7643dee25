pub mod bid_card;
pub mod kpi_card;
pub mod toast;
