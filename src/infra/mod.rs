//! Static data sources backing the form.

pub mod roadside;
