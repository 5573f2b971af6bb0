pub mod jasmine;
pub mod portfolio_data;
