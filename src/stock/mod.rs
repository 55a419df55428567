//! Ready-made stock: the standard opening inventory, seeded random
//! inventories, and the day-by-day report.

pub mod fixture;
pub mod generator;
pub mod report;

pub use fixture::{standard_stock, standard_stock_with};
pub use generator::StockGenerator;
pub use report::{render_days, DailyReport};
