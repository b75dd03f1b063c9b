pub mod rivers_csv;
pub mod viz_config;

pub use rivers_csv::*;
pub use viz_config::*;
