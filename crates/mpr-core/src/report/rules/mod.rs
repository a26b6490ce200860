//! Rule-based building blocks for market report rows.

pub mod category;
pub mod grammar;
pub mod noise;
pub mod numbers;
pub mod patterns;

pub use category::is_category_header;
pub use grammar::{
    GroundBeefGrammar, LineGrammar, ParsedLineFields, PorkCutGrammar, PriceColumns,
    StandardCutGrammar,
};
pub use noise::is_noise_line;
pub use numbers::{NumberMode, extract_number, parse_decimal, parse_integer, parse_quantity};
