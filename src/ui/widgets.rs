pub mod forecast;
pub mod header;
mod shared;
pub mod today;
