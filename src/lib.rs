pub mod page_range;
pub mod pdf;
