mod group_filter;
mod header;
mod kind_filter;

pub use group_filter::GroupFilterOperator;
pub use header::HeaderOperator;
pub use kind_filter::KindFilterOperator;
