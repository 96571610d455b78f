pub mod contact_queries;
pub mod product_queries;
