pub mod use_fetch;
pub mod use_page;
