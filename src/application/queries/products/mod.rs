mod get_by_id;
mod get_by_slug;
mod list;
mod service;

pub use service::ProductQueryService;
