//! Export endpoint: spreadsheet/CSV download.

mod dto;
mod handlers;
mod routes;

pub use dto::ExportRequest;
pub use routes::export_routes;
