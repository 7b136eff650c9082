mod download;
mod error_response;
mod health;
mod index;
mod process;

pub use download::download_handler;
pub use error_response::ERROR_KIND_HEADER;
pub use health::health_handler;
pub use index::index_handler;
pub use process::process_handler;
