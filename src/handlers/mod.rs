pub mod page_handler;
pub mod session_handler;

pub use page_handler::page_handler;
pub use session_handler::session_handler;
