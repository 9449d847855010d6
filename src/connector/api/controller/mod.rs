mod chat_controller;
mod serve_controller;

pub use chat_controller::ChatController;
pub use serve_controller::ServeController;
