pub mod server;

pub use server::{app, start_web_server, ChatRequest, ChatResponse};
