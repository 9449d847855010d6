use anyhow::Result;
use tracing::info;

use crate::connector::adapter::web::start_web_server;

use super::super::Container;

pub struct ServeController<'a> {
    container: &'a Container,
}

impl<'a> ServeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Start the chat widget server; runs until the process is stopped.
    pub async fn serve(&self, host: String, port: u16) -> Result<()> {
        info!(
            "Serving chat widget (model: {}, temperature: {})",
            self.container.model_name(),
            self.container.temperature()
        );
        start_web_server(self.container.respond_use_case(), &host, port).await
    }
}
