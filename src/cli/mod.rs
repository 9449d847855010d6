use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the browser chat widget.
    Serve {
        /// Interface to bind; use 0.0.0.0 to expose the widget beyond this machine
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value_t = 7860)]
        port: u16,
    },

    /// Chat from the terminal instead of the browser.
    Chat,
}
