use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web UI
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the UI on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Explain a single query and print the analysis
    Explain {
        /// SQL query to analyze; read from stdin when omitted
        query: Option<String>,

        /// Groq API key used for this request only
        #[arg(short = 'k', long)]
        api_key: Option<String>,
    },
}
