use clap::{Parser, Subcommand};
use linkbrief::{
    server::{app, AppState},
    tracing::init_tracing_subscriber,
    GroqClient, SummarizeRequest, SummaryPipelineBuilder,
};
use url_loader::{HttpPageFetcher, YtTranscriptClient};

#[derive(Parser)]
#[command(name = "linkbrief", about = "Summarize a YouTube video or website URL")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the single-screen web form
    Serve {
        /// Address to bind
        #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
        bind: String,
    },
    /// Summarize one URL and print the result
    Summarize {
        /// YouTube or website URL
        url: String,

        /// Groq API key
        #[arg(long, env = "GROQ_API_KEY")]
        groq_api_key: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    match cli.command {
        Command::Serve { bind } => {
            let listener = tokio::net::TcpListener::bind(&bind).await?;
            tracing::info!(%bind, "Serving the summary form");
            axum::serve(listener, app(AppState::new()?)).await?;
        }
        Command::Summarize { url, groq_api_key } => {
            let pipeline = SummaryPipelineBuilder::new()
                .transcript_provider(YtTranscriptClient::new())
                .page_fetcher(HttpPageFetcher::new()?)
                .summarizer(GroqClient::new(groq_api_key.as_str()))
                .build();

            let request = SummarizeRequest {
                api_key: groq_api_key,
                url,
            };

            let response = pipeline.run(&request).await?;
            println!("{}", response.summary);
        }
    }

    Ok(())
}
