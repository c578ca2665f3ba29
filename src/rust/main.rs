use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;
use sentiment_dashboard::config::{resolve_api_url, DEFAULT_LISTEN_ADDR};
use sentiment_dashboard::{
    init_logger, serve, AppState, BatchPanel, DashboardConfig, HttpSentimentApi, ResultView,
    SinglePanel,
};
use std::io::Read;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the sentiment classification service
    /// (defaults to $SENTIMENT_API_URL, then http://localhost:8000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the dashboard (default)
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = DEFAULT_LISTEN_ADDR)]
        listen: SocketAddr,
    },
    /// Classify a single review
    Predict {
        text: String,
        /// Send the request through a dashboard relay endpoint instead
        #[arg(long)]
        via_relay: Option<String>,
    },
    /// Classify one review per line from FILE, or stdin when omitted
    Batch {
        file: Option<PathBuf>,
        /// Send the request through a dashboard relay endpoint instead
        #[arg(long)]
        via_relay: Option<String>,
    },
}

fn client(api_url: &str, via_relay: Option<String>) -> HttpSentimentApi {
    match via_relay {
        Some(relay) => HttpSentimentApi::via_relay(relay),
        None => HttpSentimentApi::direct(api_url),
    }
}

async fn run_predict(api: HttpSentimentApi, text: String) -> anyhow::Result<()> {
    let mut panel = SinglePanel::with_input(text);
    panel.submit(&api).await;

    if let Some(error) = panel.error() {
        anyhow::bail!("{}", error);
    }
    if let Some(result) = panel.result() {
        let view = ResultView::from_result(result);
        println!("Sentiment:           {}", view.label);
        println!("Confidence:          {}%", view.confidence_percent);
        println!("Positive:            {}%", view.positive_percent);
        println!("Negative:            {}%", view.negative_percent);
        println!("Vocabulary Coverage: {}", view.coverage);
        println!("Text Length:         {} words", view.word_count);
    }
    Ok(())
}

async fn run_batch(api: HttpSentimentApi, file: Option<PathBuf>) -> anyhow::Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read reviews from stdin")?;
            raw
        }
    };

    let mut panel = BatchPanel::with_input(raw);
    panel.submit(&api).await;

    if let Some(error) = panel.error() {
        anyhow::bail!("{}", error);
    }
    for item in panel.results() {
        println!(
            "{:>8}  {:>3}%  {}",
            item.sentiment.as_str(),
            sentiment_dashboard::analysis::percent(item.confidence),
            item.text
        );
    }
    let summary = panel.summary();
    println!(
        "\nTotal: {}  Positive: {}  Negative: {}",
        summary.total, summary.positive, summary.negative
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let args = Args::parse();
    let api_url = resolve_api_url(args.api_url.as_deref());

    match args.command {
        None => {
            let listen = DEFAULT_LISTEN_ADDR.parse()?;
            run_server(api_url, listen).await
        }
        Some(Command::Serve { listen }) => run_server(api_url, listen).await,
        Some(Command::Predict { text, via_relay }) => {
            let start = Instant::now();
            run_predict(client(&api_url, via_relay), text).await?;
            info!("Classified in {:.2?}", start.elapsed());
            Ok(())
        }
        Some(Command::Batch { file, via_relay }) => {
            let start = Instant::now();
            run_batch(client(&api_url, via_relay), file).await?;
            info!("Batch classified in {:.2?}", start.elapsed());
            Ok(())
        }
    }
}

async fn run_server(api_url: String, listen: SocketAddr) -> anyhow::Result<()> {
    let config = DashboardConfig::default()
        .with_api_url(api_url)
        .with_listen(listen);
    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen))?;
    serve(listener, AppState::new(config)).await?;
    Ok(())
}
