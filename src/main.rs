use foodsense::adapters::{
    FilePreferenceStore, FrameDirectoryCamera, InMemoryPreferences, KeyboardWedgeDecoder,
    ReqwestHttpClient, TerminalCamera,
};
use foodsense::analysis::AnalysisClient;
use foodsense::app::{App, AppMessage, Coordinator};
use foodsense::capture::{CaptureSession, DecodeEvent};
use foodsense::error::CaptureError;
use foodsense::startup::{ambient_theme, init_tracing, initialize_theme, AppConfig};
use foodsense::terminal::{setup_panic_hook, TerminalManager};
use foodsense::traits::PreferenceStore;
use foodsense::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner frame interval.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// What woke the event loop.
enum Step {
    Tick,
    Terminal(Option<std::io::Result<Event>>),
    Message(Option<AppMessage>),
    Decode(Result<DecodeEvent, CaptureError>),
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::from_env();
    if let Some(log_dir) = config.resolved_log_dir() {
        init_tracing(&log_dir).wrap_err("failed to open log file")?;
    }
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_url = %config.api_url,
        timeout_secs = config.timeout_secs,
        "starting foodsense"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let preferences: Arc<dyn PreferenceStore> = match FilePreferenceStore::new() {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "preferences unavailable, using in-memory store");
                Arc::new(InMemoryPreferences::new())
            }
        };
        let theme = initialize_theme(preferences.as_ref(), ambient_theme()).await;

        let http = Arc::new(ReqwestHttpClient::with_timeout(config.timeout()));
        let analysis = AnalysisClient::new(http, config.api_url.clone());

        let wedge = KeyboardWedgeDecoder::new();
        let frames = config.frame_dir.clone().map(FrameDirectoryCamera::new);
        let camera = Arc::new(TerminalCamera::new(wedge.clone(), frames));
        let capture = CaptureSession::new(camera);

        let app = App::new(analysis, preferences, theme);
        let mut coordinator = Coordinator::new(app, capture).with_wedge(wedge);

        setup_panic_hook();
        let mut term_manager = TerminalManager::new()?;
        let result = run_app(term_manager.terminal(), &mut coordinator).await;
        term_manager.restore();

        tracing::info!("foodsense exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    coordinator: &mut Coordinator,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> =
        coordinator.app.message_rx.take();

    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        if coordinator.app.needs_redraw {
            terminal.draw(|f| ui::render(f, &coordinator.app))?;
            coordinator.app.needs_redraw = false;
        }

        let step = tokio::select! {
            _ = ticker.tick() => Step::Tick,
            event = event_stream.next() => Step::Terminal(event),
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => Step::Message(msg),
            decoded = coordinator.next_decode() => Step::Decode(decoded),
        };

        match step {
            Step::Tick => coordinator.app.tick(),
            Step::Terminal(Some(Ok(Event::Key(key)))) if key.kind == KeyEventKind::Press => {
                coordinator.handle_key(key).await;
                coordinator.app.mark_dirty();
            }
            Step::Terminal(Some(Ok(Event::Resize(_, _)))) => coordinator.app.mark_dirty(),
            Step::Terminal(Some(Ok(_))) => {}
            Step::Terminal(Some(Err(e))) => {
                tracing::warn!(error = %e, "terminal event error");
            }
            Step::Terminal(None) => {
                tracing::warn!("terminal event stream ended");
                coordinator.app.quit();
            }
            Step::Message(Some(msg)) => coordinator.handle_message(msg).await,
            Step::Message(None) => message_rx = None,
            Step::Decode(decoded) => coordinator.handle_decode(decoded).await,
        }

        if coordinator.app.should_quit {
            return Ok(());
        }
    }
}
