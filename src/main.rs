use tweetgen::adapters::ReqwestHttpClient;
use tweetgen::app::{App, AppMessage};
use tweetgen::cli::{handle_version_command, parse_args, run_headless, CliCommand, USAGE};
use tweetgen::flow::TweetApi;
use tweetgen::startup::{init_logging, ClientConfig};
use tweetgen::terminal::{setup_panic_hook, TerminalManager};
use tweetgen::ui::{self, RenderOutputs};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner/animation tick
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    match args.command {
        CliCommand::Version => {
            handle_version_command();
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    color_eyre::install()?;

    // Resolved once; nothing re-reads the environment after this
    let config = ClientConfig::resolve(args.api_url.as_deref(), args.dev);
    init_logging(&config);
    tracing::info!(
        api_base_url = %config.api_base_url,
        dev_mode = config.dev_mode,
        "Starting tweetgen {}",
        env!("CARGO_PKG_VERSION")
    );

    let runtime = tokio::runtime::Runtime::new()?;

    if let CliCommand::Generate { topic } = args.command {
        let api = TweetApi::new(Arc::new(ReqwestHttpClient::new()), &config);
        let ok = runtime.block_on(run_headless(&api, &topic));
        std::process::exit(if ok { 0 } else { 1 });
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(&config);

    let result = runtime.block_on(async {
        app.spawn_health_check();
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore()?;
    tracing::info!("Exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            let mut outputs = RenderOutputs::default();
            terminal.draw(|f| {
                outputs = ui::render(f, &app.view_model());
            })?;
            app.apply_render_outputs(outputs);
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK_INTERVAL);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => {
                        // Input closed
                        app.quit();
                    }
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
