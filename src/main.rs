use std::path::PathBuf;
use std::sync::Arc;
use std::{io, time::Duration};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use matinee_lib::app::{App, AsyncAction};
use matinee_lib::catalog::Catalog;
use matinee_lib::config::AppConfig;
use matinee_lib::handlers::async_actions::handle_async_action;
use matinee_lib::handlers::input::{handle_key_event, InputResult};
use matinee_lib::similarity::SimilarityMatrix;
use matinee_lib::ui;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the catalog and similarity artifacts
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Verify the artifacts load and print catalog stats
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let args = Args::parse();

    let mut config = AppConfig::load()?;
    if args.data_dir.is_some() {
        config.data_dir = args.data_dir;
    }

    let catalog = Arc::new(Catalog::load(&config.catalog_path())?);
    let similarity = Arc::new(
        SimilarityMatrix::load_or_fetch(&config.similarity_path(), &config.similarity_url).await?,
    );

    // -- CLI MODE --
    if args.check {
        println!("Catalog: {} movies", catalog.len());
        println!(
            "Similarity matrix: {}x{}",
            similarity.size(),
            similarity.size()
        );
        if similarity.size() != catalog.len() {
            anyhow::bail!(
                "matrix size {} does not match catalog size {}",
                similarity.size(),
                catalog.len()
            );
        }
        println!("OK");
        return Ok(());
    }

    // -- TUI MODE (Default) --
    let mut app = App::new(config, catalog, similarity)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::channel::<AsyncAction>(32);

    let res = run_app(&mut terminal, &mut app, tx, &mut rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tx: mpsc::Sender<AsyncAction>,
    rx: &mut mpsc::Receiver<AsyncAction>,
) -> io::Result<()>
where
    io::Error: From<<B as ratatui::backend::Backend>::Error>,
{
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // 1. Fold in finished fetches (non-blocking)
        while let Ok(action) = rx.try_recv() {
            handle_async_action(app, action);
        }

        // 2. Poll terminal input
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let InputResult::Quit = handle_key_event(app, key, &tx) {
                    app.should_quit = true;
                }
            }
        }

        app.loading_tick = app.loading_tick.wrapping_add(1);

        if app.should_quit {
            return Ok(());
        }
    }
}
