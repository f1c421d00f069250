mod action;
mod app;
mod command;
mod config;
mod domain;
mod ui;
mod update;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use action::Action;
use app::App;
use command::execute_command;
use config::{FormatStyle, Language, LengthPreference, Settings};

#[derive(Parser)]
#[command(name = "pagesage")]
#[command(about = "PageSage - Ask questions about any web page from your terminal")]
struct Cli {
    /// URL to pre-fill in the form
    url: Option<String>,

    /// Question to pre-fill in the form
    #[arg(short, long)]
    question: Option<String>,

    /// Gemini model to use
    #[arg(short, long, default_value = "gemini-1.5-flash")]
    model: String,

    /// Page fetch timeout in seconds (5-30)
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum page content characters sent to the model (5000-50000)
    #[arg(long)]
    max_content: Option<usize>,

    /// Response language
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Response format style
    #[arg(long, value_enum)]
    format: Option<FormatStyle>,

    /// Response length preference
    #[arg(long, value_enum)]
    length: Option<LengthPreference>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    settings.model = cli.model.clone();
    if let Some(timeout) = cli.timeout {
        settings.set_timeout_secs(timeout);
    }
    if let Some(max_content) = cli.max_content {
        settings.set_max_content_chars(max_content);
    }
    if let Some(language) = cli.language {
        settings.language = language;
    }
    if let Some(format) = cli.format {
        settings.format_style = format;
    }
    if let Some(length) = cli.length {
        settings.length_preference = length;
    }

    let mut app = App::new(settings);
    if let Some(url) = cli.url {
        app.prefill_url(url);
    }
    if let Some(question) = cli.question {
        app.prefill_question(question);
    }

    // Setup terminal. Mouse capture stays off so the terminal's own
    // text selection keeps working in the copy view.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.should_quit {
            break;
        }

        // Drain results from finished background commands
        while let Ok(action) = rx.try_recv() {
            dispatch(app, action, &tx);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    dispatch(
                        app,
                        Action::Input {
                            code: key.code,
                            modifiers: key.modifiers,
                        },
                        &tx,
                    );
                }
            }
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, action: Action, tx: &mpsc::UnboundedSender<Action>) {
    for command in update::update(app, action) {
        let tx = tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(execute_command(command).await);
        });
    }
}
