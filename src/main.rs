use {
  action::{Action, ActionDispatch},
  anyhow::{Context, anyhow, bail},
  app::App,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  connection::Connection,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  event::Event,
  feed_url::feed_endpoint,
  futures::{SinkExt, StreamExt},
  help_view::HelpView,
  keep_alive::KeepAlive,
  list_view::ListView,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  serde::Deserialize,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    fmt, fs,
    io::{self, IsTerminal, Stdout},
    path::PathBuf,
    process,
    sync::Arc,
    time::{Duration, Instant},
  },
  story::Story,
  story_entry::StoryEntry,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
  },
  tokio_tungstenite::{connect_async, tungstenite::Message},
  tracing::{debug, info, warn},
  transient_message::TransientMessage,
  url::Url,
  utils::{format_comments, format_points, truncate},
  view_variant::ViewVariant,
};

mod action;
mod app;
mod arguments;
mod connection;
mod effect;
mod event;
mod feed_url;
mod help_view;
mod keep_alive;
mod list_view;
mod state;
mod story;
mod story_entry;
mod transient_message;
mod utils;
mod view_variant;

const LIST_STATUS: &str =
  "↑/k up • ↓/j down • o open story • v switch layout • q/esc quit • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const EMPTY_FEED_STATUS: &str = "No stories currently available";
const WAITING_STATUS: &str = "Waiting for the first story batch...";

const BASE_INDENT: &str = " ";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home    jump to first story
  end     jump to last story

Actions:
  o       open the selected story in your browser
  v       switch between the card and title layouts
  q       quit eslnews
  esc     close help or quit from the list
  ?       toggle this help

The story list refreshes itself whenever the server
pushes a new batch; there is nothing to pull manually.
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let arguments = Arguments::parse();

  arguments.initialize_logging()?;

  let endpoint = feed_endpoint(&arguments.site)?;

  let (event_tx, event_rx) = mpsc::unbounded_channel();

  let connection = Connection::open(&endpoint, event_tx)
    .await
    .with_context(|| format!("could not connect to {endpoint}"))?;

  let keep_alive = KeepAlive::new(Handle::current(), connection.sender());

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(event_rx, keep_alive, arguments.variant);

  let result = app.run(&mut terminal);

  connection.close();

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
