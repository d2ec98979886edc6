use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Parser;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use tracing::{error, info, warn};

use confsched::app::App;
use confsched::clock::SystemClock;
use confsched::config::Config;
use confsched::error::ScheduleError;
use confsched::event::EventHandler;
use confsched::logging;
use confsched::navigation::Route;
use confsched::schedule::talk::ScheduleData;
use confsched::ui::components::event_info::EventInfoView;
use confsched::ui::components::schedule_view::ScheduleView;
use confsched::ui::components::status_bar::StatusBarLine;
use confsched::ui::components::talk_detail::TalkDetail;
use confsched::ui::layout::{centered_rect, pack_hint_lines};
use confsched::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "confsched", version, about = "Conference schedule in the terminal")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Schedule file (TOML) to load instead of the bundled one")]
    schedule: Option<PathBuf>,

    #[arg(short = 'z', long, help = "IANA time zone to display times in")]
    time_zone: Option<String>,

    #[arg(long, help = "Do not draw or restyle the status bar row")]
    no_status_bar: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match logging::initialize_logging() {
        Ok(path) => info!(log = %path.display(), "logging initialized"),
        Err(err) => eprintln!("warning: logging disabled: {err:#}"),
    }

    let mut config = Config::load().unwrap_or_else(|err| {
        warn!("falling back to default config: {err:#}");
        Config::default()
    });
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(path) = cli.schedule {
        config.schedule_path = Some(path);
    }
    if let Some(zone) = cli.time_zone {
        config.time_zone = Some(zone);
    }
    if cli.no_status_bar {
        config.status_bar_overlay = false;
    }

    let data = load_schedule(&config)?;
    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(
            theme = %config.theme,
            available = ?Theme::available_themes(),
            "unknown theme, using default"
        );
        Theme::default()
    });
    info!(
        event = %data.event().name,
        entries = data.len(),
        zone = data.time_zone().name(),
        "schedule loaded"
    );

    let mut app = App::new(data, Box::new(SystemClock), &config, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    if app.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(50));

    let result = run_app(&mut terminal, &mut app, &events);

    if app.mouse_enabled {
        let _ = execute!(terminal.backend_mut(), DisableMouseCapture);
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!("{err:#}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn load_schedule(config: &Config) -> Result<ScheduleData> {
    let data = ScheduleData::load(config.schedule_path.as_deref())
        .context("loading schedule")?;
    let Some(name) = config.time_zone.as_deref() else {
        return Ok(data);
    };
    let zone: Tz = name
        .parse()
        .map_err(|_| ScheduleError::UnknownTimeZone(name.to_string()))?;
    Ok(data.with_time_zone(zone))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    app.start();

    loop {
        terminal.draw(|frame| render(frame, app))?;

        app.handle_event(events.next()?);

        if app.should_quit {
            app.shutdown();
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()).fg(colors.fg()));
    frame.render_widget(bg, area);

    match app.routes.current() {
        Route::Schedule => {
            frame.render_widget(ScheduleView::new(&app.schedule, &app.chrome, &app.theme), area)
        }
        Route::Talk { talk_index } => render_talk(frame, app, talk_index),
        Route::Info => render_info(frame, app),
    }
}

/// Status bar on top, hint footer at the bottom, `body` fills the rest.
fn split_chrome(app: &App, area: Rect, hints: &[&str]) -> (Option<Rect>, Rect, Rect, Vec<String>) {
    let lines = pack_hint_lines(hints, area.width as usize);
    let footer_height = (lines.len() as u16).min(area.height.saturating_sub(2)).max(1);
    let status_height = u16::from(app.schedule.options().status_bar_overlay);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(status_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    let status = (status_height > 0).then_some(layout[0]);
    (status, layout[1], layout[2], lines)
}

fn render_status(frame: &mut ratatui::Frame, app: &App, area: Option<Rect>) {
    let Some(area) = area else {
        return;
    };
    let screen = &app.schedule;
    let formatter = screen.formatter();
    let clock = format!(
        "{}  {}",
        formatter.format(screen.state().current_time),
        formatter.time_zone().name()
    );
    let label = &screen.data().event().name;
    frame.render_widget(StatusBarLine::new(&app.chrome, &clock, label, &app.theme), area);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: Rect, lines: Vec<String>) {
    let footer = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(Style::default().fg(app.theme.colors.muted()));
    frame.render_widget(footer, area);
}

fn render_talk(frame: &mut ratatui::Frame, app: &App, talk_index: usize) {
    let hints = ["[h/l] Previous/Next", "[i] Event Info", "[Esc] Back"];
    let (status, body, footer, lines) = split_chrome(app, frame.area(), &hints);
    render_status(frame, app, status);

    let screen = &app.schedule;
    let detail = TalkDetail::new(
        screen.data(),
        talk_index,
        screen.state().current_time,
        screen.formatter(),
        &app.theme,
    );
    frame.render_widget(detail, body);
    render_footer(frame, app, footer, lines);
}

fn render_info(frame: &mut ratatui::Frame, app: &App) {
    let hints = ["[Esc] Back"];
    let (status, body, footer, lines) = split_chrome(app, frame.area(), &hints);
    render_status(frame, app, status);
    frame.render_widget(
        EventInfoView::new(app.schedule.data().event(), &app.theme),
        centered_rect(70, 90, body),
    );
    render_footer(frame, app, footer, lines);
}
