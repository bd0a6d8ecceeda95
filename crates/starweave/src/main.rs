use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame, layout::Rect};
use starweave_background::{BackgroundState, CanvasSurface};
use starweave_config::{Config, ConfigSource};

use crate::scheduler::TickScheduler;

mod logging;
mod scheduler;

/// How long to wait for input when no frame is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let (config, source) = Config::load()?;
    if let Some(path) = logging::init(&config.logging) {
        tracing::info!(path = %path.display(), "logging to file");
    }
    log_config_source(&source);

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// Report where the config came from, once a subscriber is installed.
fn log_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::File(path) => tracing::info!(path = %path.display(), "loaded config"),
        ConfigSource::Missing(path) => {
            tracing::info!(path = %path.display(), "config file not found, using defaults")
        }
        ConfigSource::NoHome => tracing::warn!("no home directory, using default config"),
    }
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Scene and animator.
    background: BackgroundState,
    /// Display list the animator draws into.
    surface: CanvasSurface,
    scheduler: TickScheduler,
    /// Where the canvas sits inside the terminal.
    canvas_area: Rect,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        let interval = Duration::from_millis(config.animation.frame_interval_ms);
        Self {
            running: false,
            background: BackgroundState::new(config.clone()),
            surface: CanvasSurface::new(0.0, 0.0),
            scheduler: TickScheduler::new(interval),
            canvas_area: Rect::default(),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        self.on_load(Rect::new(0, 0, size.width, size.height));

        while self.running {
            if self.scheduler.take_due(Instant::now()).is_some() {
                terminal.draw(|frame| self.render(frame))?;
            }
            self.handle_crossterm_events()?;
        }

        self.background.stop(&mut self.scheduler);
        Ok(())
    }

    /// First sizing of the surface, then start animating.
    fn on_load(&mut self, area: Rect) {
        self.layout(area);
        self.background.start(&mut self.scheduler);
        self.running = true;
    }

    /// Fit the canvas into a terminal of the given size.
    fn on_resize(&mut self, columns: u16, rows: u16) {
        tracing::debug!(columns, rows, "terminal resized");
        self.layout(Rect::new(0, 0, columns, rows));
    }

    /// Place the canvas in `terminal_area` and resize the scene to match.
    fn layout(&mut self, terminal_area: Rect) {
        let area = canvas_rect(terminal_area, self.config.surface.fraction);
        let width = f64::from(area.width) * self.config.surface.cell_width;
        let height = f64::from(area.height) * self.config.surface.cell_height;

        self.canvas_area = area;
        self.surface.resize(width, height);
        self.background.resize(width, height);
    }

    /// Renders one animation frame.
    fn render(&mut self, frame: &mut Frame) {
        if canvas_rect(frame.area(), self.config.surface.fraction) != self.canvas_area {
            self.layout(frame.area());
        }
        self.background.frame(&mut self.surface, &mut self.scheduler);
        frame.render_widget(&self.surface, self.canvas_area);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Waits no longer than until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self.scheduler.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(columns, rows) => self.on_resize(columns, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// The centered rectangle covering `fraction` of `area` in each direction.
fn canvas_rect(area: Rect, fraction: f64) -> Rect {
    let width = (f64::from(area.width) * fraction).floor() as u16;
    let height = (f64::from(area.height) * fraction).floor() as u16;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
