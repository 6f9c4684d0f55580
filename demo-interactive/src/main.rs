//! Interactive Egg Cooling Animation
//!
//! Terminal animation of the reference egg scenario. Each tick advances the
//! simulation and redraws the field with the jet colour scale fixed between the
//! bath and initial egg temperatures.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --package demo-interactive
//! RUST_LOG=debug cargo run --package demo-interactive   # logs to demo-interactive.log
//! ```
//!
//! # Keys
//!
//! - `q` / `Esc` - Quit
//! - `space` - Pause or resume
//! - `n` - Advance a single frame (while paused)
//! - `r` - Restart from the initial field
//! - `+` / `-` - Double or halve the frames computed per tick

use egg_cooling_core::render::{ColorScale, Raster};
use egg_cooling_core::{Backend, CoolingSimulation, SimulationParameters};
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::{DefaultTerminal, Frame};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Animation interval between frames
const TICK: Duration = Duration::from_millis(50);
/// Upper bound for the frames-per-tick speed-up
const MAX_FRAMES_PER_TICK: usize = 64;
/// Log file used when `RUST_LOG` is set (the terminal belongs to the UI)
const LOG_FILE: &str = "demo-interactive.log";

const TITLE: &str = " Cooling of a hard-boiled egg ";
const COLORBAR_LABEL: &str = "Temperature (°C)";
/// Upper half block: foreground paints the top pixel, background the bottom one
const HALF_BLOCK: char = '▀';

struct App {
    sim: CoolingSimulation,
    paused: bool,
    frames_per_tick: usize,
    quit: bool,
}

impl App {
    fn new(params: SimulationParameters) -> Self {
        Self {
            sim: CoolingSimulation::new(params, Backend::Parallel),
            paused: false,
            frames_per_tick: 1,
            quit: false,
        }
    }

    fn on_tick(&mut self) {
        if self.paused || self.sim.is_complete() {
            return;
        }
        self.sim.advance_by(self.frames_per_tick);
        if self.sim.is_complete() {
            info!(
                "Animation reached t_final: center={:.3}°C",
                self.sim.stats().center
            );
        }
    }

    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('n') => {
                self.paused = true;
                if !self.sim.is_complete() {
                    self.sim.advance();
                }
            }
            KeyCode::Char('r') => self.sim.reset(),
            KeyCode::Char('+' | '=') => {
                self.frames_per_tick = (self.frames_per_tick * 2).min(MAX_FRAMES_PER_TICK);
            }
            KeyCode::Char('-') => self.frames_per_tick = (self.frames_per_tick / 2).max(1),
            _ => {}
        }
    }

    fn state_label(&self) -> Span<'static> {
        if self.sim.is_complete() {
            Span::styled("complete", Style::default().fg(Color::Green))
        } else if self.paused {
            Span::styled("paused", Style::default().fg(Color::Yellow))
        } else {
            Span::styled("running", Style::default().fg(Color::Cyan))
        }
    }
}

fn main() -> io::Result<()> {
    init_logging()?;

    let params = SimulationParameters::egg();
    let app = App::new(params);

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Route tracing to a file, only when `RUST_LOG` asks for it
fn init_logging() -> io::Result<()> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };
    let file = File::create(LOG_FILE)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> io::Result<()> {
    let mut last_tick = Instant::now();
    while !app.quit {
        terminal.draw(|frame| draw(frame, &app))?;

        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key.code);
                }
            }
        }
        if last_tick.elapsed() >= TICK {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let params = app.sim.params();
    let scale = ColorScale::from_params(params);

    let outer = Block::bordered()
        .title(Line::from(TITLE).bold().centered())
        .title_bottom(
            Line::from(" q quit · space pause · n step · r reset · +/- speed ").centered(),
        );
    let inner = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let [body, x_axis, status] = Layout::vertical([
        Constraint::Min(4),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .areas(inner);
    let [y_axis, plot, colorbar] = Layout::horizontal([
        Constraint::Length(9),
        Constraint::Min(8),
        Constraint::Length(20),
    ])
    .areas(body);

    // Square pixels: one column wide, half a row tall
    let side = usize::from(plot.width).min(2 * usize::from(plot.height));
    let plot = Rect {
        x: plot.x,
        y: plot.y,
        width: side as u16,
        height: side.div_ceil(2) as u16,
    };

    frame.render_widget(
        Heatmap {
            raster: Raster::from_field(app.sim.field(), side, side),
            scale,
        },
        plot,
    );
    draw_y_axis(frame, y_axis, plot, params.radius());
    draw_x_axis(frame, x_axis, plot, params.radius());
    frame.render_widget(ColorBar { scale }, colorbar);

    let stats = app.sim.stats();
    let line = Line::from(vec![
        Span::raw(format!(
            "t = {:7.2} s   frame {:>5}/{}   center {:7.2}°C   ",
            app.sim.elapsed_time(),
            app.sim.frame(),
            params.frame_count(),
            stats.center
        )),
        app.state_label(),
        Span::raw(format!("   ×{}", app.frames_per_tick)),
    ]);
    frame.render_widget(Paragraph::new(line), status);
}

fn draw_y_axis(frame: &mut Frame, area: Rect, plot: Rect, radius: f64) {
    let label = Style::default().fg(Color::Gray);
    let top = Rect { height: 1, ..area };
    let middle = Rect {
        y: area.y + plot.height / 2,
        height: 1,
        ..area
    };
    let bottom = Rect {
        y: area.y + plot.height.saturating_sub(1),
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(format!("{radius:.3} ┤")).alignment(Alignment::Right),
        top,
    );
    frame.render_widget(
        Paragraph::new(Line::styled("y (m) ┤", label)).alignment(Alignment::Right),
        middle,
    );
    frame.render_widget(
        Paragraph::new(format!("{:.3} ┤", -radius)).alignment(Alignment::Right),
        bottom,
    );
}

fn draw_x_axis(frame: &mut Frame, area: Rect, plot: Rect, radius: f64) {
    let ticks = Rect {
        x: plot.x,
        width: plot.width,
        height: 1,
        ..area
    };
    let name = Rect {
        y: area.y + 1,
        ..ticks
    };
    let left = format!("{:.3}", -radius);
    let right = format!("{radius:.3}");
    let gap = usize::from(plot.width).saturating_sub(left.len() + right.len());
    frame.render_widget(
        Paragraph::new(format!("{left}{}{right}", " ".repeat(gap))),
        ticks,
    );
    frame.render_widget(
        Paragraph::new(Line::styled("x (m)", Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center),
        name,
    );
}

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Field drawn with half-block characters, two pixels per cell
struct Heatmap {
    raster: Raster,
    scale: ColorScale,
}

impl Widget for Heatmap {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            let top = usize::from(row) * 2;
            if top >= self.raster.height {
                break;
            }
            let bottom = (top + 1).min(self.raster.height - 1);
            for col in 0..area.width.min(self.raster.width as u16) {
                let c = usize::from(col);
                let upper = self.scale.color(self.raster.get(c, top));
                let lower = if bottom == top {
                    [0, 0, 0]
                } else {
                    self.scale.color(self.raster.get(c, bottom))
                };
                if let Some(cell) = buf.cell_mut(Position::new(area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK)
                        .set_fg(rgb(upper))
                        .set_bg(rgb(lower));
                }
            }
        }
    }
}

/// Vertical jet ramp with temperature ticks, hottest at the top
struct ColorBar {
    scale: ColorScale,
}

impl Widget for ColorBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title(Line::from(COLORBAR_LABEL).centered());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width < 4 {
            return;
        }

        let pixels = f64::from(inner.height) * 2.0;
        let fraction_at = |pixel: u16| 1.0 - (f64::from(pixel) + 0.5) / pixels;
        for row in 0..inner.height {
            let upper = jet_color(fraction_at(row * 2));
            let lower = jet_color(fraction_at(row * 2 + 1));
            for col in 0..3 {
                if let Some(cell) = buf.cell_mut(Position::new(inner.x + col, inner.y + row)) {
                    cell.set_char(HALF_BLOCK).set_fg(upper).set_bg(lower);
                }
            }
        }

        let ticks = [
            (0, self.scale.vmax),
            (inner.height / 2, self.scale.value_at(0.5)),
            (inner.height - 1, self.scale.vmin),
        ];
        let style = Style::default().add_modifier(Modifier::DIM);
        for (row, value) in ticks {
            buf.set_string(
                inner.x + 4,
                inner.y + row,
                format!("{value:6.1}"),
                style,
            );
        }
    }
}

fn jet_color(fraction: f64) -> Color {
    rgb(egg_cooling_core::render::jet(fraction))
}
