//! The interactive terminal interface.

use crate::args::Args;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifegrid_lib::{Config, Error as LifeError, State, World};
use log::debug;
use std::{
    error::Error,
    io::{self, Write},
    time::{Duration, Instant},
};

/// Whether new generations are computed on the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Running,
    Paused,
}

/// What the main loop should do after handling a key.
enum Action {
    Redraw,
    Ignore,
    Quit,
}

/// The state of the TUI.
///
/// It owns the current generation and replaces it on every tick.
struct App {
    config: Config,
    world: World,
    gen: u64,
    status: Status,
    interval: Duration,
    last_tick: Instant,
}

impl App {
    fn new(config: Config, interval: Duration) -> Result<Self, LifeError> {
        let world = config.world()?;
        Ok(App {
            config,
            world,
            gen: 0,
            status: Status::Paused,
            interval,
            last_tick: Instant::now(),
        })
    }

    fn tick(&mut self) {
        self.world = self.world.step();
        self.gen += 1;
        self.last_tick = Instant::now();
    }

    /// Starts over from a new random world.
    ///
    /// A fixed seed is advanced first, so every restart is different
    /// but the sequence of worlds is still reproducible.
    fn restart(&mut self) -> Result<(), LifeError> {
        if let Some(seed) = self.config.seed.as_mut() {
            *seed = seed.wrapping_add(1);
        }
        self.world = self.config.world()?;
        self.gen = 0;
        self.last_tick = Instant::now();
        debug!("restarted with {} living cells", self.world.cell_count());
        Ok(())
    }

    fn pause(&mut self) {
        self.status = Status::Paused;
    }

    fn start(&mut self) {
        self.status = Status::Running;
        self.last_tick = Instant::now();
    }

    fn status_str(&self) -> &'static str {
        match self.status {
            Status::Running if self.world.is_empty() => {
                "Every cell is dead. Press [r] to restart or [q] to quit."
            }
            Status::Running => "Running... Press [space] to pause.",
            Status::Paused => {
                "Paused. Press [space] to resume, [→] to step, [r] to restart, [q] to quit."
            }
        }
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let cols = cols as usize;
        let cell_width = if self.world.size() * 2 <= cols { 2 } else { 1 };
        let (alive, dead) = if cell_width == 2 {
            ("██", "  ")
        } else {
            ("█", " ")
        };
        let visible_cols = cols / cell_width;
        let visible_rows = rows.saturating_sub(2) as usize;

        queue!(out, Clear(ClearType::All))?;
        let top = format!(
            "Gen: {}  Cells: {}  Size: {}",
            self.gen,
            self.world.cell_count(),
            self.world.size()
        );
        self.draw_bar(out, 0, &top, cols)?;
        for (y, row) in self.world.rows().take(visible_rows).enumerate() {
            let line: String = row
                .iter()
                .take(visible_cols)
                .map(|&state| if state == State::Alive { alive } else { dead })
                .collect();
            queue!(out, cursor::MoveTo(0, y as u16 + 1), Print(line))?;
        }
        self.draw_bar(out, rows.saturating_sub(1), self.status_str(), cols)?;
        out.flush()
    }

    fn draw_bar<W: Write>(&self, out: &mut W, y: u16, text: &str, cols: usize) -> io::Result<()> {
        let text: String = text.chars().take(cols).collect();
        queue!(
            out,
            cursor::MoveTo(0, y),
            SetAttribute(Attribute::Reverse),
            Print(format!("{:<width$}", text, width = cols)),
            SetAttribute(Attribute::Reset)
        )
    }

    fn confirm_quit<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        let (cols, rows) = terminal::size()?;
        self.draw_bar(
            out,
            rows.saturating_sub(1),
            "Are you sure to quit? [Y/n]",
            cols as usize,
        )?;
        out.flush()?;
        loop {
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                return Ok(matches!(
                    code,
                    KeyCode::Char('Y') | KeyCode::Char('y') | KeyCode::Enter
                ));
            }
        }
    }

    fn handle_key<W: Write>(&mut self, out: &mut W, key: KeyEvent) -> Result<Action, Box<dyn Error>> {
        if key.kind != KeyEventKind::Press {
            return Ok(Action::Ignore);
        }
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('q') | KeyCode::Esc => match self.status {
                Status::Running => {
                    self.pause();
                    self.draw(out)?;
                    if self.confirm_quit(out)? {
                        Action::Quit
                    } else {
                        Action::Redraw
                    }
                }
                Status::Paused => Action::Quit,
            },
            KeyCode::Char(' ') | KeyCode::Enter => {
                match self.status {
                    Status::Running => self.pause(),
                    Status::Paused => self.start(),
                }
                Action::Redraw
            }
            KeyCode::Right | KeyCode::Char('.') => {
                self.pause();
                self.tick();
                Action::Redraw
            }
            KeyCode::Char('r') => {
                self.restart()?;
                Action::Redraw
            }
            _ => Action::Ignore,
        };
        Ok(action)
    }

    fn main_loop<W: Write>(&mut self, out: &mut W) -> Result<(), Box<dyn Error>> {
        self.draw(out)?;
        loop {
            let event = match self.status {
                Status::Running => {
                    let timeout = self.interval.saturating_sub(self.last_tick.elapsed());
                    if event::poll(timeout)? {
                        Some(event::read()?)
                    } else {
                        None
                    }
                }
                Status::Paused => Some(event::read()?),
            };
            match event {
                None => self.tick(),
                Some(Event::Key(key)) => match self.handle_key(out, key)? {
                    Action::Quit => break,
                    Action::Ignore => continue,
                    Action::Redraw => (),
                },
                Some(Event::Resize(_, _)) => (),
                Some(_) => continue,
            }
            self.draw(out)?;
        }
        Ok(())
    }
}

/// Runs the TUI until the user quits, then prints the last generation.
pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(args.config, args.interval)?;
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let result = app.main_loop(&mut stdout);
    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result?;

    println!("Gen: {}  Cells: {}", app.gen, app.world.cell_count());
    print!("{}", app.world);
    Ok(())
}
