mod apple;
mod direction;
mod grid;
mod snake;
use self::apple::Apple;
use self::direction::Direction;
use self::grid::{Grid, Tile};
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::highscore::{self, SaveError};
use crate::util::{center_rect, get_display_area, Globals};
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    globals: Globals,
    grid: Grid,
    snake: Snake,
    apple: Option<Apple>,
    /// The best score on record, session-local until committed to disk
    best: u32,
    /// Is there a best score that has not been written to disk yet?
    new_best: bool,
    /// The most recent turn requested since the last tick
    pending_turn: Option<Direction>,
    state: GameState,
    warning: Option<Warning>,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals, best: u32, warning: Option<Warning>) -> Self {
        Game::new_with_rng(globals, best, warning, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(
        globals: Globals,
        best: u32,
        warning: Option<Warning>,
        mut rng: R,
    ) -> Game<R> {
        let grid = Grid::STANDARD;
        let snake = Snake::starting();
        let apple = Apple::place(grid, &snake, &mut rng);
        Game {
            rng,
            globals,
            grid,
            snake,
            apple,
            best,
            new_best: false,
            pending_turn: None,
            state: GameState::Active,
            warning,
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.ticking() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + consts::TICK_PERIOD);
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Run one tick of the game clock
    fn advance(&mut self) {
        match self.state {
            GameState::Active => self.step(),
            GameState::Ended {
                ref mut countdown, ..
            } => *countdown = countdown.saturating_sub(1),
        }
    }

    /// One movement update: apply the pending turn, move the snake, and check
    /// the collision classes in fixed order (apple, self, boundary).
    fn step(&mut self) {
        if let Some(requested) = self.pending_turn.take() {
            self.snake.turn(requested);
        }
        self.snake.advance();
        let head = self.snake.head();
        if self.apple.is_some_and(|a| a.pos() == head) {
            self.snake.grow();
            self.apple = Apple::place(self.grid, &self.snake, &mut self.rng);
            if self.apple.is_none() {
                self.end(EndReason::BoardFull);
            }
        } else if self.snake.overlaps_head() {
            self.end(EndReason::Collision);
        } else if !self.grid.contains(head) {
            self.end(EndReason::Collision);
        }
        let score = self.score();
        if score >= self.best {
            self.best = score;
            self.new_best = true;
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        let key = event.as_key_press_event()?;
        let cmd = Command::from_key_event(key);
        if let Some(ref warning) = self.warning {
            match cmd.and_then(|c| warning.handle_command(c)) {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => return Some(Screen::Quit),
                None => (),
            }
            return None;
        }
        match self.state {
            GameState::Active => match cmd? {
                Command::Quit | Command::Esc | Command::Q => return self.try_quit(),
                Command::Up => self.pending_turn = Some(Direction::North),
                Command::Down => self.pending_turn = Some(Direction::South),
                Command::Left => self.pending_turn = Some(Direction::West),
                Command::Right => self.pending_turn = Some(Direction::East),
                Command::Enter => (),
            },
            GameState::Ended { countdown, .. } => match (cmd, countdown) {
                (Some(Command::Quit | Command::Esc | Command::Q), _) => return self.try_quit(),
                // Any other key restarts, but only once the countdown is over
                (_, 0) => self.reset(),
                _ => (),
            },
        }
        None
    }

    /// Start the game over from the fixed starting configuration, committing
    /// a pending best score first
    fn reset(&mut self) {
        if let Err(e) = self.commit_best() {
            self.warning = Some(Warning::from(e));
        }
        self.new_best = false;
        self.snake = Snake::starting();
        self.pending_turn = None;
        self.apple = Apple::place(self.grid, &self.snake, &mut self.rng);
        self.state = GameState::Active;
        self.next_tick = None;
    }

    /// Commit a pending best score and quit.  If the commit fails, stay in
    /// the game and show the error instead.
    fn try_quit(&mut self) -> Option<Screen> {
        match self.commit_best() {
            Ok(()) => Some(Screen::Quit),
            Err(e) => {
                self.warning = Some(Warning::from(e));
                None
            }
        }
    }

    fn commit_best(&mut self) -> Result<(), SaveError> {
        if self.new_best && self.globals.save_high_score {
            highscore::save(self.globals.high_score_file.as_deref(), self.best)?;
            self.new_best = false;
        }
        Ok(())
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn score(&self) -> u32 {
        u32::try_from(self.snake.target_len() - consts::INITIAL_SNAKE_LENGTH).unwrap_or(u32::MAX)
    }

    fn end(&mut self, reason: EndReason) {
        self.state = GameState::Ended {
            reason,
            countdown: consts::ENDSCREEN_TICKS,
        };
    }

    fn ticking(&self) -> bool {
        self.warning.is_none()
            && match self.state {
                GameState::Active => true,
                GameState::Ended { countdown, .. } => countdown > 0,
            }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" Score: {}    Best: {}", self.score(), self.best),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let mut block_size = self.grid.size();
        block_size.width = block_size.width.saturating_add(2);
        block_size.height = block_size.height.saturating_add(2);
        let block_area = center_rect(board_area, block_size);
        Block::bordered()
            .border_style(self.globals.theme.border_style())
            .render(block_area, buf);

        let mut board = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &tile in self.snake.body() {
            board.draw_cell(tile, consts::SNAKE_BODY_SYMBOL, self.globals.theme.snake_style());
        }
        if let Some(ref apple) = self.apple {
            board.draw_cell(apple.pos(), consts::APPLE_SYMBOL, self.globals.theme.apple_style());
        }
        // Draw the head last so that a collision marker overwrites whatever
        // the head ran into
        if let GameState::Ended {
            reason: EndReason::Collision,
            ..
        } = self.state
        {
            board.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            board.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                self.globals.theme.snake_style(),
            );
        }

        if let GameState::Ended { reason, countdown } = self.state {
            buf.set_style(block_area, consts::ENDSCREEN_DIM_STYLE);
            let outcome = match reason {
                EndReason::Collision => " — GAME OVER —",
                EndReason::BoardFull => " — YOU WIN —",
            };
            let mut msg1 = Line::from(outcome);
            if self.new_best {
                msg1.push_span(Span::styled("  New best!", consts::KEY_STYLE));
            }
            msg1.render(msg1_area, buf);
            if countdown == 0 {
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("any key", consts::KEY_STYLE),
                    Span::raw(" to play again — "),
                    Span::styled("Esc", consts::KEY_STYLE),
                    Span::raw(" quits"),
                ])
                .render(msg2_area, buf);
            }
        }

        if let Some(ref warning) = self.warning {
            warning.render(display, buf);
        }
    }
}

/// Adapter for drawing in tile coordinates within the playing-field area.  A
/// tile one step outside the field lands on the surrounding border, which is
/// where a boundary-collision marker belongs.
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, tile: Tile, symbol: char, style: Style) {
        let x = i32::from(self.area.x) + i32::from(tile.x) - 1;
        let y = i32::from(self.area.y) + i32::from(tile.y) - 1;
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Active,
    /// A run is over; once `countdown` reaches 0, replay input is accepted.
    Ended { reason: EndReason, countdown: u16 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum EndReason {
    /// The snake ran into itself or a wall
    Collision,
    /// The snake filled the board and there is nowhere left to place an apple
    BoardFull,
}
