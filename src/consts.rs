//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Update rate of the game clock
pub(crate) const TICKS_PER_SECOND: u16 = 6;

/// Time between movements of the snake
pub(crate) const TICK_PERIOD: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

/// Number of ticks the end screen counts down before replay input is
/// accepted (a two-second delay)
pub(crate) const ENDSCREEN_TICKS: u16 = 2 * TICKS_PER_SECOND;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Number of tiles the snake occupies before any apples have been eaten,
/// head included
pub(crate) const INITIAL_SNAKE_LENGTH: usize = 4;

/// Glyph for the snake's head when it is heading north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is heading south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is heading east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '>';

/// Glyph for the snake's head when it is heading west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '<';

/// Glyph for the snake's head before the first move
pub(crate) const SNAKE_HEAD_IDLE_SYMBOL: char = 'o';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the apple
pub(crate) const APPLE_SYMBOL: char = '●';

/// Glyph for the snake's head after a collision
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style patched over the board on the end screen to darken it
pub(crate) const ENDSCREEN_DIM_STYLE: Style = Style::new().add_modifier(Modifier::DIM);
