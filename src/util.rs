use crate::config::{Config, Theme};
use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::path::PathBuf;

/// Values shared by the whole session: the resolved theme and the high-score
/// persistence settings.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Globals {
    pub(crate) theme: Theme,
    pub(crate) high_score_file: Option<PathBuf>,
    pub(crate) save_high_score: bool,
}

impl Globals {
    pub(crate) fn from_config(config: &Config) -> Globals {
        Globals {
            theme: config.theme,
            high_score_file: config.high_score_file().map(|p| p.into_owned()),
            save_high_score: config.files.save_high_score,
        }
    }
}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    let [display] = Layout::horizontal([consts::DISPLAY_SIZE.width])
        .flex(Flex::Center)
        .areas(buffer_area);
    let [display] = Layout::vertical([consts::DISPLAY_SIZE.height])
        .flex(Flex::Center)
        .areas(display);
    display
}

/// Center a rectangle of the given size within `area`
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
