//! Retained view model behind the [`Renderer`] boundary.

use crossterm::event::KeyCode;
use ratatui::{Frame, layout::Rect};
use tracing::debug;

use crate::flow::{GameMode, Renderer};
use crate::game::{Mark, Player, WinLine};

use super::input;
use super::ui;

/// What the terminal is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    /// Nothing rendered (between clear and the next render call).
    Blank,
    /// Mode selection.
    Start,
    /// Name entry.
    AddPlayer {
        /// 1-based index of the player being named.
        prompt_index: usize,
    },
    /// Board plus scoreboard.
    Round,
    /// The "play again" confirm control.
    PlayAgain,
}

/// Terminal renderer: a retained view model painted once per frame.
///
/// The flow machine mutates this model through the [`Renderer`] trait;
/// the event loop paints it with ratatui widgets. Drawing records the
/// screen rectangles of interactive elements (mode options, cells, the
/// play-again control) so mouse clicks can be hit-tested; clicks that
/// land anywhere else are ignored.
pub struct TuiRenderer {
    view: View,
    cells: [Option<Mark>; 9],
    win_line: Option<WinLine>,
    scoreboard: Vec<(String, u32)>,
    name_input: String,
    menu_index: usize,
    cursor: usize,
    option_areas: [Rect; 2],
    cell_areas: [Rect; 9],
    again_area: Rect,
}

impl TuiRenderer {
    /// Creates an empty renderer showing nothing.
    pub fn new() -> Self {
        Self {
            view: View::Blank,
            cells: [None; 9],
            win_line: None,
            scoreboard: Vec::new(),
            name_input: String::new(),
            menu_index: 0,
            cursor: 4,
            option_areas: [Rect::default(); 2],
            cell_areas: [Rect::default(); 9],
            again_area: Rect::default(),
        }
    }

    /// Paints the current view model into the frame.
    ///
    /// Also refreshes the interactive-element rectangles used for
    /// mouse hit-testing.
    pub fn draw(&mut self, frame: &mut Frame) {
        match self.view {
            View::Blank => {}
            View::Start => {
                self.option_areas = ui::draw_start(frame, self.menu_index);
            }
            View::AddPlayer { prompt_index } => {
                ui::draw_add_player(frame, prompt_index, &self.name_input);
            }
            View::Round => {
                self.cell_areas = ui::draw_round(
                    frame,
                    &self.cells,
                    self.win_line,
                    self.cursor,
                    &self.scoreboard,
                );
            }
            View::PlayAgain => {
                self.again_area = ui::draw_play_again(frame);
            }
        }
    }

    pub(crate) fn view(&self) -> View {
        self.view
    }

    // ── Start-screen menu ─────────────────────────────────────────

    pub(crate) fn menu_previous(&mut self) {
        self.menu_index = self.menu_index.saturating_sub(1);
    }

    pub(crate) fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1).min(1);
    }

    pub(crate) fn selected_mode(&self) -> GameMode {
        match self.menu_index {
            0 => GameMode::OnePlayer,
            _ => GameMode::TwoPlayers,
        }
    }

    pub(crate) fn option_at(&self, column: u16, row: u16) -> Option<GameMode> {
        if hit(self.option_areas[0], column, row) {
            Some(GameMode::OnePlayer)
        } else if hit(self.option_areas[1], column, row) {
            Some(GameMode::TwoPlayers)
        } else {
            None
        }
    }

    // ── Name entry ────────────────────────────────────────────────

    pub(crate) fn push_input(&mut self, c: char) {
        self.name_input.push(c);
    }

    pub(crate) fn pop_input(&mut self) {
        self.name_input.pop();
    }

    /// Takes the typed name, leaving the field empty.
    pub(crate) fn take_input(&mut self) -> String {
        std::mem::take(&mut self.name_input)
    }

    // ── Board cursor and hit-testing ──────────────────────────────

    pub(crate) fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cell_areas
            .iter()
            .position(|area| hit(*area, column, row))
    }

    pub(crate) fn again_at(&self, column: u16, row: u16) -> bool {
        hit(self.again_area, column, row)
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TuiRenderer {
    fn clear_screen(&mut self) {
        debug!("Clearing screen");
        self.view = View::Blank;
        self.cells = [None; 9];
        self.win_line = None;
        self.scoreboard.clear();
        self.name_input.clear();
        self.menu_index = 0;
        self.cursor = 4;
        self.option_areas = [Rect::default(); 2];
        self.cell_areas = [Rect::default(); 9];
        self.again_area = Rect::default();
    }

    fn render_start_screen(&mut self) {
        self.view = View::Start;
    }

    fn render_add_player_prompt(&mut self, prompt_index: usize) {
        self.view = View::AddPlayer { prompt_index };
    }

    fn render_board(&mut self) {
        self.cells = [None; 9];
        self.win_line = None;
        self.view = View::Round;
    }

    fn mark_cell(&mut self, index: usize, mark: Mark) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Some(mark);
        }
    }

    fn highlight_winning_line(&mut self, line: WinLine) {
        self.win_line = Some(line);
    }

    fn render_scoreboard(&mut self, players: &[Player]) {
        self.scoreboard = players
            .iter()
            .map(|p| (p.name().clone(), *p.wins()))
            .collect();
    }

    fn update_scoreboard(&mut self, players: &[Player]) {
        // Retained model: the incremental update rewrites the rows.
        self.render_scoreboard(players);
    }

    fn render_play_again_prompt(&mut self) {
        self.view = View::PlayAgain;
    }
}

fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
