//! The game flow state machine.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use crate::flow::event::{FlowEvent, GameMode};
use crate::flow::render::Renderer;
use crate::flow::screen::ScreenState;
use crate::game::{Board, Mark, Player, detect_win, is_full};

/// Name of the placeholder opponent pushed in single-player mode.
pub const STAND_IN_NAME: &str = "Mr Roboto";

/// The screen-flow state machine.
///
/// Owns all mutable game state: the roster of players, whose turn it
/// is, the board, and the current screen. Each call to
/// [`GameFlow::handle_event`] processes one logical input event to
/// completion, mutating state and repainting through the [`Renderer`].
///
/// Players and their cumulative win counts live for the whole process
/// run; no reachable transition returns to [`ScreenState::Start`], so
/// the roster is never rebuilt within a session.
#[derive(Debug, Getters)]
pub struct GameFlow {
    screen: ScreenState,
    players: Vec<Player>,
    current_player: usize,
    board: Board,
}

impl GameFlow {
    /// Creates a flow machine on the start screen with an empty roster.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating GameFlow");
        Self {
            screen: ScreenState::Start,
            players: Vec::new(),
            current_player: 0,
            board: Board::new(),
        }
    }

    /// Renders the initial start screen.
    #[instrument(skip(self, renderer))]
    pub fn start(&mut self, renderer: &mut dyn Renderer) {
        info!("Starting game flow");
        self.enter(ScreenState::Start, renderer);
    }

    /// Handles one logical input event.
    ///
    /// Events that do not apply to the current screen are ignored; the
    /// dispatch on `(screen, event)` is what guarantees at most one
    /// live handler per input source.
    #[instrument(skip(self, renderer))]
    pub fn handle_event(&mut self, event: FlowEvent, renderer: &mut dyn Renderer) {
        match (self.screen, event) {
            (ScreenState::Start, FlowEvent::ModeSelected(mode)) => {
                self.select_mode(mode, renderer);
            }
            (ScreenState::AddPlayer, FlowEvent::NameSubmitted(name)) => {
                self.submit_name(name, renderer);
            }
            (ScreenState::InGame, FlowEvent::CellChosen(index)) => {
                self.choose_cell(index, renderer);
            }
            (ScreenState::EndGame, FlowEvent::PlayAgain) => {
                self.play_again(renderer);
            }
            (screen, event) => {
                debug!(%screen, ?event, "Event ignored on current screen");
            }
        }
    }

    /// Applies a mode selection from the start screen.
    fn select_mode(&mut self, mode: GameMode, renderer: &mut dyn Renderer) {
        info!(mode = mode.label(), "Mode selected");
        if mode == GameMode::OnePlayer {
            self.players.push(Player::new(STAND_IN_NAME.to_string()));
        }
        self.enter(ScreenState::AddPlayer, renderer);
    }

    /// Appends a player from a submitted name, advancing to the round
    /// once the roster is full.
    fn submit_name(&mut self, name: String, renderer: &mut dyn Renderer) {
        let name = name.trim().to_string();
        if name.is_empty() {
            debug!("Ignoring empty name submission");
            return;
        }
        assert!(
            self.players.len() < 2,
            "add-player screen with a full roster"
        );
        info!(name = %name, slot = self.players.len(), "Player added");
        self.players.push(Player::new(name));
        if self.players.len() == 2 {
            self.enter(ScreenState::InGame, renderer);
        } else {
            self.enter(ScreenState::AddPlayer, renderer);
        }
    }

    /// Places the current player's mark, then evaluates win and tie.
    fn choose_cell(&mut self, index: usize, renderer: &mut dyn Renderer) {
        let mark = Mark::for_slot(self.current_player);
        if let Err(e) = self.board.place_mark(index, mark) {
            debug!(index, %e, "Placement rejected");
            return;
        }
        debug!(index, %mark, "Mark placed");
        renderer.mark_cell(index, mark);

        if let Some(line) = detect_win(&self.board, mark) {
            renderer.highlight_winning_line(line);
            let wins = self.players[self.current_player].add_win();
            info!(
                winner = %self.players[self.current_player].name(),
                wins,
                line = ?line,
                "Round won"
            );
            renderer.update_scoreboard(&self.players);
            self.board.reset();
            self.enter(ScreenState::EndGame, renderer);
        } else if is_full(&self.board) {
            info!("Round is a tie");
            self.board.reset();
            self.enter(ScreenState::EndGame, renderer);
        }

        // The turn flips even after the placement that ends the round.
        self.current_player = 1 - self.current_player;
    }

    /// Starts the next round from the end-game screen.
    fn play_again(&mut self, renderer: &mut dyn Renderer) {
        info!("Starting another round");
        self.board.reset();
        self.enter(ScreenState::InGame, renderer);
    }

    /// Transitions to `next` and paints its screen from scratch.
    fn enter(&mut self, next: ScreenState, renderer: &mut dyn Renderer) {
        debug!(from = %self.screen, to = %next, "Screen transition");
        self.screen = next;
        renderer.clear_screen();
        match next {
            ScreenState::Start => renderer.render_start_screen(),
            ScreenState::AddPlayer => {
                renderer.render_add_player_prompt(self.players.len() + 1);
            }
            ScreenState::InGame => {
                assert_eq!(
                    self.players.len(),
                    2,
                    "in-game screen requires exactly two players"
                );
                renderer.render_scoreboard(&self.players);
                renderer.render_board();
            }
            ScreenState::EndGame => renderer.render_play_again_prompt(),
            ScreenState::Exit => unreachable!("no transition produces Exit"),
        }
    }
}

impl Default for GameFlow {
    fn default() -> Self {
        Self::new()
    }
}
