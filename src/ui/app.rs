use crate::ai::{Agent, NegamaxAgent, RandomAgent};
use crate::config::{AppConfig, PlayerKind};
use crate::game::{GameOutcome, GameState, MoveError, Player, TurnSummary, PITS_PER_SIDE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Who controls a side of the board.
enum Seat {
    Human,
    Machine(Box<dyn Agent>),
}

impl Seat {
    fn from_kind(kind: PlayerKind, config: &AppConfig) -> Seat {
        match kind {
            PlayerKind::Human => Seat::Human,
            PlayerKind::Negamax => Seat::Machine(Box::new(NegamaxAgent::new(config.search.depth))),
            PlayerKind::Random => Seat::Machine(Box::new(RandomAgent::new())),
        }
    }
}

pub struct App {
    game_state: GameState,
    south: Seat,
    north: Seat,
    selected_pit: usize,
    should_quit: bool,
    message: Option<String>,
    move_delay: Duration,
    mode: String,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: GameState::initial(),
            south: Seat::from_kind(config.players.south, config),
            north: Seat::from_kind(config.players.north, config),
            selected_pit: 0,
            should_quit: false,
            message: None,
            move_delay: Duration::from_millis(config.ui.move_delay_ms),
            mode: format!(
                "{} vs {}",
                config.players.south.name(),
                config.players.north.name()
            ),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.machine_to_move() {
                // Let the last move stay on screen; a key press during the
                // pause is still handled before the machine sows.
                if event::poll(self.move_delay)? {
                    if let Event::Key(key) = event::read()? {
                        self.handle_key(key);
                    }
                } else {
                    self.machine_move();
                }
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn seat(&self, side: Player) -> &Seat {
        match side {
            Player::South => &self.south,
            Player::North => &self.north,
        }
    }

    fn seat_mut(&mut self, side: Player) -> &mut Seat {
        match side {
            Player::South => &mut self.south,
            Player::North => &mut self.north,
        }
    }

    fn machine_to_move(&self) -> bool {
        if self.game_state.is_terminal() {
            return false;
        }
        matches!(
            self.seat(self.game_state.current_player()),
            Seat::Machine(_)
        )
    }

    fn machine_move(&mut self) {
        let state = self.game_state;
        let pit = match self.seat_mut(state.current_player()) {
            Seat::Machine(agent) => agent.choose(&state),
            Seat::Human => return,
        };
        self.play(pit);
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_pit > 0 {
                    self.selected_pit -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_pit < PITS_PER_SIDE - 1 {
                    self.selected_pit += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !self.machine_to_move() {
                    self.play(self.selected_pit);
                }
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::initial();
                self.selected_pit = 0;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Apply one move for the side to move and update the message line.
    fn play(&mut self, pit: usize) {
        let mover = self.game_state.current_player();
        match self.game_state.apply_move_mut(pit) {
            Ok(summary) => {
                self.message = Some(self.turn_message(mover, pit, summary));
            }
            Err(MoveError::EmptyPit) => {
                self.message = Some("Pits with no seeds cannot be chosen.".to_string());
            }
            Err(MoveError::InvalidPit) => {
                self.message = Some(format!("Choose a pit number in [1, {}].", PITS_PER_SIDE));
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' for a new game.".to_string());
            }
        }
    }

    fn turn_message(&self, mover: Player, pit: usize, summary: TurnSummary) -> String {
        let mut msg = if summary.captured == 0 {
            format!("{} sows pit {} and captures no seeds.", mover.name(), pit + 1)
        } else {
            format!(
                "{} sows pit {} and captures {} seeds.",
                mover.name(),
                pit + 1,
                summary.captured
            )
        };
        if let Some(swept) = summary.swept {
            msg.push_str(&format!(
                "  {} sweeps the remaining {} seeds.",
                mover.other().name(),
                swept
            ));
        }
        match self.game_state.outcome() {
            Some(GameOutcome::Winner(side)) => {
                msg.push_str(&format!(
                    "  {} has captured {} seeds and wins!",
                    side.name(),
                    self.game_state.board().score(side)
                ));
            }
            Some(GameOutcome::Draw) => {
                msg.push_str("  Both sides hold 24 seeds: a draw.");
            }
            None => {}
        }
        msg
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let selected = if self.machine_to_move() || self.game_state.is_terminal() {
            None
        } else {
            Some(self.selected_pit)
        };
        super::game_view::render(frame, &self.game_state, selected, &self.message, &self.mode);
    }
}
