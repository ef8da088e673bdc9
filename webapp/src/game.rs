use crate::theme::Theme;
use crate::utils::*;
use tresraya_core as game;
use yew::prelude::*;

/// How a single square should be drawn, derived from the engine state.
#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewSquare {
    Empty,
    Marked(game::Player),
    Winning(game::Player),
}

impl ViewSquare {
    fn glyph(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Marked(player) | Self::Winning(player) => player.glyph(),
        }
    }
}

const fn mark_class(player: game::Player) -> &'static str {
    match player {
        game::Player::X => "mark-x",
        game::Player::O => "mark-o",
    }
}

/// Round tallies for the current browser session.
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub(crate) struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Scoreboard {
    fn record(&mut self, state: game::GameState) {
        match state {
            game::GameState::Won(game::Player::X) => self.x_wins = self.x_wins.saturating_add(1),
            game::GameState::Won(game::Player::O) => self.o_wins = self.o_wins.saturating_add(1),
            game::GameState::Tied => self.ties = self.ties.saturating_add(1),
            game::GameState::InProgress => {}
        }
    }
}

pub(crate) trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::MoveOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::MoveOutcome| outcome.has_update())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    SquareClicked(game::CellIx),
    NewGame,
    ToggleTheme,
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    ix: game::CellIx,
    square: ViewSquare,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellIx>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        ix,
        square,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "square",
        match square {
            ViewSquare::Empty => classes!(),
            ViewSquare::Marked(player) => classes!("taken", mark_class(player)),
            ViewSquare::Winning(player) => classes!("taken", "win", mark_class(player)),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", ix);
        callback.emit(ix);
    });

    html! {
        <td {class} {onclick}>{square.glyph()}</td>
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::GameEngine,
    scoreboard: Scoreboard,
    theme: Theme,
}

impl GameView {
    fn square_view_at(&self, ix: game::CellIx) -> ViewSquare {
        let in_winning_line = self
            .engine
            .winning_line()
            .map_or(false, |line| line.contains(&ix));

        match self.engine.square_at(ix) {
            game::Square::Empty => ViewSquare::Empty,
            game::Square::Marked(player) if in_winning_line => ViewSquare::Winning(player),
            game::Square::Marked(player) => ViewSquare::Marked(player),
        }
    }

    fn status_text(&self) -> String {
        match self.engine.state() {
            game::GameState::InProgress => format!("{}'s Turn", self.engine.turn()),
            game::GameState::Won(player) => format!("{} Wins!", player),
            game::GameState::Tied => "Tie Game!".to_string(),
        }
    }

    fn state_class(&self) -> Classes {
        classes!(match self.engine.state() {
            game::GameState::InProgress => "in-progress",
            game::GameState::Won(_) => "win",
            game::GameState::Tied => "tie",
        })
    }

    fn is_playable(&self) -> bool {
        !self.engine.is_finished()
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            engine: game::GameEngine::new(),
            scoreboard: Scoreboard::default(),
            theme: LocalOrDefault::local_or_default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SquareClicked(ix) => {
                let outcome = self.engine.place(ix);
                log::debug!("place at {}: {:?}", ix, outcome);

                if matches!(
                    outcome,
                    Ok(game::MoveOutcome::Won | game::MoveOutcome::Tied)
                ) {
                    self.scoreboard.record(self.engine.state());
                }

                outcome.has_update()
            }
            Msg::NewGame => {
                log::debug!("new game");
                self.engine.reset();
                true
            }
            Msg::ToggleTheme => {
                self.theme = self.theme.toggled();
                Theme::apply(self.theme);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let is_playable = self.is_playable();

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });
        let cb_toggle_theme = ctx.link().callback(|_| Msg::ToggleTheme);

        html! {
            <div class="tresraya">
                <small class="theme-toggle" onclick={cb_toggle_theme}>{"◐"}</small>
                <nav>
                    <aside>{format!("X {}", self.scoreboard.x_wins)}</aside>
                    <span><button class={self.state_class()} onclick={cb_new_game}>{"Reset"}</button></span>
                    <aside>{format!("O {}", self.scoreboard.o_wins)}</aside>
                </nav>
                <small class="ties">{format!("ties {}", self.scoreboard.ties)}</small>
                <h2>{self.status_text()}</h2>
                <table id="game-board" class={is_playable.then_some("playable")}>
                    {
                        for (0..game::GRID_SIZE).map(|row| html! {
                            <tr>
                                {
                                    for (0..game::GRID_SIZE).map(|col| {
                                        let ix = game::to_cell(row, col);
                                        let square = self.square_view_at(ix);
                                        let locked = !self.engine.can_place_at(ix);
                                        let callback = ctx.link().callback(Msg::SquareClicked);
                                        html! {
                                            <SquareView {ix} {square} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_after(moves: &[game::CellIx]) -> GameView {
        let mut view = GameView {
            engine: game::GameEngine::new(),
            scoreboard: Scoreboard::default(),
            theme: Theme::default(),
        };
        for &cell in moves {
            view.engine.place(cell).unwrap();
        }
        view
    }

    #[test]
    fn status_message_follows_the_game_state() {
        assert_eq!(view_after(&[]).status_text(), "X's Turn");
        assert_eq!(view_after(&[4]).status_text(), "O's Turn");
        assert_eq!(view_after(&[0, 3, 1, 4, 2]).status_text(), "X Wins!");
        assert_eq!(
            view_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).status_text(),
            "Tie Game!"
        );
    }

    #[test]
    fn winning_squares_are_highlighted() {
        let view = view_after(&[0, 3, 1, 4, 2]);

        assert_eq!(view.square_view_at(0), ViewSquare::Winning(game::Player::X));
        assert_eq!(view.square_view_at(1), ViewSquare::Winning(game::Player::X));
        assert_eq!(view.square_view_at(3), ViewSquare::Marked(game::Player::O));
        assert_eq!(view.square_view_at(8), ViewSquare::Empty);
    }

    #[test]
    fn square_glyphs_match_the_marks() {
        let view = view_after(&[4, 0]);

        assert_eq!(view.square_view_at(4).glyph(), "X");
        assert_eq!(view.square_view_at(0).glyph(), "O");
        assert_eq!(view.square_view_at(8).glyph(), "");
    }

    #[test]
    fn scoreboard_tallies_terminal_states() {
        let mut scoreboard = Scoreboard::default();

        scoreboard.record(game::GameState::Won(game::Player::X));
        scoreboard.record(game::GameState::Won(game::Player::O));
        scoreboard.record(game::GameState::Tied);
        scoreboard.record(game::GameState::InProgress);

        assert_eq!(scoreboard.x_wins, 1);
        assert_eq!(scoreboard.o_wins, 1);
        assert_eq!(scoreboard.ties, 1);
    }

    #[test]
    fn rejected_moves_do_not_request_a_render() {
        let mut engine = game::GameEngine::new();

        assert!(engine.place(0).has_update());
        // occupied square
        assert!(!engine.place(0).has_update());
        // out of range
        assert!(!engine.place(game::CELL_COUNT).has_update());
        assert!(engine.place(1).has_update());
    }

    #[test]
    fn finished_board_is_not_playable() {
        let view = view_after(&[0, 3, 1, 4, 2]);

        assert!(!view.is_playable());
        assert!(!view.engine.can_place_at(8));
    }
}
