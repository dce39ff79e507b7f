//! End-to-end tests of the terminal front end without a real terminal.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use std::time::Duration;
use tictac::{HitMap, Orchestrator, Screen, UiAction, draw, map_event};
use tictac_core::{Board, EngineSettings, FirstMove, GameEngine, Marker, Mode, Phase};
use tokio::time::timeout;

fn render(terminal: &mut Terminal<TestBackend>, orch: &Orchestrator) -> HitMap {
    let mut hits = HitMap::default();
    terminal
        .draw(|frame| hits = draw(frame, orch.app()))
        .expect("Draw failed");
    hits
}

fn click_on(rect: Rect) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x + rect.width / 2,
        row: rect.y + rect.height / 2,
        modifiers: KeyModifiers::NONE,
    })
}

/// Renders, then clicks the middle of whatever `pick` selects.
fn click(
    terminal: &mut Terminal<TestBackend>,
    orch: &mut Orchestrator,
    pick: impl Fn(&HitMap) -> Option<Rect>,
) {
    let hits = render(terminal, orch);
    let rect = pick(&hits).expect("Nothing to click");
    let action =
        map_event(&click_on(rect), &hits, orch.app().screen()).expect("Click missed");
    orch.dispatch(action);
}

#[tokio::test]
async fn test_click_through_a_two_player_round() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("Terminal failed");
    let mut orch = Orchestrator::new(GameEngine::seeded(EngineSettings::default(), 1));

    click(&mut terminal, &mut orch, |hits| {
        hits.mode_buttons
            .iter()
            .find(|(mode, _)| *mode == Mode::TwoPlayer)
            .map(|(_, rect)| *rect)
    });
    assert_eq!(orch.app().screen(), Screen::Board);

    for index in [0, 3, 1, 4, 2] {
        click(&mut terminal, &mut orch, |hits| {
            hits.cells.iter().find(|(i, _)| *i == index).map(|(_, rect)| *rect)
        });
    }
    assert!(orch.engine().phase().winner().is_some());
    assert_eq!(orch.app().score_line(), "Wins: 1 | Losses: 0");

    // Clicks after the round ends change nothing.
    let board = orch.engine().board().clone();
    click(&mut terminal, &mut orch, |hits| {
        hits.cells.iter().find(|(i, _)| *i == 8).map(|(_, rect)| *rect)
    });
    assert_eq!(orch.engine().board(), &board);

    // Restart goes back to the menu and keeps the tally.
    click(&mut terminal, &mut orch, |hits| hits.restart);
    assert_eq!(orch.app().screen(), Screen::ModeMenu);
    assert_eq!(orch.engine().phase(), Phase::AwaitingModeSelection);
    assert_eq!(orch.app().score_line(), "Wins: 1 | Losses: 0");
}

#[tokio::test]
async fn test_single_player_against_the_computer() {
    let settings = EngineSettings::default()
        .with_first_move(FirstMove::Human)
        .with_cpu_delay(Duration::ZERO);
    let mut orch = Orchestrator::new(GameEngine::seeded(settings, 99));
    orch.dispatch(UiAction::SelectMode(Mode::SinglePlayer));
    assert_eq!(orch.app().status_line(), "Player 1's turn");

    // Keep taking the lowest free cell until the round ends.
    while !orch.engine().phase().is_finished() {
        let index = orch.engine().board().empty_indices()[0];
        orch.dispatch(UiAction::Play(index));
        if orch.engine().phase().is_finished() {
            break;
        }
        assert!(orch.app().is_thinking());
        timeout(Duration::from_secs(1), orch.await_computer())
            .await
            .expect("Computer never moved");
    }

    let board = orch.engine().board();
    let x = board.count(Marker::X);
    let o = board.count(Marker::O);
    assert!(x == o || x == o + 1);
    assert!(orch.engine().score().decided() <= 1);
}

#[tokio::test]
async fn test_rematch_keeps_mode() {
    let mut orch = Orchestrator::new(GameEngine::seeded(EngineSettings::default(), 4));
    orch.dispatch(UiAction::Rematch);
    assert_eq!(orch.app().screen(), Screen::ModeMenu);

    orch.dispatch(UiAction::SelectMode(Mode::TwoPlayer));
    orch.dispatch(UiAction::Play(4));
    orch.dispatch(UiAction::Rematch);
    assert_eq!(orch.engine().mode(), Some(Mode::TwoPlayer));
    assert_eq!(orch.engine().board(), &Board::new());
    assert_eq!(orch.app().screen(), Screen::Board);
}
