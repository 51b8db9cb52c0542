use super::*;
use crate::session::Outcome;
use crate::settings::Settings;

fn test_app() -> App {
    App::with_settings(Settings::default(), std::env::temp_dir())
}

fn finished_session() -> Session {
    let mut session = Session::start(GameSettings::default());
    session.set_board(vec![vec![2, 4], vec![4, 2]]);
    session.apply_state(GameState {
        is_win: false,
        is_gameover: true,
    });
    session
}

fn push(app: &App, event: ServerEvent) {
    app.events.lock().unwrap().push(event);
}

#[test]
fn failed_restart_leaves_the_finished_game_untouched() {
    let mut app = test_app();
    app.session = finished_session();
    app.request_in_flight = true;

    push(
        &app,
        ServerEvent::Restarted(Err(ApiError::Status {
            status: 502,
            message: String::new(),
        })),
    );
    app.poll_server_events(&egui::Context::default());

    // Server state is assumed unchanged, so the client keeps the finished
    // session: input stays off and the game-over dialog stays up
    assert!(!app.session.is_active());
    assert_eq!(app.session.outcome(), Some(Outcome::Loss));
    assert!(app.session.board.is_some());
    assert!(!app.request_in_flight);
    assert!(app.toast.is_some());
}

#[test]
fn successful_restart_resumes_play() {
    let mut app = test_app();
    app.session = finished_session();
    app.request_in_flight = true;

    push(
        &app,
        ServerEvent::Restarted(Ok(vec![vec![2, 0], vec![0, 0]])),
    );
    app.poll_server_events(&egui::Context::default());

    assert!(app.session.is_active());
    assert!(app.session.outcome().is_none());
    assert_eq!(app.session.tile(0, 0), 2);
    assert!(!app.request_in_flight);
}

#[test]
fn rejected_user_move_keeps_the_game_active() {
    let mut app = test_app();
    app.session = Session::start(GameSettings::default());
    app.session.set_board(vec![vec![2, 4], vec![4, 2]]);
    app.request_in_flight = true;

    push(
        &app,
        ServerEvent::UserMoved(Ok(MoveOutcome {
            response: MoveResponse {
                status: "error".to_string(),
                message: Some("No valid move".to_string()),
            },
            board: None,
            state: None,
        })),
    );
    app.poll_server_events(&egui::Context::default());

    assert!(app.session.is_active());
    assert_eq!(app.session.tile(0, 0), 2);
    assert!(!app.request_in_flight);
}

#[test]
fn ai_completion_always_releases_the_busy_flag() {
    let mut app = test_app();
    app.session = Session::start(GameSettings::default());
    app.ai_thinking = true;
    app.request_in_flight = true;

    push(
        &app,
        ServerEvent::AiMoved(Err(ApiError::Status {
            status: 500,
            message: String::new(),
        })),
    );
    app.poll_server_events(&egui::Context::default());

    assert!(!app.ai_thinking);
    assert!(!app.request_in_flight);
}
