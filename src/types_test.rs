use super::*;

// =============================================================
// GameSettings
// =============================================================

#[test]
fn default_settings_are_classic_2048() {
    let settings = GameSettings::default();
    assert_eq!(settings.height, 4);
    assert_eq!(settings.width, 4);
    assert_eq!(settings.win, 2048);
}

#[test]
fn settings_below_two_are_rejected() {
    for (height, width) in [(1, 4), (4, 1), (0, 0), (1, 1)] {
        let settings = GameSettings {
            height,
            width,
            win: 2048,
        };
        assert!(settings.validate().is_err(), "{height}x{width} accepted");
    }
}

#[test]
fn two_by_two_is_the_smallest_valid_board() {
    let settings = GameSettings {
        height: 2,
        width: 2,
        win: 64,
    };
    assert!(settings.validate().is_ok());
}

#[test]
fn settings_serialize_to_server_body() {
    let settings = GameSettings {
        height: 5,
        width: 3,
        win: 1024,
    };
    let json = serde_json::to_value(&settings).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"height": 5, "width": 3, "win": 1024})
    );
}

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_wire_strings() {
    assert_eq!(Direction::Up.as_str(), "Up");
    assert_eq!(Direction::Down.as_str(), "Down");
    assert_eq!(Direction::Left.as_str(), "Left");
    assert_eq!(Direction::Right.as_str(), "Right");
}

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(Direction::from_key(egui::Key::ArrowUp), Some(Direction::Up));
    assert_eq!(
        Direction::from_key(egui::Key::ArrowDown),
        Some(Direction::Down)
    );
    assert_eq!(
        Direction::from_key(egui::Key::ArrowLeft),
        Some(Direction::Left)
    );
    assert_eq!(
        Direction::from_key(egui::Key::ArrowRight),
        Some(Direction::Right)
    );
}

#[test]
fn wasd_maps_to_directions() {
    assert_eq!(Direction::from_key(egui::Key::W), Some(Direction::Up));
    assert_eq!(Direction::from_key(egui::Key::A), Some(Direction::Left));
    assert_eq!(Direction::from_key(egui::Key::S), Some(Direction::Down));
    assert_eq!(Direction::from_key(egui::Key::D), Some(Direction::Right));
}

#[test]
fn unrelated_keys_do_not_move() {
    assert_eq!(Direction::from_key(egui::Key::Enter), None);
    assert_eq!(Direction::from_key(egui::Key::Q), None);
    assert_eq!(Direction::from_key(egui::Key::Space), None);
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn move_response_with_message() {
    let response: MoveResponse =
        serde_json::from_str(r#"{"status": "success", "message": "AI moved Up"}"#).unwrap();
    assert!(response.is_success());
    assert_eq!(response.message.as_deref(), Some("AI moved Up"));
}

#[test]
fn move_response_message_is_optional() {
    let response: MoveResponse = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
    assert!(!response.is_success());
    assert!(response.message.is_none());
}

#[test]
fn board_state_parses_grid() {
    let state: BoardState =
        serde_json::from_str(r#"{"board": [[0, 2, 4], [8, 0, 0]]}"#).unwrap();
    assert_eq!(state.board, vec![vec![0, 2, 4], vec![8, 0, 0]]);
}

#[test]
fn game_state_parses_flags() {
    let state: GameState =
        serde_json::from_str(r#"{"is_win": true, "is_gameover": false}"#).unwrap();
    assert!(state.is_win);
    assert!(!state.is_gameover);
}
