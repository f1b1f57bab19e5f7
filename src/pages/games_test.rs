use super::*;

#[test]
fn action_label_maps_backend_statuses() {
    assert_eq!(action_label("available"), "Play");
    assert_eq!(action_label("pending"), "Resume");
    assert_eq!(action_label("completed"), "Completed");
    assert_eq!(action_label("archived"), "Open");
}

#[test]
fn completed_games_are_not_playable() {
    let game = |status: &str| GameSummary { game_id: "1".to_owned(), status: status.to_owned() };
    assert!(is_playable(&game("available")));
    assert!(is_playable(&game("pending")));
    assert!(!is_playable(&game("completed")));
}
