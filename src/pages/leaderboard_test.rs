use super::*;

#[test]
fn leaderboard_rows_rank_in_server_order() {
    let entries = vec![
        LeaderboardEntry {
            username: "ana".to_owned(),
            matches_played: 4,
            matches_won: 3,
            matches_drawn: 0,
            matches_lost: 1,
            total_points: 6,
            win_percentage: 75.0,
        },
        LeaderboardEntry {
            username: "bo".to_owned(),
            matches_played: 3,
            matches_won: 1,
            matches_drawn: 1,
            matches_lost: 1,
            total_points: 3,
            win_percentage: 33.33,
        },
    ];

    let rows = leaderboard_rows(&entries);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["1", "ana", "4", "3", "0", "1", "6", "75.00"]);
    assert_eq!(rows[1], vec!["2", "bo", "3", "1", "1", "1", "3", "33.33"]);
    assert!(rows.iter().all(|row| row.len() == LEADERBOARD_HEADERS.len()));
}

#[test]
fn leaderboard_rows_empty_for_no_entries() {
    assert!(leaderboard_rows(&[]).is_empty());
}
