mod common;

use common::{league, team};
use efootball_board::controller::standings::{
    StandingsSource, TableZone, league_standings, rank_all, rank_backend_rows, rank_standings,
};
use efootball_board::model::TeamRecord;

#[test]
fn test_points_then_goal_difference_then_goals_for() -> Result<(), Box<dyn std::error::Error>> {
    let teams = vec![
        team("A", 10, 5, 3),
        team("B", 10, 8, 6),
        team("C", 12, 1, 5),
    ];
    let lg = league("1", "L", &["A", "B", "C"]);

    let rows = rank_standings(&teams, &lg);
    let names: Vec<&str> = rows.iter().map(|r| r.team.team_name.as_str()).collect();

    // C leads on points; A and B are level on points and goal difference,
    // B scored more
    assert_eq!(names, vec!["C", "B", "A"]);
    assert_eq!(
        rows.iter().map(|r| r.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    Ok(())
}

#[test]
fn test_full_ties_keep_input_order() {
    let teams = vec![
        team("First", 9, 4, 4),
        team("Second", 9, 4, 4),
        team("Third", 9, 4, 4),
    ];
    let lg = league("1", "L", &["Third", "Second", "First"]);

    let rows = rank_standings(&teams, &lg);
    let names: Vec<&str> = rows.iter().map(|r| r.team.team_name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_only_members_are_ranked() {
    let teams = vec![
        team("In", 3, 1, 0),
        team("Out", 30, 10, 0),
        team("AlsoIn", 1, 0, 0),
    ];
    let lg = league("1", "L", &["In", "AlsoIn", "Missing"]);

    let rows = rank_standings(&teams, &lg);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.team.team_name != "Out"));
}

#[test]
fn test_empty_league_gives_empty_table() {
    let teams = vec![team("A", 3, 1, 0)];
    let lg = league("1", "Empty", &[]);
    assert!(rank_standings(&teams, &lg).is_empty());
}

#[test]
fn test_duplicate_team_names_keep_first_record() {
    let teams = vec![team("Dup", 1, 0, 0), team("Dup", 20, 9, 0), team("Other", 5, 2, 1)];
    let lg = league("1", "L", &["Dup", "Other"]);

    let rows = rank_standings(&teams, &lg);
    assert_eq!(rows.len(), 2);
    let dup = rows.iter().find(|r| r.team.team_name == "Dup");
    assert_eq!(dup.map(|r| r.team.points), Some(1));
}

#[test]
fn test_table_is_non_increasing_in_points() {
    let users = common::users();
    let leagues = common::leagues();
    let rows = rank_standings(&users, &leagues[0]);

    assert_eq!(rows.len(), 6);
    assert!(rows.windows(2).all(|w| w[0].team.points >= w[1].team.points));
    assert_eq!(rows[0].team.team_name, "Red Lions");
    // level on 10 points, Blue Sharks have the better goal difference
    assert_eq!(rows[1].team.team_name, "Blue Sharks");
    assert_eq!(rows[2].team.team_name, "Green FC");
}

#[test]
fn test_zones() {
    let users = common::users();
    let leagues = common::leagues();
    let rows = rank_standings(&users, &leagues[0]);
    let zones: Vec<TableZone> = rows.iter().map(|r| r.zone).collect();
    assert_eq!(
        zones,
        vec![
            TableZone::Playoff,
            TableZone::Playoff,
            TableZone::Playoff,
            TableZone::Playoff,
            TableZone::Relegation,
            TableZone::Relegation,
        ]
    );

    // a small league never relegates its playoff places
    let small = rank_standings(&users, &leagues[1]);
    assert!(small.iter().all(|r| r.zone == TableZone::Playoff));
}

#[test]
fn test_backend_rows_are_scoped_and_re_ranked() {
    let rows = common::standings();
    let leagues = common::leagues();

    let ranked = rank_backend_rows(&rows, &leagues[0]);
    let names: Vec<&str> = ranked.iter().map(|r| r.team.team_name.as_str()).collect();
    // backend ranks are 3, 1, 2 but the local order wins
    assert_eq!(names, vec!["Blue Sharks", "Red Lions", "Green FC"]);
    assert_eq!(ranked[0].team.rank, Some(3));

    let cup = rank_backend_rows(&rows, &leagues[1]);
    assert_eq!(cup.len(), 1);
    assert_eq!(cup[0].team.points, 6);
}

#[test]
fn test_league_standings_falls_back_to_users() {
    let users = common::users();
    let leagues = common::leagues();
    let backend = common::standings();

    let derived = league_standings(&users, None, &leagues[0]);
    assert_eq!(derived.source, StandingsSource::Derived);
    assert_eq!(derived.rows.len(), 6);

    let official = league_standings(&users, Some(backend.as_slice()), &leagues[0]);
    assert_eq!(official.source, StandingsSource::Backend);
    assert_eq!(official.rows.len(), 3);

    // backend rows that cover other leagues only
    let unrelated: Vec<TeamRecord> = backend
        .into_iter()
        .filter(|r| r.league_id.as_ref().map(|id| id.as_str()) == Some("2"))
        .collect();
    let fallback = league_standings(&users, Some(unrelated.as_slice()), &leagues[0]);
    assert_eq!(fallback.source, StandingsSource::Derived);
}

#[test]
fn test_rank_all_orders_every_record() {
    let users = common::users();
    let ranked = rank_all(&users);
    assert_eq!(ranked.len(), users.len());
    assert_eq!(ranked[0].team_name, "Red Lions");
    assert_eq!(ranked[ranked.len() - 1].team_name, "Night Owls");
}
