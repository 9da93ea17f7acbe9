use tile_match::core::{clear_matches, Engine, EngineConfig, Grid, GridSnapshot, SequentialIds};

#[test]
fn snapshot_serializes_with_lowercase_colors_and_nulls() {
    let grid = Grid::from_rows(&["RG", ".O"], &mut SequentialIds::new());
    let snap = GridSnapshot::from_grid(&grid);
    let v: serde_json::Value = serde_json::to_value(&snap).unwrap();

    assert_eq!(v["size"], 2);
    let cells = v["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0]["color"], "red");
    assert_eq!(cells[0]["id"], 0);
    assert_eq!(cells[1]["color"], "green");
    assert!(cells[2].is_null());
    assert_eq!(cells[3]["color"], "orange");
}

#[test]
fn clear_tally_serializes_as_color_map() {
    let mut grid = Grid::from_rows(&["BBB", "RGY", "GYR"], &mut SequentialIds::new());
    let report = clear_matches(&mut grid, &[0, 1, 2]);
    let v = serde_json::to_value(report.tally).unwrap();

    assert_eq!(v["blue"], 3);
    assert!(v.get("red").is_none());
}

#[test]
fn engine_board_round_trips_through_json_text() {
    let mut engine = Engine::new(EngineConfig::default().with_seed(21)).unwrap();
    let grid = engine.create_board();
    let text = serde_json::to_string(&GridSnapshot::from(&grid)).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(v["size"], 8);
    let cells = v["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 64);
    for cell in cells {
        assert!(cell.get("id").is_some());
        let color = cell["color"].as_str().unwrap();
        assert!(["red", "blue", "green", "yellow", "purple", "orange"].contains(&color));
    }
}
