#![cfg(target_arch = "wasm32")]

use blokburst_web::WebGame;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn fresh_game_snapshot_is_empty_and_stocked() {
    let game = WebGame::new(8, 3, 42).unwrap();
    assert_eq!(game.score(), 0);
    assert!(!game.is_over());

    let snapshot: serde_json::Value = serde_json::from_str(&game.snapshot()).unwrap();
    assert_eq!(snapshot["size"], 8);
    assert_eq!(snapshot["choices"].as_array().unwrap().len(), 3);
    assert!(snapshot["grid"][0][0].is_null());
}

#[wasm_bindgen_test]
fn moves_flow_through_the_boundary() {
    let mut game = WebGame::new(8, 3, 42).unwrap();
    let snapshot: serde_json::Value = serde_json::from_str(&game.snapshot()).unwrap();
    let id = snapshot["choices"][0]["id"].as_u64().unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&game.apply_move(id, 2, 2).unwrap()).unwrap();
    assert_eq!(report["points"], 0);

    // same id again is stale now
    assert!(game.apply_move(id, 5, 5).is_err());

    game.restart().unwrap();
    assert_eq!(game.score(), 0);
}
