//! Display hooks driven by JSON dumps shaped like debugger variables.

use lens_host::{HostError, Inspector, SnapshotLayout};
use serde_json::{json, Value};

fn startpos_dump() -> Value {
    json!({
        "white_pawns": "0x000000000000FF00",
        "white_knights": 66,
        "white_bishops": 36,
        "white_rooks": 129,
        "white_queens": 8,
        "white_king": 16,
        "white_pieces": 65535,
        "black_pawns": "0x00FF000000000000",
        "black_knights": "0x4200000000000000",
        "black_bishops": "0x2400000000000000",
        "black_rooks": "0x8100000000000000",
        "black_queens": "0x0800000000000000",
        "black_king": "0x1000000000000000",
        "en_passant_target": { "None": null },
        "white_castling_rights": "All",
        "black_castling_rights": 0,
        "halfmove_clock": 0,
        "fullmove_number": 1,
        "white_to_move": true
    })
}

#[test]
fn start_position_dump() {
    let inspector = Inspector::default();
    assert_eq!(
        inspector.format_position(&startpos_dump()),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
}

#[test]
fn read_position_matches_codec_startpos() {
    let position = Inspector::default().read_position(&startpos_dump()).unwrap();
    assert_eq!(position, lens_codec::PositionSnapshot::startpos());
}

#[test]
fn missing_side_to_move() {
    let mut dump = startpos_dump();
    dump.as_object_mut().unwrap().remove("white_to_move");
    assert_eq!(
        Inspector::default().read_position(&dump),
        Err(HostError::MissingField("white_to_move".to_string()))
    );
}

#[test]
fn side_to_move_as_text() {
    let inspector = Inspector::default();
    let mut dump = startpos_dump();
    dump["white_to_move"] = json!("false");
    assert_eq!(
        inspector.format_position(&dump),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
    );
    dump["white_to_move"] = json!("true");
    assert_eq!(
        inspector.read_position(&dump),
        Ok(lens_codec::PositionSnapshot::startpos())
    );
}

#[test]
fn move_mask_with_digit_separators() {
    let inspector = Inspector::default();
    assert_eq!(inspector.format_move(&json!({ "mask": "0x07_0c" })), "e2e4");
    assert_eq!(inspector.format_move(&json!({ "mask": " 1_804 " })), "e2e4");
}

#[test]
fn renamed_fields_through_layout() {
    let layout: SnapshotLayout = serde_json::from_value(json!({
        "move_list_moves": "inner",
        "move_list_len": "count",
        "move_list_items": "data",
        "move_mask": "bits"
    }))
    .unwrap();
    let inspector = Inspector::new(layout);
    let list = json!({
        "inner": {
            "count": 3,
            "data": [{ "bits": 1804 }, { "bits": 1739 }, { "bits": 1350 }, { "bits": 0 }]
        }
    });
    assert_eq!(inspector.format_move_list(&list), "MoveList (len = 3)");
    assert_eq!(
        inspector.expand_move_list(&list),
        vec!["e2e4", "d2d4", "g1f3"]
    );
}

#[test]
fn empty_move_list() {
    let inspector = Inspector::default();
    let list = json!({ "moves": { "len": 0, "xs": [] } });
    assert_eq!(inspector.format_move_list(&list), "MoveList (len = 0)");
    assert!(inspector.expand_move_list(&list).is_empty());
    assert!(inspector.read_move_list(&list).unwrap().is_empty());
}

#[test]
fn flag_bits_are_not_rendered() {
    // e7e8 with promotion flags in the top nibble
    let mask = 52 | (60 << 6) | (0b1011 << 12);
    assert_eq!(Inspector::default().format_move(&json!({ "mask": mask })), "e7e8");
}

#[test]
fn hooks_are_repeatable() {
    let inspector = Inspector::default();
    let dump = startpos_dump();
    assert_eq!(inspector.format_position(&dump), inspector.format_position(&dump));
}
