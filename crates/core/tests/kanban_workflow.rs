//! Board and drag gesture scenarios as the workspace page drives them.

use uplokal_core::{Board, CardGeometry, CardId, ColumnId, DragSession, NewTask, TaskLabel};

fn layout(board: &Board, column: &ColumnId, first_mid: f64, pitch: f64) -> Vec<CardGeometry> {
    board
        .cards_in(column)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(i, card)| CardGeometry {
            card: *card,
            top: first_mid + pitch * i as f64 - 30.0,
            height: 60.0,
        })
        .collect()
}

fn seeded() -> (Board, Vec<CardId>) {
    let mut board = Board::workspace();
    let todo = ColumnId::from("todo");
    let ids = ["Logo", "Brosur", "Katalog"]
        .into_iter()
        .map(|title| board.add_task(&todo, NewTask::titled(title)).unwrap())
        .collect();
    (board, ids)
}

#[test]
fn drop_between_cards_of_another_column() {
    let (mut board, ids) = seeded();
    let review = ColumnId::from("review");
    let r1 = board.add_task(&review, NewTask::titled("Legalitas")).unwrap();
    let r2 = board.add_task(&review, NewTask::titled("Sertifikat")).unwrap();

    let mut drag = DragSession::new();
    drag.begin(&board, ids[0]).unwrap();

    // review cards sit at midpoints 100 and 200
    let geometry = layout(&board, &review, 100.0, 100.0);
    let target = drag.drag_over(&mut board, &review, &geometry, 150.0).unwrap();
    assert_eq!(target, Some(r2));

    let end = drag.end(&board).unwrap();
    assert!(end.changed_column());
    assert_eq!(board.cards_in(&review).unwrap(), &[r1, ids[0], r2]);

    let todo_count = end.counts.iter().find(|c| c.column.as_str() == "todo").unwrap();
    let review_count = end.counts.iter().find(|c| c.column.as_str() == "review").unwrap();
    assert_eq!(todo_count.count, 2);
    assert_eq!(review_count.count, 3);
}

#[test]
fn drop_below_last_card_appends() {
    let (mut board, ids) = seeded();
    let todo = ColumnId::from("todo");

    let mut drag = DragSession::new();
    drag.begin(&board, ids[0]).unwrap();

    let geometry = layout(&board, &todo, 100.0, 100.0);
    assert_eq!(drag.drag_over(&mut board, &todo, &geometry, 320.0).unwrap(), None);
    drag.end(&board).unwrap();

    assert_eq!(board.cards_in(&todo).unwrap(), &[ids[1], ids[2], ids[0]]);
}

#[test]
fn repeated_drag_over_keeps_card_in_one_column() {
    let (mut board, ids) = seeded();
    let mut drag = DragSession::new();
    drag.begin(&board, ids[1]).unwrap();

    for column in ["in-progress", "done", "review", "todo", "done"] {
        let column = ColumnId::from(column);
        let geometry = layout(&board, &column, 80.0, 90.0);
        drag.drag_over(&mut board, &column, &geometry, 10.0).unwrap();

        let holders = board
            .columns()
            .iter()
            .filter(|c| c.cards.contains(&ids[1]))
            .count();
        assert_eq!(holders, 1);
    }

    let end = drag.end(&board).unwrap();
    assert_eq!(end.to.as_str(), "done");
    assert_eq!(end.counts.iter().map(|c| c.count).sum::<usize>(), 3);
}

#[test]
fn drag_into_unknown_column_leaves_board_untouched() {
    let (mut board, ids) = seeded();
    let mut drag = DragSession::new();
    drag.begin(&board, ids[0]).unwrap();

    let result = drag.drag_over(&mut board, &ColumnId::from("archived"), &[], 0.0);
    assert!(result.is_err());
    assert_eq!(board.column_of(&ids[0]).map(ColumnId::as_str), Some("todo"));
}

#[test]
fn new_task_defaults_to_design_label() {
    let mut board = Board::workspace();
    let id = board.add_task(&"todo".into(), NewTask::titled("Foto produk")).unwrap();
    let card = board.card(&id).unwrap();

    assert_eq!(card.label, TaskLabel::Design);
    assert_eq!(card.label.display_name(), "Design");
}
