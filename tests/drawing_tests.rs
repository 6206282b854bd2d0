//! End-to-End-Tests der Zeichen-Zustandsmaschine über den Controller.

use approx::assert_relative_eq;
use glam::Vec2;
use turtle_sketchpad::{AppController, AppIntent, AppState, Direction, Pen};

fn drive(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

#[test]
fn test_scenario_forward_from_initial_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(&mut controller, &mut state, vec![AppIntent::ForwardRequested]);

    assert_eq!(state.pen.position, Vec2::new(200.0, 180.0));
    assert_eq!(state.segment_count(), 1);
    let segment = state.sketch.last().unwrap();
    assert_eq!(segment.start, Vec2::new(200.0, 200.0));
    assert_eq!(segment.end, Vec2::new(200.0, 180.0));
}

#[test]
fn test_scenario_turn_right_then_forward() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ForwardRequested,
            AppIntent::FaceRequested {
                direction: Direction::Right,
            },
            AppIntent::ForwardRequested,
        ],
    );

    assert_eq!(state.pen.position, Vec2::new(220.0, 180.0));
    assert_eq!(state.segment_count(), 2);
    let segment = state.sketch.last().unwrap();
    assert_eq!(segment.start, Vec2::new(200.0, 180.0));
    assert_eq!(segment.end, Vec2::new(220.0, 180.0));
}

#[test]
fn test_scenario_clear_resets_everything() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ForwardRequested,
            AppIntent::FaceRequested {
                direction: Direction::Right,
            },
            AppIntent::ForwardRequested,
            AppIntent::ClearRequested,
        ],
    );

    assert_eq!(state.pen.position, Vec2::new(200.0, 200.0));
    assert_eq!(state.pen.facing, Direction::Up);
    assert_eq!(state.segment_count(), 0);
}

#[test]
fn test_scenario_backward_from_initial_state_increases_y() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        vec![AppIntent::BackwardRequested],
    );

    // Blickrichtung Up → Backward bewegt nach unten (y wächst)
    assert_eq!(state.pen.position, Vec2::new(200.0, 220.0));
    assert_eq!(state.segment_count(), 1);
    let segment = state.sketch.last().unwrap();
    assert_eq!(segment.start, Vec2::new(200.0, 200.0));
    assert_eq!(segment.end, Vec2::new(200.0, 220.0));
}

#[test]
fn test_vector_sum_property_with_constant_facing() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        vec![AppIntent::FaceRequested {
            direction: Direction::Right,
        }],
    );

    // 7x forward, 3x backward bei konstanter Blickrichtung:
    // Endposition = Ursprung + (7 - 3) * 20 entlang der x-Achse
    let mut intents = vec![AppIntent::ForwardRequested; 7];
    intents.extend(vec![AppIntent::BackwardRequested; 3]);
    drive(&mut controller, &mut state, intents);

    assert_relative_eq!(state.pen.position.x, 200.0 + 4.0 * 20.0);
    assert_relative_eq!(state.pen.position.y, 200.0);
    assert_eq!(state.segment_count(), 10);
}

#[test]
fn test_turn_commands_never_change_position_or_segment_count() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        vec![AppIntent::ForwardRequested, AppIntent::ForwardRequested],
    );
    let position_before = state.pen.position;
    let count_before = state.segment_count();

    for direction in [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ] {
        drive(
            &mut controller,
            &mut state,
            vec![AppIntent::FaceRequested { direction }],
        );
        assert_eq!(state.pen.position, position_before);
        assert_eq!(state.segment_count(), count_before);
        assert_eq!(state.pen.facing, direction);
    }
}

#[test]
fn test_each_segment_connects_pen_positions_before_and_after() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let moves = vec![
        AppIntent::ForwardRequested,
        AppIntent::FaceRequested {
            direction: Direction::Left,
        },
        AppIntent::BackwardRequested,
        AppIntent::FaceRequested {
            direction: Direction::Down,
        },
        AppIntent::ForwardRequested,
    ];

    for intent in moves {
        let before = state.pen.position;
        let count_before = state.segment_count();

        controller
            .handle_intent(&mut state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");

        if state.segment_count() > count_before {
            let segment = state.sketch.last().unwrap();
            assert_eq!(segment.start, before);
            assert_eq!(segment.end, state.pen.position);
        }
    }
}

#[test]
fn test_segments_chain_without_gaps() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        vec![
            AppIntent::ForwardRequested,
            AppIntent::ForwardRequested,
            AppIntent::FaceRequested {
                direction: Direction::Right,
            },
            AppIntent::ForwardRequested,
            AppIntent::BackwardRequested,
        ],
    );

    let segments = state.sketch.segments();
    assert_eq!(segments.len(), 4);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn test_clear_from_initial_state_is_total() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Clear auf leerer Leinwand ist definiert und ändert nichts Sichtbares
    drive(&mut controller, &mut state, vec![AppIntent::ClearRequested]);

    assert_eq!(state.pen, Pen::at_origin());
    assert_eq!(state.segment_count(), 0);
}

#[test]
fn test_drawing_continues_after_clear() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    drive(
        &mut controller,
        &mut state,
        vec![
            AppIntent::FaceRequested {
                direction: Direction::Down,
            },
            AppIntent::ForwardRequested,
            AppIntent::ClearRequested,
            AppIntent::ForwardRequested,
        ],
    );

    // Nach Clear zeichnet der Stift wieder vom Ursprung mit Richtung Up
    assert_eq!(state.segment_count(), 1);
    assert_eq!(state.pen.position, Vec2::new(200.0, 180.0));
}
