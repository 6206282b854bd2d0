use turtle_sketchpad::{AppCommand, AppController, AppIntent, AppState, Direction};

#[test]
fn test_forward_requested_logs_draw_forward_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ForwardRequested)
        .expect("ForwardRequested sollte ohne Fehler durchlaufen");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::DrawForward => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_face_requested_logs_face_command_with_direction() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::FaceRequested {
                direction: Direction::Left,
            },
        )
        .expect("FaceRequested sollte ohne Fehler durchlaufen");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::Face { direction } => assert_eq!(*direction, Direction::Left),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_options_dialog_open_and_close_flow() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .expect("OpenOptionsDialogRequested sollte funktionieren");
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .expect("CloseOptionsDialogRequested sollte funktionieren");
    assert!(!state.show_options_dialog);
}

#[test]
fn test_every_drawing_intent_is_logged_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let intents = vec![
        AppIntent::ForwardRequested,
        AppIntent::FaceRequested {
            direction: Direction::Right,
        },
        AppIntent::BackwardRequested,
        AppIntent::ClearRequested,
    ];

    for intent in intents {
        controller
            .handle_intent(&mut state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 4);
    assert!(matches!(entries[0], AppCommand::DrawForward));
    assert!(matches!(
        entries[1],
        AppCommand::Face {
            direction: Direction::Right
        }
    ));
    assert!(matches!(entries[2], AppCommand::DrawBackward));
    assert!(matches!(entries[3], AppCommand::ClearSketch));
}

#[test]
fn test_render_scene_reflects_state_snapshot() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ForwardRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ForwardRequested)
        .unwrap();

    let scene = controller.build_render_scene(&state);

    assert_eq!(scene.segment_count(), 2);
    assert_eq!(scene.pen, state.pen);

    // Schnappschuss bleibt stabil, auch wenn der State danach mutiert
    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .unwrap();

    assert_eq!(scene.segment_count(), 2);
    assert_eq!(state.segment_count(), 0);
}
