//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Total über alle Intents; das Mapping ist hier 1:1, bleibt aber als
/// eigene Schicht erhalten, damit Intents ohne Mutationslogik bleiben.
pub fn map_intent_to_commands(intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ForwardRequested => vec![AppCommand::DrawForward],
        AppIntent::BackwardRequested => vec![AppCommand::DrawBackward],
        AppIntent::FaceRequested { direction } => vec![AppCommand::Face { direction }],
        AppIntent::ClearRequested => vec![AppCommand::ClearSketch],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
