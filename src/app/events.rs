//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::Direction;
use crate::shared::SketchOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Segment in Blickrichtung zeichnen (Button `F` / Taste F)
    ForwardRequested,
    /// Segment entgegen der Blickrichtung zeichnen (Button `B` / Taste B)
    BackwardRequested,
    /// Blickrichtung setzen (Buttons `L`/`R`/`U`/`D`, Pfeiltasten)
    FaceRequested { direction: Direction },
    /// Leinwand leeren und Stift zurücksetzen (Button `C`)
    ClearRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: SketchOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Segment in Blickrichtung zeichnen, Stift vorrücken
    DrawForward,
    /// Segment entgegen der Blickrichtung zeichnen, Stift vorrücken
    DrawBackward,
    /// Blickrichtung setzen; Position und Segmente bleiben unberührt
    Face { direction: Direction },
    /// Alle Segmente entfernen, Stift auf Ursprung und `Up` zurücksetzen
    ClearSketch,
    /// Anwendung beenden
    RequestExit,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: SketchOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
