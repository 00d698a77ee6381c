use curve_core::SceneController;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Reset,
    NudgeStiffness(f32),
    NudgeDamping(f32),
}

#[inline]
pub fn key_action(key: &str, nudge: f32) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::Reset),
        "[" => Some(KeyAction::NudgeStiffness(-nudge)),
        "]" => Some(KeyAction::NudgeStiffness(nudge)),
        "-" => Some(KeyAction::NudgeDamping(-nudge)),
        "=" | "+" => Some(KeyAction::NudgeDamping(nudge)),
        _ => None,
    }
}

/// Apply a key action; nudges saturate at the ends of the slider range.
pub fn apply_key_action(controller: &mut SceneController, action: KeyAction) {
    let params = controller.scene.params();
    let result = match action {
        KeyAction::Reset => {
            controller.reset();
            return;
        }
        KeyAction::NudgeStiffness(d) => controller
            .scene
            .set_stiffness((params.stiffness() + d).clamp(0.0, 1.0)),
        KeyAction::NudgeDamping(d) => controller
            .scene
            .set_damping((params.damping() + d).clamp(0.0, 1.0)),
    };
    match result {
        Ok(()) => {
            let p = controller.scene.params();
            log::info!(
                "[keys] stiffness={:.2} damping={:.2}",
                p.stiffness(),
                p.damping()
            );
        }
        Err(e) => log::warn!("[keys] {}", e),
    }
}
