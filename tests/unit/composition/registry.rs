use super::*;

#[test]
fn builtin_registers_three_presets() {
    let reg = Registry::builtin().unwrap();
    assert_eq!(reg.len(), 3);
    assert_eq!(
        reg.ids().collect::<Vec<_>>(),
        [
            presets::PROMPT_TO_VIDEO,
            presets::PROMPT_TO_WORKFLOW,
            presets::PROMPT_TO_WORKFLOW_SQUARE
        ]
    );
    assert_eq!(
        reg.get(presets::PROMPT_TO_WORKFLOW_SQUARE)
            .unwrap()
            .canvas
            .width,
        1080
    );
}

#[test]
fn register_rejects_duplicates() {
    let mut reg = Registry::new();
    assert!(reg.is_empty());
    reg.register(presets::prompt_to_video().unwrap()).unwrap();
    let err = reg
        .register(presets::prompt_to_video().unwrap())
        .unwrap_err();
    assert!(err.to_string().contains("already registered"));
    assert_eq!(reg.len(), 1);
}

#[test]
fn register_rejects_invalid() {
    let mut comp = presets::prompt_to_video().unwrap();
    comp.scenes.clear();
    let mut reg = Registry::new();
    assert!(reg.register(comp).is_err());
    assert!(reg.is_empty());
}

#[test]
fn require_lists_known_ids() {
    let reg = Registry::builtin().unwrap();
    let err = reg.require("Nope").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unknown composition 'Nope'"));
    assert!(msg.contains(presets::PROMPT_TO_VIDEO));
    assert!(reg.require(presets::PROMPT_TO_VIDEO).is_ok());
}
