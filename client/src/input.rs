use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use shared::PanDirection;

use crate::{
    camera::{OrbitRequested, PanRequested},
    character::SwapRequested,
};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    Caminar,
    Correr,
    Detenerse,
    Breakdance1990,
    BreakdanceEnding1,
    Running,
    PanForward,
    PanBack,
    PanLeft,
    PanRight,
    /// Held to turn mouse motion into orbiting.
    OrbitDrag,
    #[actionlike(Axis)]
    OrbitYaw,
    #[actionlike(Axis)]
    OrbitPitch,
    #[actionlike(Axis)]
    Zoom,
}

impl InputAction {
    /// Actions bound to a single key.
    pub const KEYED: [InputAction; 10] = [
        InputAction::Caminar,
        InputAction::Correr,
        InputAction::Detenerse,
        InputAction::Breakdance1990,
        InputAction::BreakdanceEnding1,
        InputAction::Running,
        InputAction::PanForward,
        InputAction::PanBack,
        InputAction::PanLeft,
        InputAction::PanRight,
    ];

    pub fn key(self) -> Option<KeyCode> {
        match self {
            InputAction::Caminar => Some(KeyCode::KeyQ),
            InputAction::Correr => Some(KeyCode::KeyW),
            InputAction::Detenerse => Some(KeyCode::KeyE),
            InputAction::Breakdance1990 => Some(KeyCode::KeyA),
            InputAction::BreakdanceEnding1 => Some(KeyCode::KeyS),
            InputAction::Running => Some(KeyCode::KeyD),
            InputAction::PanForward => Some(KeyCode::ArrowUp),
            InputAction::PanBack => Some(KeyCode::ArrowDown),
            InputAction::PanLeft => Some(KeyCode::ArrowLeft),
            InputAction::PanRight => Some(KeyCode::ArrowRight),
            _ => None,
        }
    }

    /// Character asset this action selects.
    pub fn asset(self) -> Option<&'static str> {
        match self {
            InputAction::Caminar => Some("Caminar"),
            InputAction::Correr => Some("Correr"),
            InputAction::Detenerse => Some("Detenerse"),
            InputAction::Breakdance1990 => Some("Breakdance 1990"),
            InputAction::BreakdanceEnding1 => Some("Breakdance Ending 1"),
            InputAction::Running => Some("Running"),
            _ => None,
        }
    }

    pub fn pan(self) -> Option<PanDirection> {
        match self {
            InputAction::PanForward => Some(PanDirection::Forward),
            InputAction::PanBack => Some(PanDirection::Back),
            InputAction::PanLeft => Some(PanDirection::Left),
            InputAction::PanRight => Some(PanDirection::Right),
            _ => None,
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    for action in InputAction::KEYED {
        if let Some(key) = action.key() {
            input_map.insert(action, key);
        }
    }
    input_map.insert(InputAction::OrbitDrag, MouseButton::Left);
    input_map.insert_axis(InputAction::OrbitYaw, MouseMoveAxis::X);
    input_map.insert_axis(InputAction::OrbitPitch, MouseMoveAxis::Y);
    input_map.insert_axis(InputAction::Zoom, MouseScrollAxis::Y);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());

    app.add_systems(Update, (dispatch_actions, dispatch_orbit));
}

fn dispatch_actions(
    actions: Res<ActionState<InputAction>>,
    mut swaps: MessageWriter<SwapRequested>,
    mut pans: MessageWriter<PanRequested>,
) {
    for action in InputAction::KEYED {
        if !actions.just_pressed(&action) {
            continue;
        }
        if let Some(asset) = action.asset() {
            swaps.write(SwapRequested(asset.to_owned()));
        }
        if let Some(direction) = action.pan() {
            pans.write(PanRequested(direction));
        }
    }
}

/// Mouse motion orbits only while the left button is held and the cursor is off the panel.
fn dispatch_orbit(
    actions: Res<ActionState<InputAction>>,
    buttons: Query<&Interaction, With<Button>>,
    mut orbits: MessageWriter<OrbitRequested>,
) {
    if buttons.iter().any(|i| *i != Interaction::None) {
        return;
    }

    let drag = if actions.pressed(&InputAction::OrbitDrag) {
        Vec2::new(
            actions.value(&InputAction::OrbitYaw),
            actions.value(&InputAction::OrbitPitch),
        )
    } else {
        Vec2::ZERO
    };
    let scroll = actions.value(&InputAction::Zoom);

    if drag != Vec2::ZERO || scroll != 0.0 {
        orbits.write(OrbitRequested { drag, scroll });
    }
}

#[cfg(test)]
mod tests {
    use leafwing_input_manager::InputControlKind;

    use super::*;

    #[test]
    fn every_asset_has_exactly_one_key() {
        for asset in shared::ASSETS {
            let bound: Vec<_> = InputAction::KEYED
                .iter()
                .filter(|a| a.asset() == Some(asset))
                .collect();
            assert_eq!(bound.len(), 1, "{asset}");
        }
    }

    #[test]
    fn keyed_actions_either_swap_or_pan() {
        for action in InputAction::KEYED {
            assert!(action.asset().is_some() != action.pan().is_some(), "{action:?}");
        }
    }

    #[test]
    fn keys_are_distinct() {
        let mut keys: Vec<_> = InputAction::KEYED.iter().filter_map(|a| a.key()).collect();
        keys.sort_by_key(|k| format!("{k:?}"));
        keys.dedup();
        assert_eq!(keys.len(), InputAction::KEYED.len());
    }

    #[test]
    fn mouse_actions_have_no_key() {
        for action in [
            InputAction::OrbitDrag,
            InputAction::OrbitYaw,
            InputAction::OrbitPitch,
            InputAction::Zoom,
        ] {
            assert_eq!(action.key(), None, "{action:?}");
            assert_eq!(action.asset(), None);
            assert_eq!(action.pan(), None);
        }
    }

    #[test]
    fn mouse_actions_are_bound_by_kind() {
        assert_eq!(InputAction::OrbitDrag.input_control_kind(), InputControlKind::Button);
        for axis in [InputAction::OrbitYaw, InputAction::OrbitPitch, InputAction::Zoom] {
            assert_eq!(axis.input_control_kind(), InputControlKind::Axis);
        }
    }
}
