use crate::state::State;
use winit::{
    dpi::PhysicalPosition,
    event::{MouseButton, ElementState},
};

/// Left click toggles the cell under the cursor.
pub fn handle_mouse_input(state: &mut State, button: MouseButton, element_state: ElementState) {
    if button != MouseButton::Left || element_state != ElementState::Pressed {
        return;
    }
    let Some(pos) = state.cursor_pos else {
        return;
    };
    // Out-of-board clicks are ignored by the board itself
    if !state.game.toggle_cell_at(pos.x as f32, pos.y as f32) {
        log::debug!("Click at [{:.1}, {:.1}] is off the board", pos.x, pos.y);
    }
}

pub fn handle_cursor_move(state: &mut State, position: PhysicalPosition<f64>) {
    state.cursor_pos = Some(position);
}

pub fn handle_cursor_left(state: &mut State) {
    state.cursor_pos = None;
}
