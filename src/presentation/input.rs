use crate::application::{App, AppMode, InputEvent};
use crossterm::event::{KeyCode, KeyModifiers};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> KeyOutcome {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => {
                Self::handle_help_mode(app, key);
                KeyOutcome::Continue
            }
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) -> KeyOutcome {
        app.status_message = None;

        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('c') => return KeyOutcome::Quit,
                KeyCode::Char('r') => {
                    app.notify(InputEvent::Reset);
                    return KeyOutcome::Continue;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::F(1) => app.toggle_help(),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            _ if app.focus.is_text() => Self::handle_text_field(app, key),
            _ => Self::handle_presets_row(app, key),
        }
        KeyOutcome::Continue
    }

    fn handle_text_field(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.focus_next(),
            KeyCode::Backspace => app.delete_backward(),
            KeyCode::Delete => app.delete_forward(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    fn handle_presets_row(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Left | KeyCode::Char('h') => app.preset_cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => app.preset_cursor_right(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_preset_at_cursor(),
            KeyCode::Char('?') => app.toggle_help(),
            KeyCode::Char(c @ '1'..='9') => {
                // Digits pick presets by their 1-based position
                let index = c as usize - '1' as usize;
                app.toggle_preset_index(index);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.mode = AppMode::Normal;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Field;
    use crate::domain::TipSelection;

    fn press(app: &mut App, key: KeyCode) -> KeyOutcome {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_full_form_by_keyboard() {
        let mut app = App::default();
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "4");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('3'));

        assert_eq!(app.bill_input, "100");
        assert_eq!(app.party_input, "4");
        assert_eq!(app.selection, TipSelection::Preset(15.0));
        assert_eq!(app.rendered().tip_per_person, "₹3.75");
        assert_eq!(app.rendered().total_per_person, "₹28.75");
    }

    #[test]
    fn test_space_toggles_preset_under_cursor() {
        let mut app = App::default();
        app.set_focus(Field::Presets);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.selection, TipSelection::Preset(10.0));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selection, TipSelection::Unset);
    }

    #[test]
    fn test_custom_tip_typing_clears_preset() {
        let mut app = App::default();
        app.set_focus(Field::Presets);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selection, TipSelection::Preset(5.0));

        press(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Field::CustomTip);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.selection, TipSelection::Unset);
        assert_eq!(app.custom_tip_input, "-");
    }

    #[test]
    fn test_ctrl_r_resets() {
        let mut app = App::default();
        type_text(&mut app, "55");
        let outcome = InputHandler::handle_key_event(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert_eq!(outcome, KeyOutcome::Continue);
        assert!(app.bill_input.is_empty());
        assert_eq!(app.party_input, "1");
        assert_eq!(app.status_message.as_deref(), Some("Form cleared"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        assert_eq!(press(&mut app, KeyCode::Esc), KeyOutcome::Quit);
        assert_eq!(
            InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL),
            KeyOutcome::Quit
        );
    }

    #[test]
    fn test_q_is_text_in_fields() {
        let mut app = App::default();
        assert_eq!(press(&mut app, KeyCode::Char('q')), KeyOutcome::Continue);
        assert_eq!(app.bill_input, "q");
        assert_eq!(app.rendered().error_message(), "Enter a valid bill amount.");
    }

    #[test]
    fn test_help_mode() {
        let mut app = App::default();
        press(&mut app, KeyCode::F(1));
        assert_eq!(app.mode, AppMode::Help);

        // Keys do not reach the form while help is open
        press(&mut app, KeyCode::Char('9'));
        assert!(app.bill_input.is_empty());

        assert_eq!(press(&mut app, KeyCode::Esc), KeyOutcome::Continue);
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_status_message_cleared_on_next_key() {
        let mut app = App::default();
        app.reset();
        assert!(app.status_message.is_some());
        press(&mut app, KeyCode::Tab);
        assert!(app.status_message.is_none());
    }
}
