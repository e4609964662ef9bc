//! Application state for the tip form.
//!
//! `App` owns everything the form needs between key presses: the raw text of
//! each field, the tip selection, keyboard focus, and the last rendered split.
//! Every change goes through [`App::notify`], which updates the selection if
//! needed and then recomputes the split exactly once.

use crate::domain::{Money, Split, TipCalculator, TipRequest, TipSelection, ValidationError};
use crate::infrastructure::Settings;
use tracing::{debug, info};

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Form is active and accepts input
    Normal,
    /// Help screen is displayed
    Help,
}

/// Rows of the form that can hold keyboard focus, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Bill,
    Party,
    Presets,
    CustomTip,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Bill, Field::Party, Field::Presets, Field::CustomTip];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Field {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Field {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Whether the row is a free-text field.
    pub fn is_text(self) -> bool {
        !matches!(self, Field::Presets)
    }
}

/// A change reported by the front-end.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    BillChanged(String),
    PartyChanged(String),
    /// A preset button was pressed (percentage value).
    PresetToggled(f64),
    CustomTipChanged(String),
    Reset,
}

/// Everything the presentation layer needs to draw the result.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSplit {
    pub tip_per_person: String,
    pub total_per_person: String,
    pub error: Option<ValidationError>,
    /// Preset to draw as selected.
    pub active_preset: Option<f64>,
}

impl RenderedSplit {
    /// The zero result with no error.
    pub fn zero(active_preset: Option<f64>) -> Self {
        Self::from_split(Split::ZERO, None, active_preset)
    }

    /// Builds the view of a calculation; failures show the zero result.
    pub fn from_result(result: Result<Split, ValidationError>, active_preset: Option<f64>) -> Self {
        match result {
            Ok(split) => Self::from_split(split, None, active_preset),
            Err(error) => Self::from_split(Split::ZERO, Some(error), active_preset),
        }
    }

    fn from_split(split: Split, error: Option<ValidationError>, active_preset: Option<f64>) -> Self {
        Self {
            tip_per_person: Money(split.tip_per_person).to_string(),
            total_per_person: Money(split.total_per_person).to_string(),
            error,
            active_preset,
        }
    }

    /// The error text, or an empty string when the inputs are valid.
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

/// Main application state for the tip form.
///
/// # Examples
///
/// ```
/// use tipsplit::application::{App, InputEvent};
///
/// let mut app = App::default();
/// app.notify(InputEvent::BillChanged("100".to_string()));
/// app.notify(InputEvent::PartyChanged("4".to_string()));
/// app.notify(InputEvent::PresetToggled(15.0));
///
/// assert_eq!(app.rendered().tip_per_person, "₹3.75");
/// assert_eq!(app.rendered().total_per_person, "₹28.75");
/// ```
#[derive(Debug)]
pub struct App {
    /// Raw text of the bill field
    pub bill_input: String,
    /// Raw text of the party size field
    pub party_input: String,
    /// Raw text of the free-form tip field
    pub custom_tip_input: String,
    /// Current tip selection
    pub selection: TipSelection,
    /// Offered preset percentages, in display order
    pub presets: Vec<f64>,
    /// Party size restored at startup and on reset
    pub default_party_size: u32,
    /// Row holding keyboard focus
    pub focus: Field,
    /// Highlighted preset when the presets row has focus
    pub preset_cursor: usize,
    /// Cursor position, in characters, within the focused text field
    pub cursor_position: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Temporary status message to display
    pub status_message: Option<String>,
    rendered: RenderedSplit,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl App {
    /// Creates the form in its startup state.
    ///
    /// The bill is empty and the result is zero with no error, even though
    /// an empty bill would not validate.
    pub fn new(settings: &Settings) -> Self {
        let party_input = settings.default_party_size.to_string();
        Self {
            bill_input: String::new(),
            party_input,
            custom_tip_input: String::new(),
            selection: TipSelection::Unset,
            presets: settings.presets.clone(),
            default_party_size: settings.default_party_size,
            focus: Field::Bill,
            preset_cursor: 0,
            cursor_position: 0,
            mode: AppMode::Normal,
            status_message: None,
            rendered: RenderedSplit::zero(None),
        }
    }

    /// The most recently computed result.
    pub fn rendered(&self) -> &RenderedSplit {
        &self.rendered
    }

    /// Applies a single input change and recomputes the split.
    pub fn notify(&mut self, event: InputEvent) {
        match event {
            InputEvent::BillChanged(text) => self.bill_input = text,
            InputEvent::PartyChanged(text) => self.party_input = text,
            InputEvent::PresetToggled(percent) => {
                self.selection.toggle_preset(percent);
                if self.selection.active_preset().is_some() {
                    self.custom_tip_input.clear();
                }
            }
            InputEvent::CustomTipChanged(text) => {
                self.selection.edit_custom(&text);
                self.custom_tip_input = text;
            }
            InputEvent::Reset => {
                self.reset();
                return;
            }
        }

        self.clamp_cursor();
        self.recompute();
    }

    /// Clears the form back to its startup values.
    ///
    /// The party size returns to the configured default rather than being
    /// left empty, so the form never starts in an error state.
    pub fn reset(&mut self) {
        self.bill_input.clear();
        self.party_input = self.default_party_size.to_string();
        self.custom_tip_input.clear();
        self.selection.reset();
        self.rendered = RenderedSplit::zero(None);
        self.clamp_cursor();
        self.status_message = Some("Form cleared".to_string());
        info!("form reset");
    }

    fn recompute(&mut self) {
        let request = TipRequest {
            bill: &self.bill_input,
            party: &self.party_input,
            selection: self.selection,
            custom_tip: &self.custom_tip_input,
        };
        let result = TipCalculator::calculate(&request);

        match &result {
            Ok(split) => debug!(
                bill = %self.bill_input,
                party = %self.party_input,
                selection = ?self.selection,
                tip_per_person = split.tip_per_person,
                total_per_person = split.total_per_person,
                "recomputed split"
            ),
            Err(error) => debug!(
                bill = %self.bill_input,
                party = %self.party_input,
                %error,
                "inputs failed validation"
            ),
        }

        self.rendered = RenderedSplit::from_result(result, self.selection.active_preset());
    }

    /// Text of the focused field, if it is a text field.
    pub fn focused_text(&self) -> Option<&str> {
        match self.focus {
            Field::Bill => Some(&self.bill_input),
            Field::Party => Some(&self.party_input),
            Field::CustomTip => Some(&self.custom_tip_input),
            Field::Presets => None,
        }
    }

    fn focused_char_count(&self) -> usize {
        self.focused_text().map(|t| t.chars().count()).unwrap_or(0)
    }

    fn clamp_cursor(&mut self) {
        self.cursor_position = self.cursor_position.min(self.focused_char_count());
    }

    /// Sends the edited text of the focused field through [`App::notify`].
    fn commit_text(&mut self, text: String) {
        let event = match self.focus {
            Field::Bill => InputEvent::BillChanged(text),
            Field::Party => InputEvent::PartyChanged(text),
            Field::CustomTip => InputEvent::CustomTipChanged(text),
            Field::Presets => return,
        };
        self.notify(event);
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    /// Moves focus, placing the cursor at the end of a text field.
    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
        self.cursor_position = self.focused_char_count();
    }

    /// Inserts a character at the cursor of the focused text field.
    pub fn insert_char(&mut self, c: char) {
        let Some(text) = self.focused_text() else {
            return;
        };
        let mut text = text.to_string();
        text.insert(byte_offset(&text, self.cursor_position), c);
        self.cursor_position += 1;
        self.commit_text(text);
    }

    /// Removes the character before the cursor.
    pub fn delete_backward(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let Some(text) = self.focused_text() else {
            return;
        };
        let mut text = text.to_string();
        text.remove(byte_offset(&text, self.cursor_position - 1));
        self.cursor_position -= 1;
        self.commit_text(text);
    }

    /// Removes the character under the cursor.
    pub fn delete_forward(&mut self) {
        if self.cursor_position >= self.focused_char_count() {
            return;
        }
        let Some(text) = self.focused_text() else {
            return;
        };
        let mut text = text.to_string();
        text.remove(byte_offset(&text, self.cursor_position));
        self.commit_text(text);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.focused_char_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.focused_char_count();
    }

    pub fn preset_cursor_left(&mut self) {
        self.preset_cursor = self.preset_cursor.saturating_sub(1);
    }

    pub fn preset_cursor_right(&mut self) {
        if self.preset_cursor + 1 < self.presets.len() {
            self.preset_cursor += 1;
        }
    }

    /// Toggles the preset under the preset cursor.
    pub fn toggle_preset_at_cursor(&mut self) {
        self.toggle_preset_index(self.preset_cursor);
    }

    /// Toggles the preset at `index`, ignoring out-of-range indices.
    pub fn toggle_preset_index(&mut self, index: usize) {
        if let Some(&percent) = self.presets.get(index) {
            self.preset_cursor = index;
            self.notify(InputEvent::PresetToggled(percent));
        }
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Normal => AppMode::Help,
            AppMode::Help => AppMode::Normal,
        };
    }
}

/// Byte offset of the `index`-th character, or the end of `text`.
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices().nth(index).map(|(i, _)| i).unwrap_or(text.len())
}
