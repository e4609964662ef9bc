//! Non-interactive split for command-line use.

use super::state::{App, InputEvent, RenderedSplit};
use crate::infrastructure::Settings;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OneShotError {
    #[error("preset {0}% is not one of the configured presets")]
    UnknownPreset(f64),
}

/// Inputs for a single split, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct OneShotSplit {
    pub bill: String,
    /// Party size text; the configured default when absent.
    pub people: Option<String>,
    pub preset: Option<f64>,
    pub custom_tip: Option<String>,
}

impl OneShotSplit {
    /// Feeds the inputs through a fresh form, in the order a user would.
    pub fn run(&self, settings: &Settings) -> Result<RenderedSplit, OneShotError> {
        let mut app = App::new(settings);
        app.notify(InputEvent::BillChanged(self.bill.clone()));

        if let Some(people) = &self.people {
            app.notify(InputEvent::PartyChanged(people.clone()));
        }
        if let Some(preset) = self.preset {
            if !settings.presets.contains(&preset) {
                return Err(OneShotError::UnknownPreset(preset));
            }
            app.notify(InputEvent::PresetToggled(preset));
        }
        if let Some(custom_tip) = &self.custom_tip {
            app.notify(InputEvent::CustomTipChanged(custom_tip.clone()));
        }

        Ok(app.rendered().clone())
    }
}
