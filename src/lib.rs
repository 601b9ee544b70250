//! Sana library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod responder;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// CLI-facing spelling of the starting tab. Lives here so `core` stays
/// free of clap.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum StartTab {
    #[default]
    Chat,
    Checkin,
    Exercises,
    Insights,
    Resources,
}

impl From<StartTab> for core::state::Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Chat => core::state::Tab::Chat,
            StartTab::Checkin => core::state::Tab::CheckIn,
            StartTab::Exercises => core::state::Tab::Exercises,
            StartTab::Insights => core::state::Tab::Insights,
            StartTab::Resources => core::state::Tab::Resources,
        }
    }
}
