// NOTE: folio CLI layout
//
// Every command is one hydrate -> mutate -> persist cycle over the data dir.
// Handlers own the cycle; presenters turn results into view models; the
// console renderer prints either text or JSON. Storage write failures never
// abort a command, they come back as a warning badge.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;

pub use args::{
    Cli, ColorsCommand, Commands, DetailsCommand, ExperienceCommand, ImageSlot, LogLevel,
    OutputFormat, PagesCommand, ProjectCommand, SectionsCommand, SkillCommand, SocialCommand,
    SocialNetwork, StyleCommand,
};
pub use commands::run;
