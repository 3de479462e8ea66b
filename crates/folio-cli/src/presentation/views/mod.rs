pub mod builder;
pub mod details;
pub mod open;
pub mod pages;
pub mod system;

use owo_colors::OwoColorize;

pub(crate) fn bold(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn green(text: &str, color: bool) -> String {
    if color {
        text.green().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn yellow(text: &str, color: bool) -> String {
    if color {
        text.yellow().to_string()
    } else {
        text.to_string()
    }
}

/// "●" for the current choice, blank otherwise.
pub(crate) fn marker(current: bool, color: bool) -> String {
    if current {
        green("●", color)
    } else {
        " ".to_string()
    }
}
