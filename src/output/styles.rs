//! Style constants and clap help styling configuration.

use anstyle::{AnsiColor, Color, Effects, Style};

/// Green: success messages.
pub(crate) const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Red: fatal errors.
pub(crate) const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Yellow: warnings that do not stop generation.
pub(crate) const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Clap help styles matching the output palette.
pub fn clap_styles() -> clap::builder::Styles {
    let heading = Style::new()
        .fg_color(Some(Color::Ansi(AnsiColor::Green)))
        .effects(Effects::BOLD);
    let literal = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));

    clap::builder::Styles::styled()
        .header(heading)
        .usage(heading)
        .literal(literal)
        .placeholder(literal)
        .error(
            Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Red)))
                .effects(Effects::BOLD),
        )
        .valid(SUCCESS)
        .invalid(WARNING)
}
