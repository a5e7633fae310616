//! Command-line input for the terminal front end.
//!
//! Each line typed by the user is parsed into a [`Command`]. Most commands map
//! one-to-one onto an [`Event`]; `help` is handled by the front end itself.

use crate::app::Event;
use crate::domain::{resolve_category, Orientation, PhotoId, Variant};
use thiserror::Error;

/// Usage text printed by `help`.
pub const HELP: &str = "\
search <text>            search wallpapers
category <name>          browse a category (fuzzy)
orientation <o>          all | landscape | portrait
more                     load the next page
clear                    clear the search, keep orientation
home                     back to curated, orientation reset
fav <id>                 toggle a favorite
favorites | browse       show favorites / back to results
preview <id>             open the preview
download <id>            open the download sheet
close                    close the download sheet, else the preview
cancel                   close the download sheet only
get [variant]            download a variant (recommended if omitted)
original <id>            save the original image
share [id]               share the previewed (or given) photo
screen <w> <h> [ratio]   set the screen descriptor
help | quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Event(Event),
    Help,
}

/// Why a line could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("no category matches \"{0}\"")]
    NoCategory(String),

    #[error("{0}")]
    Invalid(String),
}

/// Parses one input line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns an [`InputError`] for unknown commands, missing or malformed
/// arguments, and category names that match nothing.
///
/// # Examples
///
/// ```
/// use lumina::app::Event;
/// use lumina::input::{parse_line, Command};
///
/// let cmd = parse_line("search  misty forest ").unwrap();
/// assert_eq!(cmd, Some(Command::Event(Event::Search("misty forest".into()))));
/// ```
pub fn parse_line(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(verb, rest)| (verb, rest.trim()));

    let event = match verb.to_lowercase().as_str() {
        "help" | "?" => return Ok(Some(Command::Help)),
        "quit" | "q" | "exit" => Event::Quit,
        "search" | "s" => Event::Search(rest.to_string()),
        "category" | "cat" => {
            if rest.is_empty() {
                return Err(InputError::Usage("category <name>"));
            }
            let category =
                resolve_category(rest).ok_or_else(|| InputError::NoCategory(rest.to_string()))?;
            Event::SelectCategory(category.name.to_string())
        }
        "orientation" | "o" => {
            let orientation: Orientation = rest.parse().map_err(InputError::Invalid)?;
            Event::SetOrientation(orientation)
        }
        "more" | "m" => Event::LoadMore,
        "clear" => Event::ClearSearch,
        "home" => Event::ReturnToHome,
        "fav" | "f" => Event::ToggleFavorite(photo_id(rest, "fav <id>")?),
        "favorites" => Event::ShowFavorites(true),
        "browse" => Event::ShowFavorites(false),
        "preview" | "p" => Event::OpenPreview(photo_id(rest, "preview <id>")?),
        "close" => Event::Close,
        "download" | "d" => Event::OpenDownload(photo_id(rest, "download <id>")?),
        "cancel" => Event::CloseDownload,
        "get" => {
            if rest.is_empty() {
                Event::DownloadRecommended
            } else {
                let variant: Variant = rest.parse().map_err(InputError::Invalid)?;
                Event::DownloadVariant(variant)
            }
        }
        "original" => Event::DownloadOriginal(photo_id(rest, "original <id>")?),
        "share" => {
            if rest.is_empty() {
                Event::Share(None)
            } else {
                Event::Share(Some(photo_id(rest, "share [id]")?))
            }
        }
        "screen" => parse_screen(rest)?,
        other => return Err(InputError::Unknown(other.to_string())),
    };

    Ok(Some(Command::Event(event)))
}

fn photo_id(arg: &str, usage: &'static str) -> Result<PhotoId, InputError> {
    arg.parse().map_err(|_| InputError::Usage(usage))
}

fn parse_screen(args: &str) -> Result<Event, InputError> {
    const USAGE: &str = "screen <width> <height> [pixel_ratio]";

    let parts: Vec<&str> = args.split_whitespace().collect();
    let (width, height, ratio) = match parts.as_slice() {
        [w, h] => (*w, *h, None),
        [w, h, r] => (*w, *h, Some(*r)),
        _ => return Err(InputError::Usage(USAGE)),
    };

    let width: u32 = width.parse().map_err(|_| InputError::Usage(USAGE))?;
    let height: u32 = height.parse().map_err(|_| InputError::Usage(USAGE))?;
    let pixel_ratio = match ratio {
        Some(r) => r
            .parse::<f64>()
            .ok()
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or(InputError::Usage(USAGE))?,
        None => 1.0,
    };

    Ok(Event::ScreenChanged {
        width,
        height,
        pixel_ratio,
    })
}
