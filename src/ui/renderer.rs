//! Plain text rendering of the gallery.
//!
//! The renderer writes a [`GalleryViewModel`] to any [`Write`] sink, section by
//! section: header, filters, error, items or empty state, load-more hint, then
//! the modals and the footer.
//!
//! # Example
//!
//! ```rust
//! use lumina::app::AppState;
//! use lumina::ui::render;
//!
//! let state = AppState::new(Default::default());
//! let mut out = Vec::new();
//! render(&state.compute_viewmodel(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("== Lumina =="));
//! ```

use crate::notify::Notification;
use crate::ui::viewmodel::{DownloadSheet, EmptyState, GalleryViewModel, PreviewInfo};
use std::io::{self, Write};

/// Renders the full gallery view.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn render(vm: &GalleryViewModel, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {} ==", vm.header.title)?;
    if let Some(subtitle) = &vm.header.subtitle {
        writeln!(out, "{subtitle}")?;
    }

    if !vm.categories.is_empty() {
        writeln!(out, "Categories: {}", vm.categories.join("  "))?;
    }
    writeln!(out, "Orientation: {}", vm.orientation)?;

    if let Some(error) = &vm.error {
        writeln!(out, "! {error}")?;
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, out)?;
    }

    for item in &vm.items {
        let heart = if item.is_favorite { "♥" } else { " " };
        write!(out, "{heart} [{}] {} by {}", item.id, item.size, item.photographer)?;
        if item.alt.is_empty() {
            writeln!(out)?;
        } else {
            writeln!(out, ": {}", item.alt)?;
        }
    }

    if vm.loading {
        writeln!(out, "Loading...")?;
    }
    if vm.load_more {
        writeln!(out, "-- type `more` to load more wallpapers --")?;
    }

    if let Some(preview) = &vm.preview {
        render_preview(preview, out)?;
    }
    if let Some(sheet) = &vm.download {
        render_download_sheet(sheet, out)?;
    }

    writeln!(out, "{}", vm.footer.keybindings)
}

fn render_empty_state(empty: &EmptyState, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", empty.message)?;
    writeln!(out, "{}", empty.subtitle)?;
    if !empty.suggestions.is_empty() {
        writeln!(out, "Try these popular searches: {}", empty.suggestions.join(", "))?;
    }
    Ok(())
}

fn render_preview(preview: &PreviewInfo, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "+-- {} [{}]", preview.title, preview.id)?;
    writeln!(out, "|   by {} {}", preview.photographer, preview.photographer_url)?;
    write!(out, "|   {} {}", preview.size, preview.shape)?;
    if let Some(color) = &preview.avg_color {
        write!(out, " {color}")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "+-- {}",
        if preview.is_favorite { "♥ in favorites" } else { "not in favorites" }
    )
}

fn render_download_sheet(sheet: &DownloadSheet, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "+-- Download [{}] for {}", sheet.photo_id, sheet.device)?;
    if sheet.options.is_empty() {
        writeln!(out, "|   no downloadable resolutions")?;
    }
    for option in &sheet.options {
        writeln!(
            out,
            "|   {:<9} {:>10} {:>9}{}",
            option.label(),
            option.size(),
            option.file_size,
            if option.recommended { "  (recommended)" } else { "" }
        )?;
    }
    writeln!(out, "+--")
}

/// Renders the visible toasts and popups, one per line.
///
/// # Errors
///
/// Returns any error raised by the underlying writer.
pub fn render_notifications(notifications: &[Notification], out: &mut impl Write) -> io::Result<()> {
    for notification in notifications {
        for line in notification.message.lines() {
            writeln!(out, ">> {line}")?;
        }
    }
    Ok(())
}
