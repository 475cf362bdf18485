//! Music Organizer
//!
//! # What this program is
//! A small desktop app (built with the `iced` GUI library) that scans a folder for
//! `.mp3` / `.flac` / `.wav` / `.m4a` files, reads their artist tags, and copies
//! each file into `Organized/<artist>/` under that folder.
//!
//! # How it flows
//! 1. Choose folder: type a path, press "Use Folder".
//! 2. Preview Plan: scan + group by artist, log the grouping, save
//!    `music_organization_plan.txt` in the folder.
//! 3. Organize Now: copy per the plan, log per-file failures, show a "Done" dialog.
//!
//! # Rules
//! - A file crediting several artists ("A feat. B", "Y; Z") is copied once per artist.
//! - Unreadable or missing tags land under "Unknown Artist", never an error.
//! - Copies only; the source files are never moved or modified.
//!
//! # Concurrency model
//! - Scan and copy run on a worker thread and come back as a `Message`.
//! - While one runs, every action is disabled, so there is never more than one.
//!
//! # Architecture
//! - `core::*` does all filesystem and tag work, no GUI types.
//! - `gui::*` only validates the chosen folder path and renders results.

mod core;
mod gui;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // RUST_LOG=debug shows per-file tag fallbacks.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application(gui::Organizer::default, gui::update, gui::view)
        .title("Music Organizer")
        .window_size((gui::WINDOW_W, gui::WINDOW_H))
        .run()
}
