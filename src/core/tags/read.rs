//! core/tags/read.rs
//! Read raw artist tag values from an audio file.
//!
//! - MP3: ID3v2, else ID3v1, via `id3`
//! - WAV: ID3 chunk via `id3`, else RIFF INFO via Symphonia
//! - FLAC / M4A: container metadata via Symphonia
//!
//! Artist comes first; album artist is only used when there is no artist.

use std::fs::File;
use std::path::Path;

use id3::{Tag, TagLike};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::{MetadataOptions, MetadataRevision, StandardTagKey};
use symphonia::core::probe::Hint;

use super::TagError;

pub(crate) fn read_artist_values(path: &Path) -> Result<Vec<String>, TagError> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "mp3" => Ok(artists_from_id3(&id3::v1v2::read_from_path(path)?)),
        "wav" => match Tag::read_from_wav_path(path) {
            Ok(tag) => {
                let values = artists_from_id3(&tag);
                if values.is_empty() {
                    read_container_artists(path)
                } else {
                    Ok(values)
                }
            }
            Err(_) => read_container_artists(path),
        },
        _ => read_container_artists(path),
    }
}

/// TPE1 (multi-value, NUL separated), else TPE2.
fn artists_from_id3(tag: &Tag) -> Vec<String> {
    let artists = non_blank(tag.artists().unwrap_or_default());
    if !artists.is_empty() {
        return artists;
    }

    let album_artists = tag
        .album_artist()
        .map(|s| s.split('\0').collect::<Vec<_>>())
        .unwrap_or_default();
    non_blank(album_artists)
}

fn non_blank(values: Vec<&str>) -> Vec<String> {
    values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_owned)
        .collect()
}

fn read_container_artists(path: &Path) -> Result<Vec<String>, TagError> {
    let file = File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let mut probed = symphonia::default::get_probe().format(
        &hint,
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let mut artists = Vec::new();
    let mut album_artists = Vec::new();

    // Metadata found while probing (ex: an ID3v2 block ahead of the stream).
    if let Some(mut probe_meta) = probed.metadata.get() {
        if let Some(rev) = probe_meta.skip_to_latest() {
            collect_artist_tags(rev, &mut artists, &mut album_artists);
        }
    }

    // Metadata owned by the container itself (Vorbis comments, MP4 atoms, RIFF INFO).
    let mut format_meta = probed.format.metadata();
    if let Some(rev) = format_meta.skip_to_latest() {
        collect_artist_tags(rev, &mut artists, &mut album_artists);
    }

    Ok(if artists.is_empty() {
        album_artists
    } else {
        artists
    })
}

fn collect_artist_tags(
    rev: &MetadataRevision,
    artists: &mut Vec<String>,
    album_artists: &mut Vec<String>,
) {
    for tag in rev.tags() {
        let target = match tag.std_key {
            Some(StandardTagKey::Artist) => &mut *artists,
            Some(StandardTagKey::AlbumArtist) => &mut *album_artists,
            _ => continue,
        };

        // RIFF INFO strings arrive with their NUL terminator and padding.
        let value = tag.value.to_string();
        target.extend(non_blank(value.split('\0').collect()));
    }
}
