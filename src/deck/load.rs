// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Deck loading.
//!
//! A deck source is either a JSON manifest file listing slide records, or a
//! directory of image files. Loading is blocking and runs on the task worker
//! thread.

use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    deck::{Slide, SlideDeck, SlideImage},
    error::DeckError,
};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Loads a deck from a manifest file or an image directory.
///
/// # Errors
///
/// Returns [`DeckError::NotFound`] if `path` is neither a file nor a
/// directory, or the underlying read, parse or scan failure.
pub(crate) fn load_deck(path: &Path) -> Result<SlideDeck, DeckError> {
    if path.is_dir() {
        scan_directory(path)
    } else if path.is_file() {
        read_manifest(path)
    } else {
        Err(DeckError::NotFound(path.to_path_buf()))
    }
}

fn read_manifest(path: &Path) -> Result<SlideDeck, DeckError> {
    let text = fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_manifest(&text).map_err(|source| DeckError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a manifest, a JSON array of slide records, into a deck ordered by
/// each record's `order`.
pub(crate) fn parse_manifest(text: &str) -> Result<SlideDeck, serde_json::Error> {
    let mut slides: Vec<Slide> = serde_json::from_str(text)?;
    slides.sort_by_key(|slide| slide.order);
    Ok(SlideDeck::new(slides))
}

fn scan_directory(root: &Path) -> Result<SlideDeck, DeckError> {
    let mut paths: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() && is_image(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    paths.sort();

    let slides = paths
        .iter()
        .enumerate()
        .map(|(i, path)| Slide {
            order: i as u32 + 1,
            title: path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default(),
            client: "none".to_string(),
            caption: String::new(),
            image: SlideImage {
                url: path.display().to_string(),
                width: 0,
                height: 0,
            },
        })
        .collect();

    Ok(SlideDeck::new(slides))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"[
        {
            "order": 2,
            "title": "Harbour",
            "client": "Port Authority",
            "caption": "Night lighting study",
            "image": { "url": "img/harbour.jpg", "width": 620, "height": 400 }
        },
        {
            "order": 1,
            "title": "Atrium",
            "image": { "url": "img/atrium.jpg", "width": 620, "height": 400 }
        }
    ]"#;

    #[test]
    fn test_parse_manifest_orders_slides() {
        let deck = parse_manifest(MANIFEST).expect("valid manifest");

        assert_eq!(deck.len(), 2);
        let first = deck.at(0).expect("first slide");
        assert_eq!(first.title, "Atrium");
        assert_eq!(first.client, "none");
        assert_eq!(first.caption, "");
        assert_eq!(first.image.width, 620);
        assert_eq!(deck.at(1).map(|s| s.client.as_str()), Some("Port Authority"));
    }

    #[test]
    fn test_parse_manifest_rejects_missing_image() {
        let result = parse_manifest(r#"[{ "order": 1, "title": "No image" }]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_deck_from_manifest_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("projects.json");
        fs::write(&path, MANIFEST).expect("write manifest");

        let deck = load_deck(&path).expect("deck loads");

        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_load_deck_reports_bad_manifest() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("projects.json");
        fs::write(&path, "{ not json").expect("write manifest");

        let result = load_deck(&path);

        assert!(matches!(result, Err(DeckError::Manifest { .. })));
    }

    #[test]
    fn test_load_deck_scans_image_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("b.PNG"), b"").expect("write");
        fs::write(dir.path().join("a.jpg"), b"").expect("write");
        fs::write(dir.path().join("notes.txt"), b"").expect("write");
        fs::create_dir(dir.path().join("sub")).expect("mkdir");
        fs::write(dir.path().join("sub").join("c.jpeg"), b"").expect("write");

        let deck = load_deck(dir.path()).expect("deck loads");

        let titles: Vec<&str> = deck.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
        let orders: Vec<u32> = deck.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_load_deck_missing_source() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.json");

        let result = load_deck(&path);

        assert!(matches!(result, Err(DeckError::NotFound(p)) if p == path));
    }
}
