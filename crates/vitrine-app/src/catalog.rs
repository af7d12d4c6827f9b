//! Application catalog feed.
//!
//! The tile list arrives as an external JSON feed of application
//! descriptors. Field names and the `"retangle-vertical"` size spelling
//! are the feed's wire format. Tiles get their ids from feed order.

use std::path::Path;

use serde::Deserialize;
use vitrine_types::{LaunchSpec, Result, SizeClass, Tile, VitrineError};

/// One entry of the JSON feed.
#[derive(Debug, Clone, Deserialize)]
pub struct AppDescriptor {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Icon", default)]
    pub icon: String,
    #[serde(rename = "Type")]
    pub kind: LaunchKind,
    #[serde(rename = "Path")]
    pub path: String,
    /// Size class string; unknown values degrade to a 1x1 box.
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub background: String,
    #[serde(rename = "color", default)]
    pub foreground: String,
}

/// Launch type as spelled by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LaunchKind {
    Link,
    Programa,
}

impl AppDescriptor {
    fn size_class(&self) -> SizeClass {
        match self.style.as_deref() {
            Some("retangle-vertical") => SizeClass::TallBox,
            Some("box") | None => SizeClass::Box,
            Some(other) => {
                log::warn!("Unknown tile style '{other}' for '{}', using box", self.name);
                SizeClass::Box
            },
        }
    }

    fn launch_spec(&self) -> LaunchSpec {
        match self.kind {
            LaunchKind::Link => LaunchSpec::Link(self.path.clone()),
            LaunchKind::Programa => LaunchSpec::Program(self.path.clone()),
        }
    }
}

/// Parse the raw JSON feed.
pub fn parse_feed(json: &str) -> Result<Vec<AppDescriptor>> {
    Ok(serde_json::from_str(json)?)
}

/// Build tiles from feed entries, assigning ids from feed order.
pub fn tiles_from_feed(feed: &[AppDescriptor]) -> Vec<Tile> {
    feed.iter()
        .enumerate()
        .map(|(id, app)| {
            Tile::new(
                id,
                app.name.clone(),
                app.icon.clone(),
                app.size_class(),
                app.background.clone(),
                app.foreground.clone(),
                app.launch_spec(),
            )
        })
        .collect()
}

/// Load and convert the catalog file.
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>> {
    if !path.exists() {
        return Err(VitrineError::Catalog(format!(
            "catalog feed not found: {}",
            path.display()
        )));
    }
    let json = std::fs::read_to_string(path)?;
    let feed = parse_feed(&json)?;
    Ok(tiles_from_feed(&feed))
}

/// Built-in demo catalog used when no feed is available.
pub fn demo_tiles() -> Vec<Tile> {
    let feed = [
        ("Streaming", "Tv", LaunchKind::Link, "https://tv.example", Some("box")),
        ("Music", "Music", LaunchKind::Link, "https://music.example", Some("retangle-vertical")),
        ("News", "Newspaper", LaunchKind::Link, "https://news.example", Some("box")),
        ("Photos", "Image", LaunchKind::Programa, "/usr/bin/photos", Some("box")),
        ("Weather", "CloudSun", LaunchKind::Link, "https://weather.example", Some("box")),
        ("Games", "Gamepad2", LaunchKind::Programa, "/usr/bin/games", Some("box")),
        ("Radio", "Radio", LaunchKind::Link, "https://radio.example", Some("box")),
        ("Settings", "Settings", LaunchKind::Programa, "/usr/bin/settings", Some("box")),
        ("Browser", "Globe", LaunchKind::Programa, "/usr/bin/browser", Some("box")),
    ];
    let feed: Vec<AppDescriptor> = feed
        .into_iter()
        .map(|(name, icon, kind, path, style)| AppDescriptor {
            name: name.to_string(),
            icon: icon.to_string(),
            kind,
            path: path.to_string(),
            style: style.map(str::to_string),
            background: "#1e293b".to_string(),
            foreground: "#f8fafc".to_string(),
        })
        .collect();
    tiles_from_feed(&feed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r##"[
        {
            "Name": "Filmes",
            "Icon": "Clapperboard",
            "Type": "Link",
            "Path": "https://filmes.example",
            "style": "retangle-vertical",
            "background": "#7c3aed",
            "color": "#ffffff"
        },
        {
            "Name": "Player",
            "Type": "Programa",
            "Path": "/opt/player/run",
            "style": "box"
        }
    ]"##;

    #[test]
    fn parse_feed_reads_wire_format() {
        let feed = parse_feed(FEED).unwrap();
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].name, "Filmes");
        assert_eq!(feed[0].kind, LaunchKind::Link);
        assert_eq!(feed[1].kind, LaunchKind::Programa);
        // Optional fields default.
        assert_eq!(feed[1].icon, "");
        assert_eq!(feed[1].background, "");
    }

    #[test]
    fn tiles_get_ids_from_feed_order() {
        let tiles = tiles_from_feed(&parse_feed(FEED).unwrap());
        assert_eq!(tiles[0].id, 0);
        assert_eq!(tiles[1].id, 1);
    }

    #[test]
    fn size_classes_map_to_footprints() {
        let tiles = tiles_from_feed(&parse_feed(FEED).unwrap());
        assert_eq!((tiles[0].width, tiles[0].height), (1, 2));
        assert_eq!((tiles[1].width, tiles[1].height), (1, 1));
    }

    #[test]
    fn launch_types_map_to_specs() {
        let tiles = tiles_from_feed(&parse_feed(FEED).unwrap());
        assert_eq!(
            tiles[0].launch,
            LaunchSpec::Link("https://filmes.example".into())
        );
        assert_eq!(
            tiles[1].launch,
            LaunchSpec::Program("/opt/player/run".into())
        );
    }

    #[test]
    fn unknown_style_degrades_to_box() {
        let json = r#"[{"Name": "X", "Type": "Link", "Path": "https://x", "style": "hexagon"}]"#;
        let tiles = tiles_from_feed(&parse_feed(json).unwrap());
        assert_eq!((tiles[0].width, tiles[0].height), (1, 1));
    }

    #[test]
    fn missing_style_defaults_to_box() {
        let json = r#"[{"Name": "X", "Type": "Link", "Path": "https://x"}]"#;
        let tiles = tiles_from_feed(&parse_feed(json).unwrap());
        assert_eq!((tiles[0].width, tiles[0].height), (1, 1));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_feed("not json").is_err());
    }

    #[test]
    fn missing_file_is_a_catalog_error() {
        let err = load_tiles(Path::new("/nonexistent/apps.json")).unwrap_err();
        assert!(format!("{err}").contains("catalog"));
    }

    #[test]
    fn demo_catalog_has_one_tall_tile() {
        let tiles = demo_tiles();
        assert_eq!(tiles.len(), 9);
        assert_eq!(tiles.iter().filter(|t| t.is_tall()).count(), 1);
    }
}
