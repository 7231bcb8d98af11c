#![forbid(unsafe_code)]

//! The junction table: direction map → box-drawing glyph.
//!
//! The table ships as `assets/junctions.json`, nested four levels deep in
//! the fixed order `up → down → left → right`. Each level is keyed by
//! `none`, `thin`, `thick`, or `double`. A leaf is either a glyph or an
//! object of `style → glyph` that always has a `default` entry:
//!
//! ```json
//! { "none": { "thin": { "none": { "thin": { "default": "┌", "round": "╭" } } } } }
//! ```
//!
//! The process-wide table is loaded once on first use. Setting
//! `TFRAME_JUNCTION_TABLE` to a file path replaces the embedded asset.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::LazyLock;

use serde::Deserialize;
use tframe_core::{Direction, JunctionMap, Thickness, UnknownThickness};

/// Style key every styled leaf must carry.
pub const DEFAULT_STYLE: &str = "default";

/// Environment variable naming a replacement table file.
pub const TABLE_PATH_ENV: &str = "TFRAME_JUNCTION_TABLE";

const BUILTIN_JSON: &str = include_str!("../assets/junctions.json");

static GLOBAL: LazyLock<JunctionTable> = LazyLock::new(|| match JunctionTable::load_configured() {
    Ok(table) => table,
    Err(err) => panic!("junction table could not be loaded: {err}"),
});

/// Errors raised while loading a junction table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("malformed junction table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read junction table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("bad key at {path}: {source}")]
    UnknownKey {
        path: String,
        #[source]
        source: UnknownThickness,
    },
    #[error("leaf {path} must be a single character, got {glyph:?}")]
    InvalidGlyph { path: String, glyph: String },
    #[error("styled leaf {path} has no \"default\" entry")]
    MissingDefault { path: String },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawLeaf {
    Glyph(String),
    Styled(BTreeMap<String, String>),
}

type Level<T> = BTreeMap<String, T>;
type RawTable = Level<Level<Level<Level<RawLeaf>>>>;

/// A resolved table leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// One glyph regardless of style.
    Glyph(char),
    /// Style-specific glyphs; always contains [`DEFAULT_STYLE`].
    Styled(BTreeMap<String, char>),
}

impl Leaf {
    /// Glyph for `style`, falling back to the default entry.
    pub fn glyph(&self, style: &str) -> Option<char> {
        match self {
            Self::Glyph(c) => Some(*c),
            Self::Styled(styles) => styles
                .get(style)
                .or_else(|| styles.get(DEFAULT_STYLE))
                .copied(),
        }
    }

    /// Whether `style` has its own entry (no fallback).
    pub fn has_style(&self, style: &str) -> bool {
        match self {
            Self::Glyph(_) => style == DEFAULT_STYLE,
            Self::Styled(styles) => styles.contains_key(style),
        }
    }
}

/// In-memory junction table.
#[derive(Debug, Clone, Default)]
pub struct JunctionTable {
    entries: HashMap<JunctionMap, Leaf>,
    reverse: HashMap<char, (JunctionMap, String)>,
}

impl JunctionTable {
    /// The process-wide table.
    ///
    /// # Panics
    ///
    /// Panics on first use if the table cannot be loaded. Nothing can be
    /// drawn without it.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// The table embedded in the crate, parsed fresh.
    pub fn builtin() -> Result<Self, TableError> {
        Self::from_json(BUILTIN_JSON)
    }

    /// Load from `TFRAME_JUNCTION_TABLE` if set, else the embedded asset.
    pub fn load_configured() -> Result<Self, TableError> {
        match std::env::var_os(TABLE_PATH_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                let json = std::fs::read_to_string(&path).map_err(|source| TableError::Io {
                    path: path.clone(),
                    source,
                })?;
                let table = Self::from_json(&json)?;
                tframe_core::info!(
                    source = %path.display(),
                    entries = table.len(),
                    "junction table loaded"
                );
                Ok(table)
            }
            None => {
                let table = Self::builtin()?;
                tframe_core::debug!(entries = table.len(), "builtin junction table loaded");
                Ok(table)
            }
        }
    }

    /// Parse and validate a table document.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let raw: RawTable = serde_json::from_str(json)?;
        let mut table = Self::default();
        for (up, downs) in &raw {
            for (down, lefts) in downs {
                for (left, rights) in lefts {
                    for (right, raw_leaf) in rights {
                        let keys = [up.as_str(), down.as_str(), left.as_str(), right.as_str()];
                        let path = keys.join("/");
                        let map = map_from_keys(keys, &path)?;
                        let leaf = convert_leaf(raw_leaf, &path)?;
                        table.insert(map, leaf);
                    }
                }
            }
        }
        Ok(table)
    }

    fn insert(&mut self, map: JunctionMap, leaf: Leaf) {
        // Default glyphs claim the reverse index first so a glyph shared by
        // several styled entries maps back to its canonical shape.
        match &leaf {
            Leaf::Glyph(c) => {
                self.reverse.insert(*c, (map, DEFAULT_STYLE.to_owned()));
            }
            Leaf::Styled(styles) => {
                for (style, c) in styles {
                    match self.reverse.entry(*c) {
                        Entry::Vacant(slot) => {
                            slot.insert((map, style.clone()));
                        }
                        Entry::Occupied(mut slot) => {
                            if style == DEFAULT_STYLE && slot.get().1 != DEFAULT_STYLE {
                                slot.insert((map, style.clone()));
                            }
                        }
                    }
                }
            }
        }
        self.entries.insert(map, leaf);
    }

    pub fn get(&self, map: &JunctionMap) -> Option<&Leaf> {
        self.entries.get(map)
    }

    /// Glyph for `map` in `style`, with default fallback.
    pub fn glyph(&self, map: &JunctionMap, style: &str) -> Option<char> {
        self.get(map).and_then(|leaf| leaf.glyph(style))
    }

    /// Reverse lookup: the direction map and style that produce `glyph`.
    pub fn find(&self, glyph: char) -> Option<(JunctionMap, &str)> {
        self.reverse
            .get(&glyph)
            .map(|(map, style)| (*map, style.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn map_from_keys(keys: [&str; 4], path: &str) -> Result<JunctionMap, TableError> {
    let mut map = JunctionMap::new();
    for (direction, key) in Direction::ALL.into_iter().zip(keys) {
        let thickness = Thickness::from_key(key).map_err(|source| TableError::UnknownKey {
            path: path.to_owned(),
            source,
        })?;
        if let Some(thickness) = thickness {
            map.insert(direction, thickness);
        }
    }
    Ok(map)
}

fn single_char(glyph: &str, path: &str) -> Result<char, TableError> {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableError::InvalidGlyph {
            path: path.to_owned(),
            glyph: glyph.to_owned(),
        }),
    }
}

fn convert_leaf(raw: &RawLeaf, path: &str) -> Result<Leaf, TableError> {
    match raw {
        RawLeaf::Glyph(glyph) => single_char(glyph, path).map(Leaf::Glyph),
        RawLeaf::Styled(styles) => {
            if !styles.contains_key(DEFAULT_STYLE) {
                return Err(TableError::MissingDefault {
                    path: path.to_owned(),
                });
            }
            let mut out = BTreeMap::new();
            for (style, glyph) in styles {
                let c = single_char(glyph, &format!("{path}:{style}"))?;
                out.insert(style.clone(), c);
            }
            Ok(Leaf::Styled(out))
        }
    }
}
