//! Test helpers for writing data sheets into a temporary directory.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

pub(super) const DISHES_JSON: &str = r#"[
  { "Speisename": "Steak Tartare", "Fettgehalt": "mittel", "Säure": "hoch" },
  { "Speisename": "Steak", "Fettgehalt": "hoch", "Würze": "mittel", "Säure": "mittel" },
  { "Speisename": "Lachsfilet", "Fettgehalt": "mittel", "Säure": "mittel", "Süße": "niedrig" },
  { "Speisename": "Apfeltarte", "Fettgehalt": "mittel", "Süße": "hoch", "Aromaprofil": null }
]"#;

pub(super) const WINES_JSON: &str = r#"[
  { "Weinname": "Riesling Kabinett", "Farbe": "Weißwein", "Körper": "leicht", "Säure": "hoch", "Süße": "halbtrocken" },
  { "Weinname": "Barolo", "Farbe": "Rotwein", "Körper": "hoch", "Säure": "hoch", "Tannin": "hoch", "Süße": "niedrig", "Alkoholgehalt": 14.5 },
  { "Weinname": "Crémant de Loire", "Farbe": "Schaumwein", "Körper": "leicht", "Säure": "hoch", "Süße": "trocken" },
  { "Weinname": "Spätburgunder", "Farbe": "Rotwein", "Körper": "mittel", "Säure": "mittel", "Tannin": "mittel" }
]"#;

pub(super) const RULES_JSON: &str = r#"[
  { "Kategorie": "Tannin vs Fett", "Regelbeschreibung": "Gerbstoffe binden Fett", "Quelle": "Handbuch" },
  { "Kategorie": "", "Regelbeschreibung": "ohne Kategorie" }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary data directory holding the three sheets.
#[derive(Debug)]
pub(super) struct DataDir {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn empty() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn with_sheets() -> Self {
        let dir = Self::empty();
        write_utf8(&dir.root.join("dishes.json"), DISHES_JSON.as_bytes());
        write_utf8(&dir.root.join("wines.json"), WINES_JSON.as_bytes());
        write_utf8(&dir.root.join("rules.json"), RULES_JSON.as_bytes());
        dir
    }
}
