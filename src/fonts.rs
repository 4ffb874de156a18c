//! Japanese font discovery. egui's bundled fonts have no kana, so a system
//! CJK font is installed as a fallback for every text family.

use crate::errors::{PanelError, Result};
use egui::{FontData, FontDefinitions, FontFamily};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FONT_KEY: &str = "kanapad-cjk";

/// Well-known locations of fonts with full kana coverage.
pub fn system_font_candidates() -> Vec<PathBuf> {
    let paths: &[&str] = if cfg!(target_os = "windows") {
        &[
            "C:\\Windows\\Fonts\\YuGothM.ttc",
            "C:\\Windows\\Fonts\\meiryo.ttc",
            "C:\\Windows\\Fonts\\msgothic.ttc",
        ]
    } else if cfg!(target_os = "macos") {
        &[
            "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
            "/System/Library/Fonts/Hiragino Sans GB.ttc",
            "/Library/Fonts/Arial Unicode.ttf",
        ]
    } else {
        &[
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/OTF/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/fonts-japanese-gothic.ttf",
            "/usr/share/fonts/truetype/takao-gothic/TakaoPGothic.ttf",
            "/usr/share/fonts/TTF/ipag.ttf",
        ]
    };
    paths.iter().map(PathBuf::from).collect()
}

/// Check the sfnt header so egui never sees a file it cannot parse.
fn is_font_data(bytes: &[u8]) -> bool {
    matches!(
        bytes.get(..4),
        Some([0x00, 0x01, 0x00, 0x00]) | Some(b"OTTO") | Some(b"ttcf") | Some(b"true")
    )
}

pub fn read_font(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|source| PanelError::FontLoad {
        path: path.to_path_buf(),
        source,
    })?;
    if !is_font_data(&bytes) {
        return Err(PanelError::InvalidFont {
            path: path.to_path_buf(),
        });
    }
    Ok(bytes)
}

/// First usable font: the configured path if it loads, then the candidates.
pub fn find_cjk_font(
    configured: Option<&Path>,
    candidates: &[PathBuf],
) -> Result<(PathBuf, Vec<u8>)> {
    if let Some(path) = configured {
        match read_font(path) {
            Ok(bytes) => return Ok((path.to_path_buf(), bytes)),
            Err(e) => e.log(),
        }
    }

    for path in candidates.iter().filter(|p| p.is_file()) {
        match read_font(path) {
            Ok(bytes) => return Ok((path.clone(), bytes)),
            Err(e) => log::debug!("Skipping font candidate: {}", e),
        }
    }

    Err(PanelError::FontNotFound {
        searched: candidates.len() + usize::from(configured.is_some()),
    })
}

/// Font definitions with `bytes` appended as the last fallback of both
/// families, so Latin text keeps egui's own fonts.
pub fn definitions_with_fallback(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_KEY.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_KEY.to_owned());
    }
    fonts
}

/// Install a CJK font into the context. Returns the path that was used.
pub fn install_cjk_font(ctx: &egui::Context, configured: Option<&Path>) -> Result<PathBuf> {
    let (path, bytes) = find_cjk_font(configured, &system_font_candidates())?;
    ctx.set_fonts(definitions_with_fallback(bytes));
    log::info!("Using CJK font {}", path.display());
    Ok(path)
}
