//! Filter reportable symbols and assign content categories.
//!
//! Categories come from case-insensitive substring rules evaluated in a
//! fixed order; the first rule that matches wins.
//!
//! "tilemap" is listed after "map", so the Tilemap rule never fires. The
//! order is kept as-is to stay compatible with existing reports.

use crate::parser::schema::{Category, SizedSymbol, Symbol};
use crate::utils::config::{NOISE_FLOOR, SIZE_SUFFIX};
use log::info;

/// Name-substring rules, in priority order
pub const NAME_RULES: &[(Category, &[&str])] = &[
    (Category::Sprite, &["sprite"]),
    (Category::Tileset, &["tileset"]),
    (Category::Image, &["image"]),
    (Category::Map, &["map"]),
    (Category::Palette, &["palette", "_pal"]),
    (Category::Audio, &["xgm", "music", "sound", "audio", "sfx"]),
    (Category::Tilemap, &["tilemap"]),
    (Category::FontText, &["font"]),
];

/// Type tags the linker uses for text-segment symbols
pub const CODE_TYPE_TAGS: &[&str] = &["T", "t"];

/// Check whether a sized symbol belongs in the report
///
/// Pseudo-size symbols have served their purpose by now, and anything at
/// or under the noise floor is dropped.
pub fn is_reportable(symbol: &SizedSymbol) -> bool {
    !symbol.name.ends_with(SIZE_SUFFIX) && symbol.size > NOISE_FLOOR
}

/// Pick the category for a symbol name and type tag
pub fn classify(name: &str, type_tag: &str) -> Category {
    let lowered = name.to_lowercase();

    let by_name = NAME_RULES.iter().find_map(|(category, patterns)| {
        patterns
            .iter()
            .any(|pattern| lowered.contains(pattern))
            .then_some(*category)
    });

    if let Some(category) = by_name {
        category
    } else if lowered.starts_with('_') || CODE_TYPE_TAGS.contains(&type_tag) {
        Category::Code
    } else {
        Category::Other
    }
}

/// Filter sized symbols and categorize the survivors
///
/// **Public** - main entry point for classification
///
/// Input order is preserved.
pub fn classify_symbols(symbols: Vec<SizedSymbol>) -> Vec<Symbol> {
    let candidates = symbols.len();

    let classified: Vec<Symbol> = symbols
        .into_iter()
        .filter(is_reportable)
        .map(|symbol| {
            let category = classify(&symbol.name, &symbol.type_tag);
            Symbol {
                address: symbol.address,
                type_tag: symbol.type_tag,
                name: symbol.name,
                size: symbol.size,
                category,
            }
        })
        .collect();

    info!(
        "Classified {} reportable symbols ({} filtered out)",
        classified.len(),
        candidates - classified.len()
    );

    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(name: &str, size: u64) -> SizedSymbol {
        SizedSymbol {
            address: 0x1000,
            type_tag: "D".to_string(),
            name: name.to_string(),
            size,
        }
    }

    #[test]
    fn test_classify_each_rule() {
        assert_eq!(classify("spr_player_SPRITE", "D"), Category::Sprite);
        assert_eq!(classify("bg_tileset", "D"), Category::Tileset);
        assert_eq!(classify("title_image", "D"), Category::Image);
        assert_eq!(classify("level1_map", "D"), Category::Map);
        assert_eq!(classify("hero_palette", "D"), Category::Palette);
        assert_eq!(classify("hero_pal", "D"), Category::Palette);
        assert_eq!(classify("xgm_driver", "D"), Category::Audio);
        assert_eq!(classify("boss_music", "D"), Category::Audio);
        assert_eq!(classify("jump_sfx", "D"), Category::Audio);
        assert_eq!(classify("main_font", "D"), Category::FontText);
        assert_eq!(classify("_start", "D"), Category::Code);
        assert_eq!(classify("update", "T"), Category::Code);
        assert_eq!(classify("helper", "t"), Category::Code);
        assert_eq!(classify("lookup_table", "D"), Category::Other);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(classify("sprite_palette", "D"), Category::Sprite);
        assert_eq!(classify("_sprite_code", "T"), Category::Sprite);
        assert_eq!(classify("font_image", "D"), Category::Image);
    }

    #[test]
    fn test_tilemap_is_shadowed_by_map() {
        assert_eq!(classify("stage_tilemap", "D"), Category::Map);
    }

    #[test]
    fn test_reportable_filter() {
        assert!(is_reportable(&sized("blob", 17)));
        assert!(!is_reportable(&sized("blob", 16)));
        assert!(!is_reportable(&sized("blob_size", 4096)));
    }

    #[test]
    fn test_classify_symbols_filters_and_tags() {
        let symbols = vec![
            sized("hero_sprite", 256),
            sized("tiny", 8),
            sized("hero_sprite_size", 256),
            sized("table", 64),
        ];
        let classified = classify_symbols(symbols);

        assert_eq!(classified.len(), 2);
        assert_eq!(classified[0].name, "hero_sprite");
        assert_eq!(classified[0].category, Category::Sprite);
        assert_eq!(classified[1].category, Category::Other);
    }
}
