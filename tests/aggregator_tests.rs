use rom_usage_report::aggregator::classifier::{classify, classify_symbols};
use rom_usage_report::aggregator::metrics::{calculate_category_usage, to_report, total_size};
use rom_usage_report::aggregator::size_estimator::{estimate_sizes, LineAddresses};
use rom_usage_report::parser::{parse_symbol_table, Category, SizedSymbol};

#[test]
fn test_size_is_gap_to_next_higher_address() {
    for (a, b) in [(0x0u64, 0x20u64), (0x1000, 0x1011), (0x3FFF00, 0x3FFFFF)] {
        let first = format!("{:08x} D first", a);
        let second = format!("{:08x} D second", b);
        let lines = [first.as_str(), second.as_str()];

        let sized = estimate_sizes(&lines, parse_symbol_table(&lines));
        assert_eq!(sized[0].size, b - a);
    }
}

#[test]
fn test_scan_follows_line_order_not_address_order() {
    let lines = [
        "00003000 D c",
        "00001000 D a",
        "00002000 D b",
        "00004000 D end",
    ];
    let sized = estimate_sizes(&lines, parse_symbol_table(&lines));
    let sizes: Vec<(&str, u64)> = sized.iter().map(|s| (s.name.as_str(), s.size)).collect();

    assert_eq!(sizes, vec![("c", 0x1000), ("a", 0x1000), ("b", 0x2000)]);
}

#[test]
fn test_size_suffix_overrides_scan() {
    let lines = ["00000100 D blob_size", "00000200 D blob"];
    let sized = estimate_sizes(&lines, parse_symbol_table(&lines));

    assert_eq!(sized.len(), 1);
    assert_eq!(sized[0].name, "blob_size");
    assert_eq!(sized[0].size, 0x100);
}

#[test]
fn test_oversized_estimate_excluded() {
    // 0x000000 -> 0xA00000 is exactly 10 MiB
    let lines = ["00000000 D start", "00a00000 D far_away"];
    let addresses = LineAddresses::new(&lines);
    assert_eq!(addresses.scan_size(0, 0), 10 * 1024 * 1024);

    let sized = estimate_sizes(&lines, parse_symbol_table(&lines));
    assert!(sized.is_empty());
}

#[test]
fn test_noise_and_pseudo_symbols_never_reported() {
    let symbols = vec![
        SizedSymbol {
            address: 0x10,
            type_tag: "T".to_string(),
            name: "small".to_string(),
            size: 16,
        },
        SizedSymbol {
            address: 0x4000,
            type_tag: "A".to_string(),
            name: "music_size".to_string(),
            size: 0x4000,
        },
        SizedSymbol {
            address: 0x20,
            type_tag: "T".to_string(),
            name: "big".to_string(),
            size: 17,
        },
    ];
    let classified = classify_symbols(symbols);

    assert_eq!(classified.len(), 1);
    assert_eq!(classified[0].name, "big");
    assert_eq!(classified[0].category, Category::Code);
}

#[test]
fn test_classification_priority() {
    assert_eq!(classify("SpritePalette", "D"), Category::Sprite);
    assert_eq!(classify("TILESET_image", "D"), Category::Tileset);
    assert_eq!(classify("map_music", "D"), Category::Map);
    assert_eq!(classify("bgm_xgm", "T"), Category::Audio);
    assert_eq!(classify("level_tilemap", "D"), Category::Map);
}

#[test]
fn test_category_totals_sum_to_total() {
    let lines = [
        "00000200 T _start",
        "00000400 T main",
        "00000800 D hero_sprite",
        "00001000 D stage1_map",
        "00001800 D title_font",
        "00002000 D tail",
    ];
    let symbols = classify_symbols(estimate_sizes(&lines, parse_symbol_table(&lines)));
    let usage = calculate_category_usage(&symbols);

    let summed: u64 = usage.iter().map(|u| u.size).sum();
    assert_eq!(summed, total_size(&symbols));

    let report = to_report("symbol.txt", &symbols);
    assert_eq!(report.categories[0].category, Category::Sprite);
    assert_eq!(report.categories[1].category, Category::Map);
    assert_eq!(report.categories[0].size, 0x800);
    assert_eq!(report.symbols.first().unwrap().size, 0x800);
}
