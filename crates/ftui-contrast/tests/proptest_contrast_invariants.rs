//! Property-based invariants for luminance, classification, derivation, and ranking.
//!
//! 1. **Luminance range** — every channel triple maps into `[0, 255]`.
//! 2. **Exhaustive tone** — every color is exactly one of dark or light.
//! 3. **Contrast flip** — a font color derived from a light background is
//!    dark; one derived from a dark background (other than near-black blues)
//!    is light.
//! 4. **Focus independence** — the focus color never depends on the font
//!    contrast factor.
//! 5. **Ranking** — single-element identity, duplicate stability,
//!    first-wins ties, and parallel/sequential agreement.

use ftui_contrast::{
    Color, ContrastCache, ContrastConfig, ThemeValue, Tone, classify, darkest_index, darkest_of,
    focus_color_for, font_color_for, font_color_for_value, is_dark, luminance, par_darkest_index,
};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Color::new(r, g, b))
}

fn any_config() -> impl Strategy<Value = ContrastConfig> {
    (0.0f64..=255.0, 0.01f64..=1.0).prop_map(|(threshold, contrast)| {
        ContrastConfig::new()
            .luminance_threshold(threshold)
            .font_contrast(contrast)
    })
}

proptest! {
    #[test]
    fn luminance_stays_in_channel_range(color in any_color()) {
        let luma = luminance(color);
        prop_assert!(luma >= 0.0);
        prop_assert!(luma <= 255.0 + 1e-9);
    }

    #[test]
    fn tone_is_exclusive_and_exhaustive(color in any_color(), config in any_config()) {
        let dark = is_dark(color, config.luminance_threshold);
        let tone = classify(color, &config);
        prop_assert_eq!(tone == Tone::Dark, dark);
        prop_assert_eq!(tone == Tone::Light, !dark);
    }

    #[test]
    fn light_background_yields_dark_font(color in any_color()) {
        let config = ContrastConfig::default();
        prop_assume!(classify(color, &config) == Tone::Light);
        let font = font_color_for(color, &config);
        prop_assert_eq!(classify(font, &config), Tone::Dark);
    }

    #[test]
    fn dark_background_yields_light_font(color in any_color()) {
        let config = ContrastConfig::default();
        prop_assume!(classify(color, &config) == Tone::Dark);
        // Near-black blues and violets (lightness under ~4.7%) keep enough
        // saturation that their lightened font still reads as dark.
        prop_assume!(color.lightness() >= 5.0);
        let font = font_color_for(color, &config);
        prop_assert_eq!(classify(font, &config), Tone::Light);
    }

    #[test]
    fn font_color_is_total_over_colors(color in any_color(), config in any_config()) {
        let value = ThemeValue::Color(color);
        prop_assert_eq!(
            font_color_for_value(&value, &config),
            Some(font_color_for(color, &config))
        );
    }

    #[test]
    fn focus_color_ignores_font_contrast(
        color in any_color(),
        a in 0.01f64..=1.0,
        b in 0.01f64..=1.0,
    ) {
        let first = focus_color_for(color, &ContrastConfig::new().font_contrast(a));
        let second = focus_color_for(color, &ContrastConfig::new().font_contrast(b));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn single_color_palette_is_identity(color in any_color()) {
        prop_assert_eq!(darkest_of(&[color]), Some(color));
    }

    #[test]
    fn duplicating_strict_darkest_is_stable(a in any_color(), b in any_color()) {
        prop_assume!(luminance(a) < luminance(b));
        prop_assert_eq!(darkest_of(&[a, b]), darkest_of(&[a, b, a]));
        prop_assert_eq!(darkest_of(&[a, b]), Some(a));
    }

    #[test]
    fn equal_luminance_prefers_first(color in any_color(), tail in prop::collection::vec(any_color(), 0..8)) {
        let mut palette = vec![color, color];
        palette.extend(tail.into_iter().filter(|c| luminance(*c) >= luminance(color)));
        prop_assert_eq!(darkest_index(&palette), Some(0));
    }

    #[test]
    fn parallel_ranking_matches_sequential(colors in prop::collection::vec(any_color(), 0..512)) {
        prop_assert_eq!(par_darkest_index(&colors), darkest_index(&colors));
    }

    #[test]
    fn darkest_is_no_brighter_than_any_candidate(colors in prop::collection::vec(any_color(), 1..64)) {
        let darkest = darkest_of(&colors).unwrap();
        for color in &colors {
            prop_assert!(luminance(darkest) <= luminance(*color));
        }
    }

    #[test]
    fn cache_agrees_with_direct_derivation(colors in prop::collection::vec(any_color(), 1..64), config in any_config()) {
        let mut cache = ContrastCache::with_capacity(config, 16);
        for color in colors {
            prop_assert_eq!(cache.font_color(color), font_color_for(color, &config));
            prop_assert_eq!(cache.focus_color(color), focus_color_for(color, &config));
        }
    }
}
