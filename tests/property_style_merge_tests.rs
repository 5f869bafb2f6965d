use cheatsheet_rs::core::StyleOptions;
use proptest::prelude::*;

fn style_strategy() -> impl Strategy<Value = StyleOptions> {
    (
        proptest::option::of(1u32..400),
        proptest::option::of(1u32..400),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(prop::sample::select(vec!["red", "navy", "lightblue"])),
        proptest::collection::vec(
            (prop::sample::select(vec!["size", "scale", "fontsize", "line_width"]), 0.5f64..50.0),
            0..4,
        ),
    )
        .prop_map(|(width, height, grid, toolbar, color, extras)| {
            let mut style = StyleOptions::new();
            style.width = width;
            style.height = height;
            style.show_grid = grid;
            style.show_toolbar = toolbar;
            style.color = color.map(str::to_owned);
            for (key, value) in extras {
                style = style.with_extra(key, value);
            }
            style
        })
}

proptest! {
    #[test]
    fn merge_prefers_override_fields(base in style_strategy(), overrides in style_strategy()) {
        let merged = StyleOptions::merge(&base, &overrides);

        prop_assert_eq!(merged.width, overrides.width.or(base.width));
        prop_assert_eq!(merged.height, overrides.height.or(base.height));
        prop_assert_eq!(merged.show_grid, overrides.show_grid.or(base.show_grid));
        prop_assert_eq!(merged.show_toolbar, overrides.show_toolbar.or(base.show_toolbar));
        let expected_color = overrides.color.clone().or_else(|| base.color.clone());
        prop_assert_eq!(merged.color.clone(), expected_color);

        for (key, value) in &merged.extra {
            let expected = overrides.extra.get(key).or_else(|| base.extra.get(key));
            prop_assert_eq!(Some(value), expected);
        }
        for key in base.extra.keys().chain(overrides.extra.keys()) {
            prop_assert!(merged.extra.contains_key(key));
        }
    }

    #[test]
    fn empty_record_is_neutral(style in style_strategy()) {
        prop_assert_eq!(style.merged_with(&StyleOptions::new()), style.clone());
        prop_assert_eq!(StyleOptions::new().merged_with(&style), style);
    }

    #[test]
    fn merge_is_idempotent(base in style_strategy(), overrides in style_strategy()) {
        let once = base.merged_with(&overrides);
        let twice = once.merged_with(&overrides);
        prop_assert_eq!(once, twice);
    }
}
