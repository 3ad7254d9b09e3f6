//! Integration tests for value computation and the computed box.

use boxwood_css::{
    Axis, BorderWidth, BoxEdges, BoxSide, CacheConfig, ComputeContext, ComputedBox,
    ComputedValuesUpdater, Length, LengthUnit, MarginWidth, MaxSize, MinSize, PaddingWidth,
    ParserRegistry, PropertyValue, ResourceCache, Size, SpecifiedStyle, compute_box, parse_style,
};

fn registry() -> ParserRegistry {
    boxwood_common::warning::set_quiet(true);
    ParserRegistry::standard().unwrap()
}

fn px(value: f32) -> Length {
    Length::px(value)
}

fn parent_with_height(height: Size) -> ComputedBox {
    ComputedBox {
        height,
        ..ComputedBox::default()
    }
}

// ---------------------------------------------------------------------------
// Size::compute
// ---------------------------------------------------------------------------

#[test]
fn test_inherit_copies_parent_length() {
    let cache = ResourceCache::default();
    let mut value = Size::Inherit;
    value.compute(Some(&Size::Length(px(12.0))), &cache, 16.0, 8.0, false);
    assert_eq!(value, Size::Length(px(12.0)));
}

#[test]
fn test_inherit_without_parent_is_auto() {
    let cache = ResourceCache::default();
    let mut value = Size::Inherit;
    value.compute(None, &cache, 16.0, 8.0, false);
    assert_eq!(value, Size::Auto);
}

#[test]
fn test_inherit_copies_parent_percentage() {
    let cache = ResourceCache::default();
    let mut value = Size::Inherit;
    value.compute(Some(&Size::Percentage(40.0)), &cache, 16.0, 8.0, false);
    assert_eq!(value, Size::Percentage(40.0));
}

#[test]
fn test_percentage_against_auto_containing_block() {
    let cache = ResourceCache::default();

    let mut value = Size::Percentage(50.0);
    value.compute(None, &cache, 16.0, 8.0, true);
    assert_eq!(value, Size::Auto);

    let mut value = Size::Percentage(50.0);
    value.compute(None, &cache, 16.0, 8.0, false);
    assert_eq!(value, Size::Percentage(50.0));
}

#[test]
fn test_inherited_percentage_is_demoted_too() {
    let cache = ResourceCache::default();
    let mut value = Size::Inherit;
    value.compute(Some(&Size::Percentage(40.0)), &cache, 16.0, 8.0, true);
    assert_eq!(value, Size::Auto);
}

#[test]
fn test_relative_units_resolve_to_px() {
    let cache = ResourceCache::default();

    let mut value = Size::Length(Length::new(2.0, LengthUnit::Em));
    value.compute(None, &cache, 16.0, 8.0, false);
    assert_eq!(value, Size::Length(px(32.0)));

    let mut value = Size::Length(Length::new(3.0, LengthUnit::Ex));
    value.compute(None, &cache, 16.0, 8.0, false);
    assert_eq!(value, Size::Length(px(24.0)));

    let mut value = Size::Length(Length::new(1.0, LengthUnit::In));
    value.compute(None, &cache, 16.0, 8.0, false);
    assert_eq!(value, Size::Length(px(96.0)));
}

#[test]
fn test_auto_is_left_alone() {
    let cache = ResourceCache::default();
    let mut value = Size::Auto;
    value.compute(None, &cache, 16.0, 8.0, true);
    assert_eq!(value, Size::Auto);
}

#[test]
fn test_min_and_max_percentages_against_auto() {
    let cache = ResourceCache::default();

    let mut min = MinSize::Percentage(10.0);
    min.compute(None, &cache, 16.0, 8.0, true);
    assert_eq!(min, MinSize::Length(px(0.0)));

    let mut max = MaxSize::Percentage(10.0);
    max.compute(None, &cache, 16.0, 8.0, true);
    assert_eq!(max, MaxSize::None);
}

// ---------------------------------------------------------------------------
// Other families
// ---------------------------------------------------------------------------

#[test]
fn test_margin_compute() {
    let cache = ResourceCache::default();

    let mut value = MarginWidth::Inherit;
    value.compute(Some(&MarginWidth::Auto), &cache, 16.0, 8.0);
    assert_eq!(value, MarginWidth::Auto);

    let mut value = MarginWidth::Inherit;
    value.compute(None, &cache, 16.0, 8.0);
    assert_eq!(value, MarginWidth::Length(px(0.0)));

    // Margin percentages refer to the containing block's width.
    let mut value = MarginWidth::Percentage(10.0);
    value.compute(None, &cache, 16.0, 8.0);
    assert_eq!(value, MarginWidth::Percentage(10.0));

    let mut value = MarginWidth::Length(Length::new(-0.5, LengthUnit::Em));
    value.compute(None, &cache, 16.0, 8.0);
    assert_eq!(value, MarginWidth::Length(px(-8.0)));
}

#[test]
fn test_padding_inherit_without_parent() {
    let cache = ResourceCache::default();
    let mut value = PaddingWidth::Inherit;
    value.compute(None, &cache, 16.0, 8.0);
    assert_eq!(value, PaddingWidth::Length(px(0.0)));
}

#[test]
fn test_border_width_keywords_compute_to_px() {
    let cache = ResourceCache::default();
    for (keyword, expected) in [
        (BorderWidth::Thin, 1.0),
        (BorderWidth::Medium, 3.0),
        (BorderWidth::Thick, 5.0),
    ] {
        let mut value = keyword;
        value.compute(None, &cache, 16.0, 8.0);
        assert_eq!(value, BorderWidth::Length(px(expected)), "{keyword}");
    }

    let mut value = BorderWidth::Inherit;
    value.compute(Some(&BorderWidth::Thick), &cache, 16.0, 8.0);
    assert_eq!(value, BorderWidth::Length(px(5.0)));
}

#[test]
fn test_property_value_compute_uses_containing_block_for_heights_only() {
    let cache = ResourceCache::default();
    let ctx = ComputeContext::new(&cache).with_containing_block_height_auto(true);

    let mut height = PropertyValue::Height(Size::Percentage(50.0));
    height.compute(None, &ctx);
    assert_eq!(height, PropertyValue::Height(Size::Auto));

    let mut width = PropertyValue::Width(Size::Percentage(50.0));
    width.compute(None, &ctx);
    assert_eq!(width, PropertyValue::Width(Size::Percentage(50.0)));

    let mut min_width = PropertyValue::MinSize {
        axis: Axis::Horizontal,
        value: MinSize::Percentage(5.0),
    };
    min_width.compute(None, &ctx);
    assert_eq!(
        min_width,
        PropertyValue::MinSize {
            axis: Axis::Horizontal,
            value: MinSize::Percentage(5.0),
        }
    );
}

#[test]
fn test_property_value_inherits_from_matching_side() {
    let cache = ResourceCache::default();
    let ctx = ComputeContext::new(&cache);
    let parent = ComputedBox {
        margin: BoxEdges::from_array([
            MarginWidth::Length(px(1.0)),
            MarginWidth::Length(px(2.0)),
            MarginWidth::Length(px(3.0)),
            MarginWidth::Length(px(4.0)),
        ]),
        ..ComputedBox::default()
    };

    let mut value = PropertyValue::Margin {
        side: BoxSide::Bottom,
        value: MarginWidth::Inherit,
    };
    value.compute(Some(&parent), &ctx);
    assert_eq!(
        value,
        PropertyValue::Margin {
            side: BoxSide::Bottom,
            value: MarginWidth::Length(px(3.0)),
        }
    );
}

// ---------------------------------------------------------------------------
// Updater and compute_box
// ---------------------------------------------------------------------------

#[test]
fn test_updater_writes_owned_field() {
    let mut updater = ComputedValuesUpdater::new(ComputedBox::default());
    PropertyValue::Margin {
        side: BoxSide::Left,
        value: MarginWidth::Auto,
    }
    .apply(&mut updater);
    PropertyValue::MaxSize {
        axis: Axis::Vertical,
        value: MaxSize::Length(px(100.0)),
    }
    .apply(&mut updater);

    let computed = updater.finish();
    assert_eq!(computed.margin.left, MarginWidth::Auto);
    assert_eq!(computed.margin.right, MarginWidth::Length(px(0.0)));
    assert_eq!(computed.max_height, MaxSize::Length(px(100.0)));
    assert_eq!(computed.max_width, MaxSize::None);
}

#[test]
fn test_empty_style_gives_initial_values() {
    let cache = ResourceCache::default();
    let computed = compute_box(&SpecifiedStyle::new(), None, &ComputeContext::new(&cache));
    assert_eq!(computed, ComputedBox::default());
    assert_eq!(computed.border.top, BorderWidth::Length(px(3.0)));
    assert_eq!(computed.width, Size::Auto);
    assert_eq!(computed.min_height, MinSize::Length(px(0.0)));
}

#[test]
fn test_compute_box_from_text() {
    let registry = registry();
    let cache = ResourceCache::default();
    let ctx = ComputeContext::new(&cache);

    let style = parse_style(
        &registry,
        "margin: 0 auto; padding-left: 1em; border-width: thin thick; width: 2in; height: 50%",
    );
    let computed = compute_box(&style, None, &ctx);

    assert_eq!(computed.margin.top, MarginWidth::Length(px(0.0)));
    assert_eq!(computed.margin.right, MarginWidth::Auto);
    assert_eq!(computed.margin.left, MarginWidth::Auto);
    assert_eq!(computed.padding.left, PaddingWidth::Length(px(16.0)));
    assert_eq!(computed.padding.right, PaddingWidth::Length(px(0.0)));
    assert_eq!(computed.border.top, BorderWidth::Length(px(1.0)));
    assert_eq!(computed.border.right, BorderWidth::Length(px(5.0)));
    assert_eq!(computed.width, Size::Length(px(192.0)));
    assert_eq!(computed.height, Size::Percentage(50.0));
}

#[test]
fn test_compute_box_inherits_from_parent() {
    let registry = registry();
    let cache = ResourceCache::default();
    let ctx = ComputeContext::new(&cache);

    let parent = parent_with_height(Size::Length(px(12.0)));
    let style = parse_style(&registry, "height: inherit");

    let computed = compute_box(&style, Some(&parent), &ctx);
    assert_eq!(computed.height, Size::Length(px(12.0)));

    let orphan = compute_box(&style, None, &ctx);
    assert_eq!(orphan.height, Size::Auto);
}

#[test]
fn test_compute_box_with_auto_containing_block() {
    let registry = registry();
    let cache = ResourceCache::default();
    let ctx = ComputeContext::new(&cache).with_containing_block_height_auto(true);

    let style = parse_style(&registry, "height: 50%; min-height: 10%; max-height: 90%");
    let computed = compute_box(&style, None, &ctx);
    assert_eq!(computed.height, Size::Auto);
    assert_eq!(computed.min_height, MinSize::Length(px(0.0)));
    assert_eq!(computed.max_height, MaxSize::None);
}

#[test]
fn test_custom_font_metrics() {
    let registry = registry();
    let cache = ResourceCache::new(CacheConfig {
        default_font_size: 20.0,
        ..CacheConfig::default()
    })
    .unwrap();
    let ctx = ComputeContext::with_metrics(&cache, cache.metrics_for_font_size(10.0));

    let style = parse_style(&registry, "margin-top: 2em; margin-bottom: 2ex");
    let computed = compute_box(&style, None, &ctx);
    assert_eq!(computed.margin.top, MarginWidth::Length(px(20.0)));
    assert_eq!(computed.margin.bottom, MarginWidth::Length(px(10.0)));

    let ctx = ComputeContext::new(&cache);
    let computed = compute_box(&style, None, &ctx);
    assert_eq!(computed.margin.top, MarginWidth::Length(px(40.0)));
}

// ---------------------------------------------------------------------------
// Specified style
// ---------------------------------------------------------------------------

#[test]
fn test_later_declaration_wins() {
    let style = parse_style(&registry(), "width: 1px; width: 2px");
    assert_eq!(style.len(), 1);
    assert_eq!(
        style.get("width"),
        Some(&PropertyValue::Width(Size::Length(px(2.0))))
    );
}

#[test]
fn test_important_beats_later_declaration() {
    let style = parse_style(&registry(), "width: 1px !important; width: 2px");
    assert_eq!(
        style.get("width"),
        Some(&PropertyValue::Width(Size::Length(px(1.0))))
    );
    assert!(style.is_important("width"));

    let style = parse_style(&registry(), "width: 1px !important; width: 2px !important");
    assert_eq!(
        style.get("WIDTH"),
        Some(&PropertyValue::Width(Size::Length(px(2.0))))
    );
}

#[test]
fn test_invalid_declaration_keeps_earlier_value() {
    let style = parse_style(&registry(), "margin-left: 4px; margin-left: 5px extra");
    assert_eq!(
        style.get("margin-left"),
        Some(&PropertyValue::Margin {
            side: BoxSide::Left,
            value: MarginWidth::Length(px(4.0)),
        })
    );
}

#[test]
fn test_shorthand_and_longhand_interleave() {
    let style = parse_style(&registry(), "margin: 1px; margin-top: 2px");
    assert_eq!(style.len(), 4);
    assert_eq!(
        style.get("margin-top"),
        Some(&PropertyValue::Margin {
            side: BoxSide::Top,
            value: MarginWidth::Length(px(2.0)),
        })
    );
    assert_eq!(
        style.get("margin-left"),
        Some(&PropertyValue::Margin {
            side: BoxSide::Left,
            value: MarginWidth::Length(px(1.0)),
        })
    );
}

#[test]
fn test_unknown_properties_are_skipped() {
    let style = parse_style(&registry(), "color: red; -webkit-foo: 1; height: 3px");
    assert_eq!(style.len(), 1);
    assert!(style.get("color").is_none());
}

#[test]
fn test_computed_box_serializes_to_json() {
    let cache = ResourceCache::default();
    let style = parse_style(&registry(), "width: 10px");
    let computed = compute_box(&style, None, &ComputeContext::new(&cache));
    let json = serde_json::to_value(&computed).unwrap();
    assert_eq!(json["width"]["type"], "length");
    assert_eq!(json["width"]["value"]["unit"], "px");
    assert_eq!(json["height"]["type"], "auto");
}

#[test]
fn test_overflowing_lengths_stay_finite_and_reparse() {
    let registry = registry();
    let cache = ResourceCache::default();
    let ctx = ComputeContext::new(&cache);

    let style = parse_style(
        &registry,
        "margin-top: 1e37in; width: 1e38in; margin-left: -1e38em",
    );
    let computed = compute_box(&style, None, &ctx);
    assert_eq!(computed.margin.top, MarginWidth::Length(px(f32::MAX)));
    assert_eq!(computed.margin.left, MarginWidth::Length(px(-f32::MAX)));
    assert_eq!(computed.width, Size::Length(px(f32::MAX)));

    let top = PropertyValue::Margin {
        side: BoxSide::Top,
        value: computed.margin.top,
    };
    let text = top.to_string();
    assert_eq!(
        registry.dispatch("margin-top", &boxwood_css::tokenize(&text)),
        vec![top],
        "'{text}' should re-parse"
    );

    let width = PropertyValue::Width(computed.width);
    let text = width.to_string();
    assert_eq!(
        registry.dispatch("width", &boxwood_css::tokenize(&text)),
        vec![width],
        "'{text}' should re-parse"
    );
}
