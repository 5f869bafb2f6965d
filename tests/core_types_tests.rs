use approx::{assert_abs_diff_eq, assert_relative_eq};
use cheatsheet_rs::core::{
    ArrowDirection, Bounds, ChartKind, LinearScale, PlotData, PlotSpec, finite_extent,
};
use cheatsheet_rs::error::SheetError;
use cheatsheet_rs::render::{Color, Colormap};

#[test]
fn chart_kind_parses_case_insensitively() {
    assert_eq!("hextiles".parse::<ChartKind>().expect("hextiles"), ChartKind::HexTiles);
    assert_eq!("HLine".parse::<ChartKind>().expect("hline"), ChartKind::HLine);
    assert!(matches!(
        "Pie".parse::<ChartKind>(),
        Err(SheetError::InvalidData(_))
    ));
}

#[test]
fn element_kinds_exclude_layout_only() {
    assert_eq!(ChartKind::ELEMENTS.len(), 14);
    assert!(!ChartKind::ELEMENTS.contains(&ChartKind::Layout));
    assert!(ChartKind::ELEMENTS.contains(&ChartKind::Overlay));
    assert!(ChartKind::Overlay.is_composite());
    assert!(ChartKind::Layout.is_composite());
    assert!(!ChartKind::Curve.is_composite());
}

#[test]
fn kinds_accept_their_data_shapes() {
    assert!(ChartKind::Area.accepts(&PlotData::values(&[1.0])));
    assert!(ChartKind::Area.accepts(&PlotData::area(&[0.0], &[1.0], None)));
    assert!(ChartKind::VLine.accepts(&PlotData::Reference(0.5)));
    assert!(!ChartKind::Curve.accepts(&PlotData::tiles("Wikipedia")));
    assert!(!ChartKind::Image.accepts(&PlotData::samples(&[0.0], &[0.0], &[&[1.0]])));
}

#[test]
fn plot_data_validation_rejects_bad_literals() {
    assert!(PlotData::values(&[0.0, 1.0, 0.5]).validate().is_ok());
    assert!(PlotData::values(&[f64::NAN]).validate().is_err());
    assert!(PlotData::area(&[0.0, 1.0], &[1.0], None).validate().is_err());
    assert!(
        PlotData::area(&[0.0, 1.0], &[1.0, 2.0], Some(&[0.0][..]))
            .validate()
            .is_err()
    );
    assert!(PlotData::annotation(0.5, 0.5, "").validate().is_err());
    assert!(PlotData::tiles("").validate().is_err());
    assert!(PlotData::Composite(Vec::new()).validate().is_err());
    assert!(
        PlotData::Composite(vec![PlotSpec::new(
            ChartKind::Curve,
            PlotData::values(&[1.0])
        )])
        .validate()
        .is_ok()
    );
}

#[test]
fn arrow_markers_map_to_directions() {
    assert_eq!(ArrowDirection::from_marker("^").expect("up"), ArrowDirection::Up);
    assert_eq!(ArrowDirection::from_marker("v").expect("down"), ArrowDirection::Down);
    assert_eq!(ArrowDirection::from_marker("<").expect("left"), ArrowDirection::Left);
    assert_eq!(ArrowDirection::from_marker(">").expect("right"), ArrowDirection::Right);
    assert!(ArrowDirection::from_marker("x").is_err());
}

#[test]
fn bounds_cover_data_and_baseline() {
    let values = PlotData::values(&[2.0, 5.0, 3.0]).bounds();
    assert_eq!(values, Bounds::new(0.0, 2.0, 2.0, 5.0));

    let area = PlotData::area(&[0.0, 1.0, 2.0], &[1.0, 2.0, 1.5], None).bounds();
    assert_relative_eq!(area.y_min, 0.0);
    assert_relative_eq!(area.y_max, 2.0);

    assert_eq!(finite_extent(&[f64::NAN, 3.0, -1.0]), Some((-1.0, 3.0)));
    assert_eq!(finite_extent(&[]), None);
}

#[test]
fn linear_scale_round_trips_and_fits_degenerate_domains() {
    let scale = LinearScale::new(0.0, 10.0, 100.0, 0.0).expect("scale");
    let px = scale.project(2.5).expect("project");
    assert_relative_eq!(px, 75.0);
    assert_relative_eq!(scale.invert(px).expect("invert"), 2.5);

    assert!(LinearScale::new(1.0, 1.0, 0.0, 10.0).is_err());
    let fitted = LinearScale::fit(0.5, 0.5, 0.0, 10.0).expect("fit");
    assert_eq!(fitted.domain(), (0.0, 1.0));
    assert_relative_eq!(fitted.project(0.5).expect("mid"), 5.0);
}

#[test]
fn css_colors_parse_hex_and_names() {
    assert_eq!(Color::parse_css("#fff").expect("short hex").to_hex(), "#ffffff");
    assert_eq!(Color::parse_css("#2b3e50").expect("hex").to_hex(), "#2b3e50");
    assert_eq!(Color::parse_css(" LightBlue ").expect("name").to_hex(), "#add8e6");
    assert!(Color::parse_css("#12").is_err());
    assert!(Color::parse_css("chartreuse-ish").is_err());
}

#[test]
fn colormaps_sample_endpoints_and_reverse() {
    let viridis = Colormap::named("viridis").expect("viridis");
    let start = viridis.sample(0.0);
    let end = viridis.sample(1.0);
    assert_eq!(start.to_hex(), "#440154");
    assert_eq!(end.to_hex(), "#fde725");

    let reversed = Colormap::named("viridis_r").expect("reversed");
    assert_abs_diff_eq!(reversed.sample(0.0).red, end.red, epsilon = 1e-12);
    assert_abs_diff_eq!(reversed.sample(1.0).blue, start.blue, epsilon = 1e-12);
    assert_eq!(reversed.name(), "viridis");

    assert_eq!(viridis.sample(-3.0), start);
    assert_eq!(Colormap::default().name(), Colormap::DEFAULT_NAME);
    assert!(Colormap::named("rainbow").is_err());
}
