use solid_color::{
    calculate_line_color, hex_to_rgb, hsv_to_rgb, parse_color, raster, rgb_to_hex, rgb_to_hsv,
    rgb_to_hue, try_parse_color, Color, ColorParseError, Hsv, Rgb, FALLBACK_HEXA,
};

#[test]
fn fallback_record_is_opaque_black() {
    for input in ["", "notacolor", "#xy"] {
        let c = parse_color(input);
        assert_eq!(c.hex(), "#000000", "{input:?}");
        assert_eq!(c.hexa(), FALLBACK_HEXA, "{input:?}");
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (0, 0, 0, 1.0), "{input:?}");
    }
}

#[test]
fn parsed_colors_feed_the_converter() {
    let c = parse_color("#F00");
    assert_eq!(c.hex(), "#FF0000");
    assert_eq!(rgb_to_hue(c.to_rgb()), 0.0);
    assert_eq!(rgb_to_hsv(c.to_rgb()), Hsv::new(0.0, 1.0, 1.0));
    assert_eq!(hex_to_rgb(&c.hex()), Rgb::new(255, 0, 0));
}

#[test]
fn rgba_notation_keeps_alpha() {
    let c = parse_color("rgba(0,128,255,0.5)");
    assert_eq!(c.hex(), "#0080FF");
    assert_eq!(c.hexa(), "#0080FF80");
    assert!((c.a() - 0.5).abs() <= 1.0 / 255.0);
}

#[cfg(feature = "keywords")]
#[test]
fn keywords_match_their_hex() {
    assert_eq!(parse_color("red"), parse_color("#FF0000"));
    assert_eq!(parse_color("red"), parse_color("rgb(255, 0, 0)"));
    assert_eq!(solid_color::keywords::lookup("navy"), Some("#000080FF"));
}

#[test]
fn strict_parse_and_fallback_agree() {
    for input in ["", "#", "#12", "#1234", "rgb(1,2)", "rgba(1,2,3,..)", "nope"] {
        assert!(try_parse_color(input).is_err(), "{input:?}");
        assert_eq!(parse_color(input), Color::default(), "{input:?}");
    }
    assert!(matches!(
        "#12".parse::<Color>(),
        Err(ColorParseError::InvalidLength(2))
    ));
}

#[test]
fn gray_is_degenerate() {
    let gray = Rgb::new(10, 10, 10);
    assert_eq!(rgb_to_hue(gray), 0.0);
    assert_eq!(rgb_to_hsv(gray).s, 0.0);
}

#[test]
fn hue_slider_matches_hsv_everywhere() {
    for width in [1.0, 7.0, 255.0, 360.0, 1920.0] {
        for step in 0..720 {
            let h = f64::from(step) / 2.0;
            let line = calculate_line_color(h / 360.0 * width, width);
            let hsv = hsv_to_rgb(Hsv::new(h, 1.0, 1.0));
            assert!(line.max_channel_delta(&hsv) <= 1, "h={h} w={width}");
        }
    }
}

#[test]
fn hex_round_trip_for_every_gray_and_primary_ramp() {
    for v in 0..=255u8 {
        for c in [Rgb::new(v, v, v), Rgb::new(v, 0, 0), Rgb::new(0, v, 255 - v)] {
            assert_eq!(hex_to_rgb(&rgb_to_hex(c)), c);
        }
    }
}

#[test]
fn hue_strip_ends_are_red() {
    let buf = raster::hue_strip(64, 1);
    assert_eq!(&buf[..4], &[255, 12, 0, 255]);
    assert_eq!(buf[63 * 4], 255);
    assert_eq!(buf[63 * 4 + 1], 0);
}
