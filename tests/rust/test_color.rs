use banner_render::color::{self, Color, ColorStyle, NamedColor, Rgb};
use banner_render::RenderError;

#[test]
fn test_named_table() {
    assert_eq!(NamedColor::Red.rgb(), Rgb::new(255, 65, 54));
    assert_eq!(NamedColor::Green.rgb(), Rgb::new(149, 189, 64));
    assert_eq!(NamedColor::Blue.rgb(), Rgb::new(0, 116, 217));
    assert_eq!(NamedColor::Black.rgb(), Rgb::new(0, 0, 0));
    assert_eq!(NamedColor::White.rgb(), Rgb::new(255, 255, 255));
}

#[test]
fn test_named_to_rgb_is_stable() {
    let red = Color::Named(NamedColor::Red);
    for _ in 0..3 {
        assert_eq!(red.to_rgb().to_string(), "rgb(255,65,54)");
    }
}

#[test]
fn test_explicit_rgb_passes_through() {
    assert_eq!(Color::rgb(255, 128, 0).to_rgb(), Rgb::new(255, 128, 0));
    assert_eq!(Color::try_rgb(0, 255, 10).unwrap(), Color::rgb(0, 255, 10));
}

#[test]
fn test_try_rgb_out_of_range() {
    match Color::try_rgb(256, 0, 0) {
        Err(RenderError::InvalidColorChannel { channel, value }) => {
            assert_eq!(channel, 'r');
            assert_eq!(value, 256);
        }
        other => panic!("expected InvalidColorChannel, got {:?}", other),
    }
    assert!(Color::try_rgb(0, 0, -5).is_err());
}

#[test]
fn test_from_hex() {
    assert_eq!(Color::from_hex("FF6B6B").unwrap(), Color::rgb(255, 107, 107));
    assert_eq!(Color::from_hex("#4ecdc4").unwrap(), Color::rgb(78, 205, 196));
    assert!(Color::from_hex("FFF").is_err());
    assert!(Color::from_hex("GG0000").is_err());
}

#[test]
fn test_parse_forms() {
    assert_eq!("red".parse::<Color>().unwrap(), Color::Named(NamedColor::Red));
    assert_eq!("CYAN".parse::<Color>().unwrap(), Color::Named(NamedColor::Cyan));
    assert_eq!("FFE66D".parse::<Color>().unwrap(), Color::rgb(255, 230, 109));
    assert_eq!("10,20,30".parse::<Color>().unwrap(), Color::rgb(10, 20, 30));
    assert_eq!("rgb(1, 2, 3)".parse::<Color>().unwrap(), Color::rgb(1, 2, 3));
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        "chartreuse".parse::<Color>(),
        Err(RenderError::InvalidColor(_))
    ));
    assert!(matches!(
        "rgb(300,0,0)".parse::<Color>(),
        Err(RenderError::InvalidColorChannel { channel: 'r', value: 300 })
    ));
}

#[test]
fn test_parse_sequence() {
    let seq = color::parse_sequence("red, green FF6B6B").unwrap();
    assert_eq!(
        seq,
        vec![
            Color::Named(NamedColor::Red),
            Color::Named(NamedColor::Green),
            Color::rgb(255, 107, 107),
        ]
    );
    assert!(color::parse_sequence("").unwrap().is_empty());
    assert!(color::parse_sequence("red,nope").is_err());
}

#[test]
fn test_tokens_per_style() {
    let red = Color::Named(NamedColor::Red);
    assert_eq!(ColorStyle::None.open(red), None);
    assert_eq!(ColorStyle::Ansi.open(red).unwrap(), "\x1b[31m");
    assert_eq!(
        ColorStyle::Ansi.open(Color::rgb(1, 2, 3)).unwrap(),
        "\x1b[38;2;1;2;3m"
    );
    assert_eq!(
        ColorStyle::HtmlSpan.open(red).unwrap(),
        r#"<span style="color:rgb(255,65,54)">"#
    );
    assert_eq!(
        ColorStyle::SvgTspan.open(Color::rgb(255, 100, 50)).unwrap(),
        r#"<tspan fill="rgb(255,100,50)">"#
    );
    assert_eq!(ColorStyle::Ansi.close(), "\x1b[0m");
    assert_eq!(ColorStyle::HtmlSpan.close(), "</span>");
    assert_eq!(ColorStyle::SvgTspan.close(), "</tspan>");
}

#[test]
fn test_display() {
    assert_eq!(Color::Named(NamedColor::Magenta).to_string(), "magenta");
    assert_eq!(Color::rgb(9, 8, 7).to_string(), "rgb(9,8,7)");
}
