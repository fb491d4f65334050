//! Tests for SVG serialization of placed shapes

#[cfg(test)]
mod tests {
    use pixeltile::color::palette::Color;
    use pixeltile::shape::svg::{SvgDocument, format_number};
    use pixeltile::shape::{Outline, ShapeKind, ShapeSink, ShapeStyle, render_shape};

    fn style(kind: ShapeKind, outline: Option<Outline>) -> ShapeStyle {
        ShapeStyle {
            kind,
            size_multiplier: 1.0,
            fill_expansion: 0.0,
            outline,
        }
    }

    // Tests numbers keep at most three decimals without trailing zeros
    // Verified by printing with the default float formatting
    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(1.234_56), "1.235");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(-0.000_1), "0");
        assert_eq!(format_number(0.0), "0");
    }

    // Tests the root element, viewBox and background rect
    // Verified by omitting the viewBox
    #[test]
    fn test_document_header_and_background() {
        let mut document = SvgDocument::new();
        assert!(document.begin(40, 30, Color::opaque(255.0, 0.0, 0.0)).is_ok());
        assert_eq!(document.element_count(), 1);

        let markup = document.finish();
        assert!(markup.starts_with(
            r#"<svg width="40" height="30" viewBox="0 0 40 30" xmlns="http://www.w3.org/2000/svg">"#
        ));
        assert!(markup.contains(r##"<rect x="0" y="0" width="40" height="30" fill="#ff0000" />"##));
        assert!(markup.trim_end().ends_with("</svg>"));
    }

    // Tests a square becomes a centered rect with translate and rotate
    // Verified by emitting the rotation in radians
    #[test]
    fn test_square_element() {
        let mut document = SvgDocument::new();
        assert!(document.begin(4, 4, Color::BLACK).is_ok());
        let shape = render_shape(2.0, 2.0, Color::WHITE, 4.0, 90.0, &style(ShapeKind::Square, None));
        assert!(document.draw(&shape).is_ok());

        let markup = document.finish();
        assert!(markup.contains(
            r##"<rect x="-2" y="-2" width="4" height="4" fill="#ffffff" transform="translate(2,2) rotate(90)" />"##
        ));
    }

    // Tests circles and polygons carry their geometry
    // Verified by emitting every shape as a rect
    #[test]
    fn test_circle_and_polygon_elements() {
        let mut document = SvgDocument::new();
        assert!(document.begin(10, 10, Color::BLACK).is_ok());
        let circle = render_shape(5.0, 5.0, Color::WHITE, 3.0, 0.0, &style(ShapeKind::Circle, None));
        let hexagon = render_shape(5.0, 5.0, Color::WHITE, 2.0, 30.0, &style(ShapeKind::Hexagon, None));
        assert!(document.draw(&circle).is_ok());
        assert!(document.draw(&hexagon).is_ok());
        assert_eq!(document.element_count(), 3);

        let markup = document.finish();
        assert!(markup.contains(r#"<circle cx="0" cy="0" r="1.5" "#));
        assert!(markup.contains(
            r#"<polygon points="2,0 1,1.732 -1,1.732 -2,0 -1,-1.732 1,-1.732" "#
        ));
        assert!(markup.contains("rotate(30)"));
    }

    // Tests outlines add stroke attributes to the shape element
    // Verified by dropping the stroke width
    #[test]
    fn test_stroke_attributes() {
        let outline = Outline {
            width: 1.5,
            color: Color::opaque(0.0, 0.0, 255.0),
        };
        let mut document = SvgDocument::new();
        assert!(document.begin(10, 10, Color::BLACK).is_ok());
        let shape = render_shape(5.0, 5.0, Color::WHITE, 4.0, 0.0, &style(ShapeKind::Triangle, Some(outline)));
        assert!(document.draw(&shape).is_ok());

        let markup = document.finish();
        assert!(markup.contains(r##"fill="#ffffff" stroke="#0000ff" stroke-width="1.5""##));
        assert_eq!(markup.matches("<polygon").count(), 1);
    }

    // Tests begin resets a reused document
    // Verified by appending to the previous elements
    #[test]
    fn test_begin_resets() {
        let mut document = SvgDocument::new();
        assert!(document.begin(4, 4, Color::BLACK).is_ok());
        let shape = render_shape(2.0, 2.0, Color::WHITE, 4.0, 0.0, &style(ShapeKind::Square, None));
        assert!(document.draw(&shape).is_ok());
        assert!(document.begin(8, 8, Color::WHITE).is_ok());
        assert_eq!(document.element_count(), 1);
    }
}
