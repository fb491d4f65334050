//! Tests for colors, hex conversion, palette generation and nearest-color search

#[cfg(test)]
mod tests {
    use pixeltile::PixelateError;
    use pixeltile::color::palette::{Color, generate_palette, nearest_color};
    use pixeltile::io::configuration::MAX_COLOR_COUNT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests perfect cubes produce exactly n colors on an evenly spaced lattice
    // Verified by using floor instead of round for the channel levels
    #[test]
    fn test_perfect_cube_palettes_are_exact_lattices() {
        for (count, levels) in [
            (8, vec![0.0, 255.0]),
            (27, vec![0.0, 128.0, 255.0]),
            (64, vec![0.0, 85.0, 170.0, 255.0]),
        ] {
            let mut rng = StdRng::seed_from_u64(7);
            let Ok(palette) = generate_palette(count, &mut rng) else {
                unreachable!("count is within the cube");
            };
            assert_eq!(palette.len(), count);

            for color in &palette {
                assert!(levels.contains(&color.r), "unexpected red {}", color.r);
                assert!(levels.contains(&color.g), "unexpected green {}", color.g);
                assert!(levels.contains(&color.b), "unexpected blue {}", color.b);
                assert!((color.a - 255.0).abs() < f64::EPSILON);
            }

            assert_eq!(palette.first(), Some(&Color::BLACK));
            assert_eq!(palette.last(), Some(&Color::WHITE));
        }
    }

    // Tests the cube is walked red-outermost and truncated at the requested count
    // Verified by swapping the red and blue loops
    #[test]
    fn test_palette_enumeration_order_and_truncation() {
        let mut rng = StdRng::seed_from_u64(1);
        let Ok(palette) = generate_palette(10, &mut rng) else {
            unreachable!("count is within the cube");
        };

        assert_eq!(palette.len(), 10);
        assert_eq!(palette.get(1), Some(&Color::opaque(0.0, 0.0, 128.0)));
        assert_eq!(palette.get(3), Some(&Color::opaque(0.0, 128.0, 0.0)));
        assert_eq!(palette.get(9), Some(&Color::opaque(128.0, 0.0, 0.0)));
    }

    // Tests palettes that fit inside the cube never consume randomness
    // Verified by padding with random colors before truncating
    #[test]
    fn test_palette_is_independent_of_rng_seed() {
        let first = generate_palette(10, &mut StdRng::seed_from_u64(1)).ok();
        let second = generate_palette(10, &mut StdRng::seed_from_u64(99)).ok();
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    // Tests degenerate palette sizes
    // Verified by returning a single black color for zero
    #[test]
    fn test_small_palettes() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate_palette(0, &mut rng).is_ok_and(|p| p.is_empty()));
        assert_eq!(generate_palette(1, &mut rng).ok(), Some(vec![Color::BLACK]));
        assert_eq!(
            generate_palette(2, &mut rng).ok(),
            Some(vec![Color::BLACK, Color::opaque(0.0, 0.0, 255.0)])
        );
    }

    // Tests palettes larger than the 24-bit cube are rejected before allocating
    // Verified by removing the size check
    #[test]
    fn test_palette_size_limit() {
        let mut rng = StdRng::seed_from_u64(3);
        let cube = generate_palette(4096, &mut rng);
        assert!(cube.is_ok_and(|p| p.len() == 4096 && p.last() == Some(&Color::WHITE)));

        for count in [MAX_COLOR_COUNT + 1, 1_000_000_000_000, usize::MAX] {
            let result = generate_palette(count, &mut rng);
            assert!(matches!(
                result,
                Err(PixelateError::InvalidParameter { parameter: "colors", .. })
            ));
        }
    }

    // Tests nearest color picks the closest entry by RGB distance and ignores alpha
    // Verified by including alpha in the distance
    #[test]
    fn test_nearest_color_ignores_alpha() {
        let palette = [Color::BLACK, Color::WHITE];
        let bright = Color::new(200.0, 210.0, 190.0, 0.0);
        assert_eq!(nearest_color(bright, &palette).ok(), Some(Color::WHITE));

        let dark = Color::new(20.0, 10.0, 40.0, 255.0);
        assert_eq!(nearest_color(dark, &palette).ok(), Some(Color::BLACK));
    }

    // Tests ties resolve to the first palette entry
    // Verified by using <= in the comparison
    #[test]
    fn test_nearest_color_tie_prefers_first_entry() {
        let red = Color::opaque(255.0, 0.0, 0.0);
        let blue = Color::opaque(0.0, 0.0, 255.0);
        let midpoint = Color::opaque(127.5, 0.0, 127.5);

        assert_eq!(nearest_color(midpoint, &[red, blue]).ok(), Some(red));
        assert_eq!(nearest_color(midpoint, &[blue, red]).ok(), Some(blue));
    }

    // Tests quantizing twice gives the same answer as quantizing once
    // Verified by returning the input color instead of the palette entry
    #[test]
    fn test_nearest_color_is_idempotent() {
        let palette = generate_palette(27, &mut StdRng::seed_from_u64(5)).unwrap_or_default();
        assert_eq!(palette.len(), 27);
        for color in [
            Color::opaque(12.0, 200.0, 99.0),
            Color::opaque(255.0, 255.0, 0.0),
            Color::new(-40.0, 300.0, 128.0, 10.0),
        ] {
            let once = nearest_color(color, &palette);
            let twice = once
                .as_ref()
                .ok()
                .and_then(|&c| nearest_color(c, &palette).ok());
            assert_eq!(once.ok(), twice);
        }
    }

    // Tests an empty palette is reported instead of panicking
    // Verified by indexing the first palette entry unconditionally
    #[test]
    fn test_nearest_color_empty_palette() {
        let result = nearest_color(Color::WHITE, &[]);
        assert!(matches!(result, Err(PixelateError::EmptyPalette)));
    }

    // Tests hex parsing accepts long and short forms with or without '#'
    // Verified by not expanding short digits by 17
    #[test]
    fn test_from_hex_forms() {
        assert_eq!(
            Color::from_hex("#ff8000").ok(),
            Some(Color::opaque(255.0, 128.0, 0.0))
        );
        assert_eq!(Color::from_hex("fff").ok(), Some(Color::WHITE));
        assert_eq!(
            Color::from_hex("#1a2").ok(),
            Some(Color::opaque(17.0, 170.0, 34.0))
        );
    }

    // Tests malformed hex strings are rejected
    // Verified by accepting five-digit strings
    #[test]
    fn test_from_hex_rejects_malformed() {
        for text in ["", "#12345", "#gggggg", "#1234567", "red"] {
            assert!(
                matches!(
                    Color::from_hex(text),
                    Err(PixelateError::InvalidParameter { .. })
                ),
                "accepted {text:?}"
            );
        }
    }

    // Tests hex output rounds channels and drops alpha
    // Verified by truncating instead of rounding
    #[test]
    fn test_to_hex_rounds_and_drops_alpha() {
        let color = Color::new(255.4, 0.0, 15.6, 0.0);
        assert_eq!(color.to_hex(), "#ff0010");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    // Tests byte conversion clamps out-of-range and NaN channels
    // Verified by casting without clamping
    #[test]
    fn test_to_bytes_clamps() {
        let color = Color::new(-5.0, 300.0, 127.5, f64::NAN);
        assert_eq!(color.to_bytes(), [0, 255, 128, 0]);
    }
}
