//! Property tests for token classification and vertex acceptance.

use proptest::prelude::*;

use datamap_core::models::{Token, TokenKind, Vertex, VertexId, VertexKind};

proptest! {
    #[test]
    fn bracketed_names_are_variables(name in "[a-z][a-z0-9-]{0,12}") {
        let token = Token::new(format!("<{name}>"));
        prop_assert_eq!(token.kind(), TokenKind::Variable);
    }

    #[test]
    fn integers_round_trip(n in any::<i64>()) {
        let token = Token::new(n.to_string());
        prop_assert_eq!(token.kind(), TokenKind::Integer(n));
        prop_assert_eq!(token.as_f64(), Some(n as f64));
    }

    #[test]
    fn finite_floats_are_numeric(f in -1.0e9f64..1.0e9) {
        let token = Token::new(format!("{f:.3}"));
        prop_assert!(token.is_numeric());
    }

    #[test]
    fn classification_is_total(raw in ".{0,16}") {
        let token = Token::new(raw.clone());
        let kind = token.kind();
        prop_assert_eq!(kind == TokenKind::Variable, token.is_variable());
        if let TokenKind::Float(f) = kind {
            prop_assert!(f.is_finite());
        }
    }

    #[test]
    fn variables_are_accepted_everywhere(name in "[a-z]{1,6}") {
        let value = Token::new(format!("<{name}>"));
        let kinds = [
            VertexKind::Identifier,
            VertexKind::enumeration(["a"]),
            VertexKind::IntegerRange { low: 0, high: 1 },
            VertexKind::FloatRange { low: 0.0, high: 1.0 },
            VertexKind::String,
        ];
        for kind in kinds {
            prop_assert!(Vertex::new(VertexId(0), kind).accepts(&value));
        }
    }

    #[test]
    fn integer_range_bounds_are_inclusive(
        low in -100i64..100,
        span in 0i64..100,
        candidate in -300i64..300,
    ) {
        let high = low + span;
        let vertex = Vertex::new(VertexId(1), VertexKind::IntegerRange { low, high });
        let inside = candidate >= low && candidate <= high;
        prop_assert_eq!(vertex.accepts(&Token::new(candidate.to_string())), inside);
    }
}
