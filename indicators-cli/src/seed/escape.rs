//! SQL literal escaping

use crate::sheet::CellValue;

/// Render a cell as a SQL literal
///
/// Null becomes the bare `NULL` token. Everything else is rendered as text,
/// single quotes are doubled and the result is wrapped in single quotes.
pub fn sql_literal(value: &CellValue) -> String {
    match value.to_text() {
        None => "NULL".to_string(),
        Some(text) => quote(&text),
    }
}

/// Quote arbitrary text as a SQL string literal
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unquote(literal: &str) -> String {
        literal[1..literal.len() - 1].replace("''", "'")
    }

    #[test]
    fn test_null_is_bare_token() {
        assert_eq!(sql_literal(&CellValue::Null), "NULL");
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(sql_literal(&CellValue::String("It's fast".into())), "'It''s fast'");
        assert_eq!(sql_literal(&CellValue::String("NULL".into())), "'NULL'");
    }

    #[test]
    fn test_numbers_are_quoted_text() {
        assert_eq!(sql_literal(&CellValue::Float(2.0)), "'2'");
        assert_eq!(sql_literal(&CellValue::Float(0.85)), "'0.85'");
        assert_eq!(sql_literal(&CellValue::Int(10)), "'10'");
        assert_eq!(sql_literal(&CellValue::Bool(true)), "'true'");
    }

    #[test]
    fn test_escaping_round_trips() {
        let inputs = [
            "",
            "'",
            "''",
            "O'Brien",
            "'; DROP TABLE indicators; --",
            "a'b''c'''d",
            "Lead Time (dias) 'p85'",
        ];
        for input in inputs {
            let literal = quote(input);
            assert!(literal.starts_with('\'') && literal.ends_with('\''));
            assert_eq!(unquote(&literal), input, "round trip failed for {:?}", input);
        }
    }

    #[test]
    fn test_escaped_body_has_no_lone_quotes() {
        let literal = quote("x'; DELETE FROM t; --");
        let body = &literal[1..literal.len() - 1];
        assert_eq!(body.matches('\'').count() % 2, 0);
        assert!(!body.replace("''", "").contains('\''));
    }
}
