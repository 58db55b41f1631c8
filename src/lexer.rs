use logos::Logos;

/// Tokens of a message body. Only `Insertion` carries meaning for the
/// generated constructor, everything else is passed through as text.
#[derive(Debug, Logos, Copy, Clone, PartialEq)]
pub(crate) enum Tokens {
    #[regex(r"%[1-9][0-9]?(![A-Za-z0-9_]*!)?")]
    Insertion,
    #[token("%%")]
    EscapedPercent,
    #[token("%")]
    Percent,
    #[regex(r"[^%]+")]
    Text,
}

/// Splits the slice of an `Insertion` token into its index and specifier.
/// A missing or empty specifier is returned as `None`.
pub(crate) fn split_insertion(slice: &str) -> (usize, Option<&str>) {
    let body = &slice[1..];
    let (digits, specifier) = match body.find('!') {
        Some(bang) => (&body[..bang], Some(body[bang + 1..].trim_end_matches('!'))),
        None => (body, None),
    };

    // The token regex guarantees one or two decimal digits.
    let index = digits
        .bytes()
        .fold(0usize, |acc, digit| acc * 10 + usize::from(digit - b'0'));

    (index, specifier.filter(|specifier| !specifier.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<(Tokens, &str)> {
        Tokens::lexer(source)
            .spanned()
            .map(|(token, span)| (token.unwrap(), &source[span]))
            .collect()
    }

    #[test]
    fn classifies_insertions_and_text() {
        assert_eq!(
            lex("Error %1!d! at %12"),
            vec![
                (Tokens::Text, "Error "),
                (Tokens::Insertion, "%1!d!"),
                (Tokens::Text, " at "),
                (Tokens::Insertion, "%12"),
            ]
        );
    }

    #[test]
    fn escaped_percent_is_not_an_insertion() {
        assert_eq!(
            lex("100%%1"),
            vec![
                (Tokens::Text, "100"),
                (Tokens::EscapedPercent, "%%"),
                (Tokens::Text, "1"),
            ]
        );
    }

    #[test]
    fn zero_index_and_escapes_are_plain_percents() {
        assert_eq!(
            lex("%0%n"),
            vec![
                (Tokens::Percent, "%"),
                (Tokens::Text, "0"),
                (Tokens::Percent, "%"),
                (Tokens::Text, "n"),
            ]
        );
    }

    #[test]
    fn splits_index_and_specifier() {
        assert_eq!(split_insertion("%3"), (3, None));
        assert_eq!(split_insertion("%3!lu!"), (3, Some("lu")));
        assert_eq!(split_insertion("%42!!"), (42, None));
        assert_eq!(split_insertion("%99!q!"), (99, Some("q")));
    }
}
