#[cfg(test)]
mod tests {
    use formatcurrency::{Input, Output, UnformatError, Unformatter, Value, parse, unformat, unformat_all};

    #[test]
    fn test_removes_padding_special_chars() {
        assert_eq!(unformat("$ 123,456", None), 123456.0);
        assert_eq!(unformat("$ 123,456.78", None), 123456.78);
        assert_eq!(unformat("&*()$ 123,456", None), 123456.0);
        assert_eq!(unformat(";$@#$%^&123,456.78", None), 123456.78);
    }

    #[test]
    fn test_negative_numbers() {
        assert_eq!(unformat("$ -123,456", None), -123456.0);
        assert_eq!(unformat("$ -123,456.78", None), -123456.78);
        assert_eq!(unformat("&*()$ -123,456", None), -123456.0);
        assert_eq!(unformat(";$@#$%^&-123,456.78", None), -123456.78);
    }

    #[test]
    fn test_bracketed_negatives() {
        assert_eq!(unformat("$ (1.99)", None), -1.99);
        assert_eq!(unformat("(1,234.50)", None), -1234.5);
        assert_eq!(unformat("USD (12) due", None), -12.0);
        assert_eq!(unformat("($1.99)", None), -1.99);
        assert_eq!(unformat("($ 3,000)", None), -3000.0);
        assert_eq!(unformat("( 1.99 )", None), -1.99);
        assert_eq!(unformat("(1.234,50 €)", Some(',')), -1234.5);
        // Brackets without digits inside are noise
        assert_eq!(unformat("() $ 42", None), 42.0);
    }

    #[test]
    fn test_decimal_separators() {
        assert_eq!(unformat("$ 123,456", Some(',')), 123.456);
        assert_eq!(unformat("$ 123456|78", Some('|')), 123456.78);
        assert_eq!(unformat("&*()$ 123>456", Some('>')), 123.456);
        assert_eq!(unformat(";$@#$%^&123,456'78", Some('\'')), 123456.78);
    }

    #[test]
    fn test_repeated_decimal_separator_reads_first_group() {
        assert_eq!(unformat("1.234.567", None), 1.234);
        assert_eq!(unformat("1.234.567,89", Some(',')), 1234567.89);
        assert_eq!(unformat("1,2,3", Some(',')), 1.2);
    }

    #[test]
    fn test_sequence() {
        let values = unformat_all(["$ 123", "$567.89", "R$12,345,678.901"], None);
        assert_eq!(values, vec![123.0, 567.89, 12345678.901]);

        let mixed = unformat_all(
            vec![Value::from(4.5), Value::from("$ 9"), Value::Null, Value::from("abc")],
            None,
        );
        assert_eq!(mixed, vec![4.5, 9.0, 0.0, 0.0]);

        assert_eq!(unformat_all(Vec::<&str>::new(), None), Vec::<f64>::new());
    }

    #[test]
    fn test_numbers_pass_through() {
        for n in [0.0, 1.0, -2.5, 123456.789, f64::MAX, f64::INFINITY] {
            assert_eq!(unformat(n, None), n);
        }
        assert_eq!(unformat(42, None), 42.0);
        assert_eq!(unformat(f64::NAN, None), 0.0);
    }

    #[test]
    fn test_falsy_values_are_zero() {
        assert_eq!(unformat("", None), 0.0);
        assert_eq!(unformat(Value::Null, None), 0.0);
        assert_eq!(unformat(None::<&str>, None), 0.0);
        assert_eq!(unformat(0, None), 0.0);
        assert_eq!(unformat("no digits", None), 0.0);
    }

    #[test]
    fn test_idempotent() {
        for text in ["$ 1,000.25", "(7)", "junk", "", "-0.5"] {
            let once = unformat(text, None);
            assert_eq!(unformat(once, None), once);
        }
    }

    #[test]
    fn test_parse_alias() {
        assert_eq!(parse("$ 1,234", None), unformat("$ 1,234", None));
    }

    #[test]
    fn test_try_unformat_distinguishes_failures() {
        let unformatter = Unformatter::default();
        assert_eq!(unformatter.try_unformat("0", None), Ok(0.0));
        assert_eq!(unformatter.try_unformat(0.0, None), Ok(0.0));
        assert_eq!(unformatter.try_unformat("", None), Err(UnformatError::Empty));
        assert_eq!(
            unformatter.try_unformat(Value::Null, None),
            Err(UnformatError::Empty)
        );
        assert_eq!(
            unformatter.try_unformat("n/a", None),
            Err(UnformatError::NotANumber("n/a".to_string()))
        );
        assert!(matches!(
            unformatter.try_unformat(f64::NAN, None),
            Err(UnformatError::NotANumber(_))
        ));
    }

    #[test]
    fn test_apply_tagged_input() {
        let unformatter = Unformatter::default();
        assert_eq!(
            unformatter.apply(Input::scalar("$ 5.25"), None),
            Output::Scalar(5.25)
        );
        assert_eq!(
            unformatter.apply(Input::sequence(["1,5", "2,25"]), Some(',')),
            Output::Sequence(vec![1.5, 2.25])
        );
    }
}
