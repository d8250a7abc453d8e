#![cfg(feature = "try_trait")]
#![feature(try_trait_v2)]

use shoal::{Optional, Outcome};

#[test]
fn test_optional_question_mark() {
    fn first_even_half(values: &[i32]) -> Optional<i32> {
        let first = Optional::from(values.first().copied())?;
        let even = Optional::present(first).filter(|v| v % 2 == 0)?;
        Optional::present(even / 2)
    }

    assert_eq!(first_even_half(&[8, 1]), Optional::present(4));
    assert_eq!(first_even_half(&[7]), Optional::empty());
    assert_eq!(first_even_half(&[]), Optional::empty());
}

#[test]
fn test_std_option_inside_optional() {
    fn second_char(s: &str) -> Optional<char> {
        let c = s.chars().nth(1)?;
        Optional::present(c)
    }

    assert_eq!(second_char("ab"), Optional::present('b'));
    assert_eq!(second_char("a"), Optional::empty());
}

#[test]
fn test_outcome_question_mark() {
    fn checked_ratio(a: i32, b: i32) -> Outcome<i32, String> {
        let divisor = if b == 0 {
            Outcome::failure("division by zero".to_string())
        } else {
            Outcome::success(b)
        }?;
        Outcome::success(a / divisor)
    }

    assert_eq!(checked_ratio(9, 3), Outcome::success(3));
    assert_eq!(
        checked_ratio(9, 0),
        Outcome::failure("division by zero".to_string())
    );
}

#[test]
fn test_mixing_result_and_outcome() {
    #[derive(Debug, PartialEq)]
    enum AppError {
        Parse(String),
        Range(i32),
    }

    impl From<std::num::ParseIntError> for AppError {
        fn from(e: std::num::ParseIntError) -> Self {
            AppError::Parse(e.to_string())
        }
    }

    fn in_range(n: i32) -> Outcome<i32, AppError> {
        if (0..=100).contains(&n) {
            Outcome::success(n)
        } else {
            Outcome::failure(AppError::Range(n))
        }
    }

    fn percent(s: &str) -> Outcome<String, AppError> {
        let parsed: i32 = s.trim().parse()?;
        let checked = in_range(parsed)?;
        Outcome::success(format!("{}%", checked))
    }

    assert_eq!(percent(" 42 "), Outcome::success("42%".to_string()));
    assert_eq!(percent("140"), Outcome::failure(AppError::Range(140)));
    assert!(matches!(percent("abc"), Outcome::Failure(AppError::Parse(_))));
}
