//! Free-form numeric answers: "2.5", "2,5", "-3.1e-2", "2×3" (products of factors).
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::space0,
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::double,
    sequence::delimited,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Empty,
    Malformed(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty answer"),
            ParseError::Malformed(text) => write!(f, "invalid input: {:?}", text),
        }
    }
}

impl std::error::Error for ParseError {}

fn product_sign(input: &str) -> IResult<&str, &str> {
    delimited(space0, alt((tag("×"), tag("*"))), space0).parse(input)
}

fn product(input: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(separated_list1(product_sign, double)).parse(input)
}

/// Comma is read as the decimal separator. Non-finite results are rejected.
pub fn parse_answer(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let normalized = trimmed.replace(',', ".");
    match product(&normalized) {
        Ok((_, factors)) => {
            let value: f64 = factors.iter().product();
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ParseError::Malformed(trimmed.to_string()))
            }
        }
        Err(_) => Err(ParseError::Malformed(trimmed.to_string())),
    }
}
