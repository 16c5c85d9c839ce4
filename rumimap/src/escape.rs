use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::anychar,
    combinator::{map_opt, map_res},
    multi::many0,
    sequence::preceded,
    IResult, Parser,
};

/// Replace `\uXXXX` escapes with the code point they name.
///
/// Lexicon files use escapes for combining marks that are awkward to type
/// or to see (`\u0670` for the dagger alif, for example). Anything that is
/// not a well-formed escape is copied through as-is.
pub fn unescape(input: &str) -> String {
    let (_, chars) = parse_escaped_sequence(input).unwrap_or(("", Vec::new()));
    chars.into_iter().collect()
}

fn parse_escaped_sequence(input: &str) -> IResult<&str, Vec<char>> {
    let mut parser = many0(alt((uni_esc, anychar)));
    parser.parse(input)
}

fn uni_esc(input: &str) -> IResult<&str, char> {
    let mut parser = map_opt(
        map_res(
            preceded(
                tag("\\u"),
                take_while_m_n(4, 4, |c: char| c.is_ascii_hexdigit()),
            ),
            |out: &str| u32::from_str_radix(out, 16),
        ),
        char::from_u32,
    );
    parser.parse(input)
}
