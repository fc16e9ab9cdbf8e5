use nom::{
    branch::alt,
    bytes::complete::{tag, take_till, take_till1, take_until},
    combinator::value,
    multi::fold_many0,
    IResult,
};

use crate::types::Username;

/// Collects the trimmed text content of every anchor in the document, in
/// document order. Empty anchors are dropped.
///
/// This is deliberately not a conforming HTML parser: exports only ever
/// wrap one handle per anchor, and anything the scanner cannot make sense
/// of (unclosed anchors, a truncated download) simply ends the scan with
/// whatever was extracted up to that point.
pub(crate) fn usernames(input: &str) -> Vec<Username> {
    let mut remaining = input;
    let mut found = Vec::new();

    while let Ok((rest, body)) = anchor(remaining) {
        remaining = rest;

        if let Ok((_, text)) = body_text(body) {
            let handle = text.trim();
            if !handle.is_empty() {
                found.push(Username::from(handle));
            }
        }
    }

    found
}

/// Scans forward to the next anchor element and returns its raw body.
///
/// A `<a` prefix alone is not enough: it must be followed by whitespace,
/// `>` or `/`, so that elements like `<abbr>` are skipped rather than
/// mistaken for anchors. Fails once no further anchor opens.
fn anchor(input: &str) -> IResult<&str, &str> {
    let mut cursor = input;

    loop {
        let (rest, _) = take_until("<a")(cursor)?;
        let (rest, _) = tag("<a")(rest)?;

        if rest.starts_with(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/') {
            let (rest, _) = take_until(">")(rest)?;
            let (rest, _) = tag(">")(rest)?;
            let (rest, body) = take_until("</a>")(rest)?;
            let (rest, _) = tag("</a>")(rest)?;
            return Ok((rest, body));
        }

        cursor = rest;
    }
}

/// The text content of an anchor body: nested elements contribute nothing,
/// text fragments are concatenated.
fn body_text(input: &str) -> IResult<&str, String> {
    fold_many0(alt((element, text)), String::new, |mut acc, fragment| {
        acc.push_str(fragment);
        acc
    })(input)
}

fn element(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag("<")(input)?;
    let (input, _) = take_till(|c| c == '>')(input)?;
    value("", tag(">"))(input)
}

fn text(input: &str) -> IResult<&str, &str> {
    take_till1(|c| c == '<')(input)
}
