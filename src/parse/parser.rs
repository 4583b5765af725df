use crate::{
    ast::{BuildFile, Rule},
    command_graph::AGGREGATE_TARGET,
};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, line_ending, none_of, one_of, space0},
    combinator::{all_consuming, map, not, opt, peek, recognize, value},
    error::Error,
    multi::{many0, many0_count, many1, many1_count},
    sequence::{delimited, preceded, terminated},
};
use std::borrow::Cow;

const OPERATOR_CHARACTERS: &str = "|:";
const LITERAL_TERMINATORS: &str = " \t\r\n|:#\\";
const ESCAPE_CHARACTER: char = '\\';

pub fn build_file(input: &str) -> IResult<&str, BuildFile<'_>> {
    map(
        all_consuming((
            many0_count(empty_line),
            default_rule,
            many0(rule),
            many0_count(empty_line),
        )),
        |(_, default_target, rules, _)| BuildFile::new(default_target, rules),
    )
    .parse(input)
}

fn default_rule(input: &str) -> IResult<&str, Cow<'_, str>> {
    delimited(
        (token(tag(AGGREGATE_TARGET)), sign(":")),
        string_literal,
        line_break,
    )
    .parse(input)
}

fn rule(input: &str) -> IResult<&str, Rule<'_>> {
    map(
        (
            many0_count(empty_line),
            many1(string_literal),
            sign(":"),
            many0(string_literal),
            opt(preceded(sign("|"), many0(string_literal))),
            line_break,
            opt(command),
        ),
        |(_, targets, _, depends, order_only_depends, _, command)| {
            Rule::new(
                targets,
                depends,
                order_only_depends.unwrap_or_default(),
                command,
            )
        },
    )
    .parse(input)
}

fn command(input: &str) -> IResult<&str, Vec<Cow<'_, str>>> {
    delimited(char('\t'), many1(string_literal), line_break).parse(input)
}

fn string_literal(input: &str) -> IResult<&str, Cow<'_, str>> {
    token(map(
        recognize(many1_count(alt((
            value((), (char(ESCAPE_CHARACTER), none_of("\r\n"))),
            value((), none_of(LITERAL_TERMINATORS)),
        )))),
        unescape,
    ))
    .parse(input)
}

fn unescape(string: &str) -> Cow<'_, str> {
    if !string.contains(ESCAPE_CHARACTER) {
        return string.into();
    }

    let mut unescaped = String::with_capacity(string.len());
    let mut characters = string.chars();

    while let Some(character) = characters.next() {
        unescaped.extend(if character == ESCAPE_CHARACTER {
            characters.next()
        } else {
            Some(character)
        });
    }

    unescaped.into()
}

fn sign<'a>(sign: &'static str) -> impl Parser<&'a str, Output = (), Error = Error<&'a str>> {
    value(
        (),
        token(terminated(
            tag(sign),
            peek(not(one_of(OPERATOR_CHARACTERS))),
        )),
    )
}

fn token<'a, O>(
    parser: impl Parser<&'a str, Output = O, Error = Error<&'a str>>,
) -> impl Parser<&'a str, Output = O, Error = Error<&'a str>> {
    preceded(space0, parser)
}

fn comment(input: &str) -> IResult<&str, ()> {
    value((), (char('#'), many0_count(none_of("\n")))).parse(input)
}

fn empty_line(input: &str) -> IResult<&str, ()> {
    value((), (space0, opt(comment), line_ending)).parse(input)
}

fn line_break(input: &str) -> IResult<&str, ()> {
    value((), (space0, line_ending)).parse(input)
}
