//! # Sharding Convention
//!
//! Extracts shards out of the leading portion of a name's free form details.
//! Shards are consumed while present; whatever follows the last shard is the
//! unprocessed remainder.
//!
//! ```text
//! free-form-details          = *free-form-detail-char
//!
//! shards                     = [first-shard *additional-shard] [unprocessed]
//! first-shard                = shard-content
//! additional-shard           = "-" shard-content
//! shard-content              = "x" shard
//! shard                      = shard-id shard-value
//! shard-id                   = non-zero-digit *DIGIT
//! shard-value                = shard-value-first-char *shard-value-remaining-char
//! unprocessed                = *free-form-detail-char
//!
//! non-zero-digit             = %x31-39
//! shard-value-first-char     = ALPHA / "." / "_" / "^" / "~"
//! shard-value-remaining-char = shard-value-first-char / DIGIT
//! free-form-detail-char      = shard-value-remaining-char / "-"
//! ```
//!
//! A repeated shard id keeps the last value and records a warning. Shard shaped
//! text left in the remainder is also reported as a warning. This convention
//! never produces errors.

use std::collections::BTreeMap;

use nom::{
    bytes::complete::take_while,
    character::complete::{char, digit0, satisfy},
    combinator::{map_res, recognize},
    error::{context, VerboseError},
    sequence::{pair, preceded},
    IResult,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{NamingConvention, NamingResult};
use crate::{CloudNameError, CloudNameResult};

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Shards keyed by shard id.
pub type Shards = BTreeMap<u32, Shard>;

/// A numbered shard value taken from the free form details of a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shard {
    shard_id: u32,
    shard_value: String,
}

impl Shard {
    pub fn new<S: Into<String>>(shard_id: u32, shard_value: S) -> CloudNameResult<Self> {
        if shard_id < 1 {
            return Err(CloudNameError::InvalidShard(
                "shardId must be greater than 0".to_string(),
            ));
        }
        let shard_value = shard_value.into();
        if shard_value.is_empty() {
            return Err(CloudNameError::InvalidShard(
                "shardValue must be non empty".to_string(),
            ));
        }
        Ok(Self {
            shard_id,
            shard_value,
        })
    }

    pub fn shard_id(&self) -> u32 {
        self.shard_id
    }

    pub fn shard_value(&self) -> &str {
        &self.shard_value
    }
}

fn is_shard_value_first_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '.' | '_' | '^' | '~')
}

fn is_shard_value_char(c: char) -> bool {
    is_shard_value_first_char(c) || c.is_ascii_digit()
}

fn parse_shard_id(input: &str) -> ParserResult<u32> {
    context(
        "shard id",
        map_res(
            recognize(pair(satisfy(|c| matches!(c, '1'..='9')), digit0)),
            |digits: &str| digits.parse::<u32>(),
        ),
    )(input)
}

fn parse_shard_value(input: &str) -> ParserResult<&str> {
    context(
        "shard value",
        recognize(pair(
            satisfy(is_shard_value_first_char),
            take_while(is_shard_value_char),
        )),
    )(input)
}

/// `x<id><value>`
fn parse_shard_content(input: &str) -> ParserResult<(u32, &str)> {
    context(
        "shard",
        preceded(char('x'), pair(parse_shard_id, parse_shard_value)),
    )(input)
}

fn parse_additional_shard(input: &str) -> ParserResult<(u32, &str)> {
    preceded(char('-'), parse_shard_content)(input)
}

/// Finds the first hyphen-preceded shard token anywhere in `remaining`.
fn find_embedded_shard(remaining: &str) -> Option<(u32, &str)> {
    remaining
        .match_indices('-')
        .find_map(|(idx, _)| parse_shard_content(&remaining[idx + 1..]).ok())
        .map(|(_, shard)| shard)
}

pub fn duplicate_shard_warning(previous: &Shard, current: &Shard) -> String {
    format!(
        "duplicate shardId {}, shard value {} will be ignored in favor of {}",
        current.shard_id(),
        previous.shard_value(),
        current.shard_value()
    )
}

pub fn shard_in_remaining_warning(remaining: &str, shard_id: u32, shard_value: &str) -> String {
    format!(
        "detected additional shard configuration in remaining detail string {}. shard {}, value {}",
        remaining, shard_id, shard_value
    )
}

/// Extracts [`Shards`] from the leading portion of free form details.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShardingNamingConvention;

impl NamingConvention for ShardingNamingConvention {
    type Output = Shards;

    #[tracing::instrument(level = "debug", skip(self))]
    fn extract_naming_convention(&self, free_form_details: &str) -> NamingResult<Shards> {
        let mut shards = Shards::new();
        let mut warnings = Vec::new();
        let mut remaining = free_form_details;

        loop {
            let parsed = if shards.is_empty() {
                parse_shard_content(remaining)
            } else {
                parse_additional_shard(remaining)
            };
            let Ok((rest, (shard_id, shard_value))) = parsed else {
                break;
            };
            // Both parsers guarantee id >= 1 and a non-empty value.
            let Ok(shard) = Shard::new(shard_id, shard_value) else {
                break;
            };
            if let Some(previous) = shards.insert(shard_id, shard.clone()) {
                let warning = duplicate_shard_warning(&previous, &shard);
                debug!("{}", warning);
                warnings.push(warning);
            }
            remaining = rest;
        }

        if !shards.is_empty() {
            remaining = remaining.strip_prefix('-').unwrap_or(remaining);
        }

        if !remaining.is_empty() {
            if let Some((shard_id, shard_value)) = find_embedded_shard(remaining) {
                let warning = shard_in_remaining_warning(remaining, shard_id, shard_value);
                debug!("{}", warning);
                warnings.push(warning);
            }
        }

        let result = (!shards.is_empty()).then_some(shards);
        NamingResult::new(result, remaining).with_warnings(warnings)
    }
}
