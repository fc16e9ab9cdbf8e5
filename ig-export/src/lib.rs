//! Parsers for Instagram data-export relationship files.
//!
//! Exports come in two shapes depending on the format the user requested
//! when downloading their data: a JSON variant (one file per relationship
//! direction) and an HTML variant (a flat document where every account is
//! an anchor). Both are reduced to ordered lists of [`Username`]s.
//!
//! Every function here is total: export formats drift between versions, so
//! malformed or unexpectedly-shaped input degrades to an empty or partial
//! list rather than an error. Callers decide whether an empty list is a
//! problem.

mod json;
mod markup;
mod types;

pub use types::Username;

/// Parses the JSON followers export (`followers_1.json` and friends): a
/// top-level array of entries, each carrying the account handle as the
/// first `string_list_data` value.
pub fn followers_json(input: &str) -> Vec<Username> {
    json::followers(input)
}

/// Parses the JSON following export (`following.json`): the same entry
/// shape as the followers file, but wrapped in an object under the
/// `relationships_following` key.
pub fn following_json(input: &str) -> Vec<Username> {
    json::following(input)
}

/// Parses an HTML export and returns the trimmed text content of every
/// anchor as one username.
///
/// The HTML variant does not structurally distinguish followers from
/// following, so this is used for both roles; which role the result plays
/// is decided by the caller from the file name.
pub fn markup_usernames(input: &str) -> Vec<Username> {
    markup::usernames(input)
}
