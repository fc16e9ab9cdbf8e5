use std::{fmt, io, path::Path};

use ig_export::Username;
use tokio::fs;

use crate::Error;

/// One uploaded export file: its original name (which decides how it is
/// parsed) and its raw content. Construct directly when the caller already
/// holds the content, or with [`ExportFile::read`] to load it from disk.
#[derive(Debug, Clone)]
pub struct ExportFile {
    name: String,
    content: String,
}

impl ExportFile {
    pub fn new<N, C>(name: N, content: C) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Reads one export file from disk. This is the only suspension point
    /// of an ingestion; parsing works on the content in memory.
    pub async fn read<P>(path: P) -> io::Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content = fs::read_to_string(path).await?;

        Ok(Self { name, content })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Which relationship direction a file describes. Exports name their files
/// after the role (`followers_1.json`, `following.html`), which is the
/// only signal available for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Followers,
    Following,
}

impl Role {
    /// Classifies a file by name substring. A name matching neither role
    /// is `None` and ignored by ingestion. Checks run followers-first, so
    /// a pathological name containing both substrings counts as followers.
    fn of(name: &str) -> Option<Self> {
        if name.contains("followers") {
            Some(Role::Followers)
        } else if name.contains("following") {
            Some(Role::Following)
        } else {
            None
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Followers => write!(f, "followers"),
            Role::Following => write!(f, "following"),
        }
    }
}

/// Classifies and parses every file, returning the two canonical lists.
///
/// Files are processed in slice order; when several files match the same
/// role, the last one wins. `.json` files go through the role's JSON
/// parser, everything else is treated as markup (exports have shipped
/// `.html` with varying degrees of validity, and the markup scanner is
/// lenient anyway).
///
/// A role whose list ends up empty (missing file, or a parse that
/// degraded to nothing) fails the whole ingestion, since diffing against
/// an empty list would report everyone.
pub(crate) fn parse_exports(files: &[ExportFile]) -> Result<(Vec<Username>, Vec<Username>), Error> {
    let mut followers = Vec::new();
    let mut following = Vec::new();

    for file in files {
        let role = match Role::of(&file.name) {
            Some(role) => role,
            None => {
                log::trace!("ignoring {}: matches neither role", file.name);
                continue;
            }
        };

        let list = if file.name.ends_with(".json") {
            match role {
                Role::Followers => ig_export::followers_json(&file.content),
                Role::Following => ig_export::following_json(&file.content),
            }
        } else {
            ig_export::markup_usernames(&file.content)
        };

        log::trace!("{}: parsed {} {} entries", file.name, list.len(), role);
        if list.is_empty() {
            log::warn!("{}: no entries extracted", file.name);
        }

        match role {
            Role::Followers => followers = list,
            Role::Following => following = list,
        }
    }

    if followers.is_empty() {
        return Err(Error::MissingExport(Role::Followers));
    }
    if following.is_empty() {
        return Err(Error::MissingExport(Role::Following));
    }

    Ok((followers, following))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<Username> {
        items.iter().copied().map(Username::from).collect()
    }

    #[test]
    fn test_role_classification() {
        assert_eq!(Role::of("followers_1.json"), Some(Role::Followers));
        assert_eq!(Role::of("following.html"), Some(Role::Following));
        assert_eq!(Role::of("close_friends.json"), None);
        assert_eq!(Role::of("followers_and_following.json"), Some(Role::Followers));
    }

    #[test]
    fn test_last_matching_file_wins() {
        let have = parse_exports(&[
            ExportFile::new(
                "followers_1.json",
                r#"[{"string_list_data": [{"value": "stale"}]}]"#,
            ),
            ExportFile::new(
                "followers_2.json",
                r#"[{"string_list_data": [{"value": "alice"}]}]"#,
            ),
            ExportFile::new(
                "following.json",
                r#"{"relationships_following": [{"string_list_data": [{"value": "bob"}]}]}"#,
            ),
        ])
        .unwrap();

        assert_eq!(have.0, list(&["alice"]));
        assert_eq!(have.1, list(&["bob"]));
    }

    #[test]
    fn test_unrelated_files_are_ignored() {
        let have = parse_exports(&[
            ExportFile::new("ads_interests.json", r#"{"topics": []}"#),
            ExportFile::new(
                "followers_1.json",
                r#"[{"string_list_data": [{"value": "alice"}]}]"#,
            ),
            ExportFile::new(
                "following.json",
                r#"{"relationships_following": [{"string_list_data": [{"value": "bob"}]}]}"#,
            ),
        ])
        .unwrap();

        assert_eq!(have.0, list(&["alice"]));
    }

    #[test]
    fn test_non_json_extension_is_parsed_as_markup() {
        let have = parse_exports(&[
            ExportFile::new("followers_1.html", "<a href=\"#\">alice</a>"),
            ExportFile::new("following.htm", "<a href=\"#\">bob</a>"),
        ])
        .unwrap();

        assert_eq!(have.0, list(&["alice"]));
        assert_eq!(have.1, list(&["bob"]));
    }

    #[test]
    fn test_missing_role_fails() {
        let err = parse_exports(&[ExportFile::new(
            "followers_1.json",
            r#"[{"string_list_data": [{"value": "alice"}]}]"#,
        )])
        .unwrap_err();

        assert!(matches!(err, Error::MissingExport(Role::Following)));
        assert_eq!(
            err.to_string(),
            "missing or unparsable following file"
        );
    }

    #[tokio::test]
    async fn test_read_from_disk() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("followers_1.json");
        fs::write(&path, r#"[{"string_list_data": [{"value": "alice"}]}]"#).await?;

        let file = ExportFile::read(&path).await?;

        assert_eq!(file.name(), "followers_1.json");
        assert_eq!(ig_export::followers_json(&file.content), list(&["alice"]));

        Ok(())
    }

    #[test]
    fn test_malformed_role_file_fails() {
        let err = parse_exports(&[
            ExportFile::new("followers_1.json", "{definitely not json"),
            ExportFile::new(
                "following.json",
                r#"{"relationships_following": [{"string_list_data": [{"value": "bob"}]}]}"#,
            ),
        ])
        .unwrap_err();

        assert!(matches!(err, Error::MissingExport(Role::Followers)));
    }
}
