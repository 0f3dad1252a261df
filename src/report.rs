//! Report file writing.

use std::io;
use std::path::{Path, PathBuf};

use crate::probe::ProbeResult;

/// Writes `<out_dir>/<username>/result.txt` listing the matched profile
/// URLs, one per line, and returns the path of the written file.
///
/// Only results with a positive verdict belong in the report; the caller
/// passes the matches it collected from the stream.
pub async fn write_report(
    out_dir: &Path,
    username: &str,
    matches: &[ProbeResult],
) -> io::Result<PathBuf> {
    let dir = out_dir.join(username);
    tokio::fs::create_dir_all(&dir).await?;

    let mut contents = format!("Report for {username}:\n\n");
    for result in matches {
        contents.push_str(&result.url);
        contents.push('\n');
    }

    let path = dir.join("result.txt");
    tokio::fs::write(&path, contents).await?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Category, SiteDefinition};
    use std::sync::Arc;
    use std::time::Duration;

    fn match_result(url: &str) -> ProbeResult {
        let site = Arc::new(SiteDefinition::new(
            "example.com".into(),
            "https://example.com/{}".into(),
            None,
            Category::Other,
            false,
            None,
            None,
            false,
        ));
        ProbeResult::classified(
            site,
            200,
            true,
            Duration::from_millis(10),
            "example.com".into(),
            url.into(),
        )
    }

    #[tokio::test]
    async fn test_report_lists_matched_urls() {
        let dir = tempfile::tempdir().unwrap();
        let matches = vec![
            match_result("https://example.com/bob"),
            match_result("https://other.example/bob"),
        ];

        let path = write_report(dir.path(), "bob", &matches).await.unwrap();
        assert!(path.ends_with("bob/result.txt"));

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.starts_with("Report for bob:"));
        assert!(contents.contains("https://example.com/bob\n"));
        assert!(contents.contains("https://other.example/bob\n"));
    }

    #[tokio::test]
    async fn test_report_with_no_matches_is_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), "nobody", &[]).await.unwrap();
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents, "Report for nobody:\n\n");
    }
}
