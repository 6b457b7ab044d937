//! Opening stories outside the terminal

use hn_client::Story;
use std::io;

const ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

/// Where a story leads: its link, or the discussion page for text posts
pub fn story_link(story: &Story) -> String {
    if story.url.is_empty() {
        format!("{}{}", ITEM_URL, story.object_id)
    } else {
        story.url.clone()
    }
}

/// Program and arguments handing `url` to the platform's URL handler
fn opener(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        // `start` treats its first quoted argument as a window title
        let args = ["/C", "start", "", url];
        ("cmd", args.iter().map(|a| a.to_string()).collect())
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Launch the system browser on `story` and wait for the opener to exit
pub async fn open_story(story: &Story) -> io::Result<()> {
    let link = story_link(story);
    let (program, args) = opener(&link);
    log::info!("Opening story {} with {}: {}", story.object_id, program, link);

    let status = tokio::process::Command::new(program)
        .args(&args)
        .status()
        .await?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("{} exited with {}", program, status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_story_link_prefers_url() {
        let story = Story::new("1", "Rust").with_url("https://rust-lang.org");
        assert_eq!(story_link(&story), "https://rust-lang.org");
    }

    #[test]
    fn test_text_post_links_to_discussion() {
        let story = Story::new("8863", "Ask HN: Anything?");
        assert_eq!(
            story_link(&story),
            "https://news.ycombinator.com/item?id=8863"
        );
    }

    #[test]
    fn test_opener_passes_url_last() {
        let (program, args) = opener("https://example.com/?q=a&b");
        assert!(!program.is_empty());
        assert_eq!(args.last().map(String::as_str), Some("https://example.com/?q=a&b"));
    }
}
