//! Read-only post statistics.
//!
//! Plain functions over borrowed posts. They work on any sequence of
//! posts, not only a full store snapshot, and never mutate anything.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Post;

pub const UNTITLED: &str = "untitled";
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Per-post summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub author: String,
    pub likes: usize,
    pub comments: usize,
}

impl fmt::Display for PostSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Post '{}' by {} has {} likes and {} comments.",
            self.title, self.author, self.likes, self.comments
        )
    }
}

/// Totals over a set of posts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTotals {
    pub posts: usize,
    pub likes: usize,
    pub comments: usize,
}

impl fmt::Display for PostTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total posts: {}, total likes: {}, total comments: {}",
            self.posts, self.likes, self.comments
        )
    }
}

/// Totals restricted to one author. The author is named even when none of
/// the posts matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorTotals {
    pub author: String,
    #[serde(flatten)]
    pub totals: PostTotals,
}

impl fmt::Display for AuthorTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Posts by {}: {}, likes: {}, comments: {}",
            self.author, self.totals.posts, self.totals.likes, self.totals.comments
        )
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Summarize a single post. An empty title or author is reported as
/// `untitled` / `unknown`.
pub fn analyze_one(post: &Post) -> PostSummary {
    PostSummary {
        title: or_default(&post.title, UNTITLED).to_string(),
        author: or_default(&post.author, UNKNOWN_AUTHOR).to_string(),
        likes: post.like_count(),
        comments: post.comment_count(),
    }
}

/// Count posts, likes and comments.
pub fn summarize<'a, I>(posts: I) -> PostTotals
where
    I: IntoIterator<Item = &'a Post>,
{
    posts
        .into_iter()
        .fold(PostTotals::default(), |mut totals, post| {
            totals.posts += 1;
            totals.likes += post.like_count();
            totals.comments += post.comment_count();
            totals
        })
}

/// Like [`summarize`], restricted to posts whose author equals `author`
/// exactly.
pub fn summarize_by_author<'a, I>(posts: I, author: &str) -> AuthorTotals
where
    I: IntoIterator<Item = &'a Post>,
{
    AuthorTotals {
        author: author.to_string(),
        totals: summarize(posts.into_iter().filter(|p| p.author == author)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comment, Like};

    fn post(id: u64, author: &str, title: &str, likes: &[&str], comments: usize) -> Post {
        let mut post = Post::new(id, author.into(), title.into(), "content".into());
        post.likes = likes.iter().map(|u| Like::new(*u)).collect();
        post.comments = (0..comments).map(|i| Comment::new("c", format!("#{i}"))).collect();
        post
    }

    #[test]
    fn test_analyze_one_counts() {
        let summary = analyze_one(&post(1, "serhii", "Hello", &["maria", "bob"], 3));

        assert_eq!(summary.title, "Hello");
        assert_eq!(summary.author, "serhii");
        assert_eq!(summary.likes, 2);
        assert_eq!(summary.comments, 3);
        assert_eq!(
            summary.to_string(),
            "Post 'Hello' by serhii has 2 likes and 3 comments."
        );
    }

    #[test]
    fn test_analyze_one_defaults_for_unset_fields() {
        let summary = analyze_one(&post(1, "", "", &[], 0));

        assert_eq!(summary.title, UNTITLED);
        assert_eq!(summary.author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_summarize_empty() {
        let totals = summarize(&Vec::<Post>::new());
        assert_eq!(totals, PostTotals::default());
    }

    #[test]
    fn test_summarize_posts_without_likes_or_comments() {
        let posts = vec![post(1, "user1", "EmptyPost", &[], 0)];
        let totals = summarize(&posts);

        assert_eq!(totals.posts, 1);
        assert_eq!(totals.likes, 0);
        assert_eq!(totals.comments, 0);
    }

    #[test]
    fn test_summarize_sums_everything() {
        let posts = vec![
            post(1, "serhii", "A", &["maria"], 2),
            post(2, "maria", "B", &["serhii", "bob"], 1),
        ];

        assert_eq!(
            summarize(&posts),
            PostTotals {
                posts: 2,
                likes: 3,
                comments: 3
            }
        );
    }

    #[test]
    fn test_summarize_by_author_filters_case_sensitively() {
        let posts = vec![
            post(1, "serhii", "A", &["maria"], 2),
            post(2, "Serhii", "B", &["bob"], 5),
            post(3, "maria", "C", &[], 1),
        ];

        let by_author = summarize_by_author(&posts, "serhii");

        assert_eq!(by_author.author, "serhii");
        assert_eq!(
            by_author.totals,
            PostTotals {
                posts: 1,
                likes: 1,
                comments: 2
            }
        );
    }

    #[test]
    fn test_summarize_by_author_without_matches_names_author() {
        let posts = vec![post(1, "maria", "A", &["x"], 1)];

        let by_author = summarize_by_author(&posts, "nobody");

        assert_eq!(by_author.author, "nobody");
        assert_eq!(by_author.totals, PostTotals::default());
        assert!(by_author.to_string().contains("nobody"));
    }
}
