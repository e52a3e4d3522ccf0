//! In-memory post store.

use std::cmp::Reverse;
use std::sync::Arc;

use parking_lot::Mutex;

use miniblog_core::domain::{ActivityEntry, Comment, Like, Post, PostId};
use miniblog_core::ports::{ActivityLog, PostStore};

struct StoreState {
    posts: Vec<Post>,
    next_id: PostId,
}

impl StoreState {
    fn find_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }
}

/// Post store backed by a `Vec` behind a single mutex.
///
/// Every operation holds the lock for its whole find-and-mutate step.
/// Activity entries are appended after the store lock is released, so the
/// store lock is never held while the log lock is taken.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    state: Mutex<StoreState>,
    activity: Arc<dyn ActivityLog>,
}

impl InMemoryPostStore {
    pub fn new(activity: Arc<dyn ActivityLog>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                posts: Vec::new(),
                next_id: 1,
            }),
            activity,
        }
    }

    /// Newest first. Posts created within the same clock tick fall back to
    /// id order, which follows creation order.
    fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by_key(|p| Reverse((p.created_at, p.id)));
        posts
    }
}

impl PostStore for InMemoryPostStore {
    fn add_post(&self, author: &str, title: &str, content: &str) -> Post {
        let post = {
            let mut state = self.state.lock();
            let id = state.next_id;
            state.next_id += 1;

            let post = Post::new(id, author.to_string(), title.to_string(), content.to_string());
            state.posts.push(post.clone());
            post
        };

        tracing::debug!(post_id = post.id, author = %author, "Post created");
        self.activity
            .add_log(ActivityEntry::post_created(author, title));

        post
    }

    fn update_post(&self, id: PostId, title: &str, content: &str) -> Option<Post> {
        let mut state = self.state.lock();
        let post = state.find_mut(id)?;
        post.title = title.to_string();
        post.content = content.to_string();

        tracing::debug!(post_id = id, "Post updated");
        Some(post.clone())
    }

    fn delete_post(&self, id: PostId) {
        let mut state = self.state.lock();
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);

        if state.posts.len() < before {
            tracing::debug!(post_id = id, "Post deleted");
        }
    }

    fn get_all_posts(&self) -> Vec<Post> {
        let posts = self.state.lock().posts.clone();
        Self::newest_first(posts)
    }

    fn get_posts_by_user(&self, username: &str) -> Vec<Post> {
        let posts = self
            .state
            .lock()
            .posts
            .iter()
            .filter(|p| p.author == username)
            .cloned()
            .collect();
        Self::newest_first(posts)
    }

    fn get_post_by_id(&self, id: PostId) -> Option<Post> {
        self.state.lock().posts.iter().find(|p| p.id == id).cloned()
    }

    fn add_like(&self, post_id: PostId, username: &str) {
        let liked_title = {
            let mut state = self.state.lock();
            let Some(post) = state.find_mut(post_id) else {
                return;
            };
            if post.is_liked_by(username) {
                return;
            }
            post.likes.push(Like::new(username));
            post.title.clone()
        };

        tracing::debug!(post_id, user = %username, "Post liked");
        self.activity
            .add_log(ActivityEntry::post_liked(username, liked_title));
    }

    fn add_comment(&self, post_id: PostId, author: &str, text: &str) {
        {
            let mut state = self.state.lock();
            let Some(post) = state.find_mut(post_id) else {
                return;
            };
            post.comments.push(Comment::new(author, text));
        }

        tracing::debug!(post_id, author = %author, "Comment added");
        self.activity
            .add_log(ActivityEntry::post_commented(author, text));
    }

    fn post_count(&self) -> usize {
        self.state.lock().posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::InMemoryActivityLog;
    use miniblog_core::domain::ActivityAction;

    const NON_EXISTENT_POST_ID: PostId = 999;

    fn setup() -> (InMemoryPostStore, Arc<InMemoryActivityLog>) {
        let log = Arc::new(InMemoryActivityLog::new());
        let store = InMemoryPostStore::new(log.clone());
        (store, log)
    }

    #[test]
    fn test_add_post_assigns_sequential_ids() {
        let (store, _) = setup();

        let ids: Vec<PostId> = (0..5)
            .map(|i| store.add_post("serhii", &format!("P{i}"), "C").id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_add_post_stores_fields_and_logs() {
        let (store, log) = setup();

        let post = store.add_post("serhii", "My Post", "This is the content");

        let stored = store.get_post_by_id(post.id).unwrap();
        assert_eq!(stored.author, "serhii");
        assert_eq!(stored.title, "My Post");
        assert_eq!(stored.content, "This is the content");
        assert!(stored.likes.is_empty());
        assert!(stored.comments.is_empty());

        let logs = log.get_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].username, "serhii");
        assert_eq!(
            logs[0].action,
            ActivityAction::PostCreated {
                title: "My Post".into()
            }
        );
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let (store, _) = setup();
        let first = store.add_post("a", "P1", "C1");
        store.delete_post(first.id);

        let second = store.add_post("a", "P2", "C2");
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_get_all_posts_newest_first() {
        let (store, _) = setup();
        store.add_post("alice", "P1", "C1");
        store.add_post("bob", "P2", "C2");

        let titles: Vec<String> = store.get_all_posts().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["P2", "P1"]);
    }

    #[test]
    fn test_get_posts_by_user_filters_and_orders() {
        let (store, _) = setup();
        store.add_post("serhii", "S1", "C");
        store.add_post("maria", "M1", "C");
        store.add_post("serhii", "S2", "C");
        store.add_post("Serhii", "X", "C");

        let titles: Vec<String> = store
            .get_posts_by_user("serhii")
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["S2", "S1"]);
        assert!(store.get_posts_by_user("nobody").is_empty());
    }

    #[test]
    fn test_update_post_keeps_everything_else() {
        let (store, log) = setup();
        let post = store.add_post("serhii", "Old", "Old content");
        store.add_like(post.id, "maria");
        store.add_comment(post.id, "maria", "hi");
        let logged_before = log.len();

        let updated = store.update_post(post.id, "New", "New content").unwrap();

        assert_eq!(updated.id, post.id);
        assert_eq!(updated.author, "serhii");
        assert_eq!(updated.title, "New");
        assert_eq!(updated.content, "New content");
        assert_eq!(updated.created_at, post.created_at);
        assert_eq!(updated.like_count(), 1);
        assert_eq!(updated.comment_count(), 1);
        assert_eq!(store.get_post_by_id(post.id).unwrap(), updated);
        assert_eq!(log.len(), logged_before);
    }

    #[test]
    fn test_update_missing_post_returns_none() {
        let (store, log) = setup();

        assert!(store.update_post(NON_EXISTENT_POST_ID, "T", "C").is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_delete_post_removes_it() {
        let (store, log) = setup();
        let post = store.add_post("serhii", "T", "C");
        store.add_like(post.id, "maria");
        store.add_comment(post.id, "maria", "x");
        let logged_before = log.len();

        store.delete_post(post.id);

        assert!(store.get_post_by_id(post.id).is_none());
        assert_eq!(store.post_count(), 0);
        assert_eq!(log.len(), logged_before);
    }

    #[test]
    fn test_delete_missing_post_is_noop() {
        let (store, _) = setup();
        store.add_post("serhii", "T", "C");

        store.delete_post(NON_EXISTENT_POST_ID);

        assert_eq!(store.post_count(), 1);
    }

    #[test]
    fn test_add_like_twice_keeps_one_like_and_one_entry() {
        let (store, log) = setup();
        let post = store.add_post("serhii", "T", "C");
        log.clear_all();

        store.add_like(post.id, "maria");
        store.add_like(post.id, "maria");

        assert_eq!(store.get_post_by_id(post.id).unwrap().like_count(), 1);
        let logs = log.get_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(
            logs[0].action,
            ActivityAction::PostLiked { title: "T".into() }
        );
    }

    #[test]
    fn test_add_like_is_case_sensitive() {
        let (store, log) = setup();
        let post = store.add_post("user1", "Title", "Content");
        log.clear_all();

        store.add_like(post.id, "Bob");
        store.add_like(post.id, "bob");

        assert_eq!(store.get_post_by_id(post.id).unwrap().like_count(), 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_add_like_to_missing_post_is_noop() {
        let (store, log) = setup();
        store.add_post("serhii", "T", "C");
        log.clear_all();

        store.add_like(NON_EXISTENT_POST_ID, "maria");

        assert_eq!(store.post_count(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_add_comment_accepts_empty_text() {
        let (store, log) = setup();
        let post = store.add_post("user1", "Title", "Content");

        store.add_comment(post.id, "user2", "");

        let stored = store.get_post_by_id(post.id).unwrap();
        assert_eq!(stored.comments.len(), 1);
        assert_eq!(stored.comments[0].text, "");
        assert_eq!(stored.comments[0].author, "user2");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_add_comment_keeps_order_and_logs_text() {
        let (store, log) = setup();
        let post = store.add_post("serhii", "T", "C");
        log.clear_all();

        store.add_comment(post.id, "maria", "first");
        store.add_comment(post.id, "maria", "first");
        store.add_comment(post.id, "bob", "second");

        let texts: Vec<String> = store
            .get_post_by_id(post.id)
            .unwrap()
            .comments
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["first", "first", "second"]);
        assert_eq!(log.len(), 3);
        assert!(log.get_logs().iter().all(|e| e.kind() == "post_commented"));
    }

    #[test]
    fn test_add_comment_to_missing_post_is_noop() {
        let (store, log) = setup();
        log.clear_all();

        store.add_comment(NON_EXISTENT_POST_ID, "maria", "lost");

        assert_eq!(store.post_count(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_accepts_long_content_and_duplicate_titles() {
        let (store, _) = setup();
        let long_content = "x".repeat(10_000);

        let a = store.add_post("author", "Title", &long_content);
        let b = store.add_post("author", "Title", "short");

        assert_eq!(a.content.len(), 10_000);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_returned_collections_are_snapshots() {
        let (store, _) = setup();
        let post = store.add_post("serhii", "T", "C");
        let snapshot = store.get_all_posts();

        store.add_like(post.id, "maria");
        store.delete_post(post.id);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].like_count(), 0);
    }

    #[test]
    fn test_concurrent_add_post_ids_unique() {
        let (store, log) = setup();

        std::thread::scope(|s| {
            for t in 0..8 {
                let store = &store;
                s.spawn(move || {
                    for i in 0..50 {
                        store.add_post(&format!("user{t}"), &format!("P{i}"), "C");
                    }
                });
            }
        });

        let mut ids: Vec<PostId> = store.get_all_posts().into_iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=400).collect::<Vec<_>>());
        assert_eq!(log.len(), 400);
    }

    #[test]
    fn test_concurrent_likes_from_same_user_count_once() {
        let (store, log) = setup();
        let post = store.add_post("serhii", "T", "C");
        log.clear_all();

        std::thread::scope(|s| {
            for _ in 0..16 {
                let store = &store;
                s.spawn(move || store.add_like(post.id, "maria"));
            }
        });

        assert_eq!(store.get_post_by_id(post.id).unwrap().like_count(), 1);
        assert_eq!(log.len(), 1);
    }
}
