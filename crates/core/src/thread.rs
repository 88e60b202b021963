// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Community support thread.
//!
//! Posts live in an arena keyed by id. Top-level order and per-post reply
//! lists are kept as separate id indexes, so adding a reply touches only
//! the reply list of its parent. Only top-level posts have a reply list,
//! which keeps the tree at depth two.

use std::collections::{HashMap, VecDeque};

use evision_domain::{CommunityPost, DomainError, PostId, User, validate_post_content};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::error::CoreError;

/// Timestamp label given to freshly created posts and replies.
pub const JUST_NOW: &str = "Just now";

/// Milliseconds since the Unix epoch from the system clock.
#[must_use]
pub fn unix_millis() -> u64 {
    u64::try_from(OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000).unwrap_or(0)
}

/// Issues strictly increasing post ids, seeded from a millisecond clock.
#[derive(Debug, Clone)]
struct PostIdGenerator {
    clock: fn() -> u64,
    last: u64,
}

impl PostIdGenerator {
    fn next(&mut self) -> Result<PostId, DomainError> {
        let floor: u64 = self
            .last
            .checked_add(1)
            .ok_or(DomainError::PostIdsExhausted)?;
        let next: u64 = (self.clock)().max(floor);
        self.last = next;
        Ok(PostId::new(next))
    }

    fn observe(&mut self, id: PostId) {
        self.last = self.last.max(id.value());
    }
}

#[derive(Debug, Clone)]
struct PostNode {
    author: User,
    content: String,
    timestamp: String,
}

/// An append-only two-level thread of posts and replies.
#[derive(Debug, Clone)]
pub struct CommunityThread {
    nodes: HashMap<PostId, PostNode>,
    /// Top-level posts, newest first.
    top_level: VecDeque<PostId>,
    /// Reply ids per top-level post, in insertion order.
    replies: HashMap<PostId, Vec<PostId>>,
    ids: PostIdGenerator,
}

impl Default for CommunityThread {
    fn default() -> Self {
        Self::new()
    }
}

impl CommunityThread {
    /// Creates an empty thread using the system clock for ids.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(unix_millis)
    }

    /// Creates an empty thread with a custom id clock.
    ///
    /// Ids are `max(clock(), last_id + 1)`, so a constant clock still
    /// yields strictly increasing ids.
    #[must_use]
    pub fn with_clock(clock: fn() -> u64) -> Self {
        Self {
            nodes: HashMap::new(),
            top_level: VecDeque::new(),
            replies: HashMap::new(),
            ids: PostIdGenerator { clock, last: 0 },
        }
    }

    /// Builds a thread from a snapshot tree, keeping its order.
    ///
    /// Replies nested below the second level and duplicate ids are dropped.
    #[must_use]
    pub fn seeded(posts: Vec<CommunityPost>, clock: fn() -> u64) -> Self {
        let mut thread: Self = Self::with_clock(clock);

        for post in posts {
            if thread.nodes.contains_key(&post.id) {
                warn!(post_id = post.id.value(), "Dropping duplicate seeded post");
                continue;
            }
            let mut reply_ids: Vec<PostId> = Vec::with_capacity(post.replies.len());
            for reply in post.replies {
                if thread.nodes.contains_key(&reply.id) || reply.id == post.id {
                    warn!(post_id = reply.id.value(), "Dropping duplicate seeded reply");
                    continue;
                }
                if !reply.replies.is_empty() {
                    warn!(
                        post_id = reply.id.value(),
                        dropped = reply.replies.len(),
                        "Dropping replies nested below the second level"
                    );
                }
                thread.ids.observe(reply.id);
                reply_ids.push(reply.id);
                thread.nodes.insert(
                    reply.id,
                    PostNode {
                        author: reply.author,
                        content: reply.content,
                        timestamp: reply.timestamp,
                    },
                );
            }

            thread.ids.observe(post.id);
            thread.top_level.push_back(post.id);
            thread.replies.insert(post.id, reply_ids);
            thread.nodes.insert(
                post.id,
                PostNode {
                    author: post.author,
                    content: post.content,
                    timestamp: post.timestamp,
                },
            );
        }

        thread
    }

    /// Adds a new top-level post at the front of the thread.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `author` is absent or the content is blank (`RejectedEmpty`)
    /// - the last issued id is `u64::MAX` (`PostIdsExhausted`)
    ///
    /// Nothing is added in either case.
    pub fn add_post(
        &mut self,
        author: Option<&User>,
        content: &str,
    ) -> Result<CommunityPost, CoreError> {
        let author: &User = validate_post_content(author, content)?;

        let id: PostId = self.ids.next()?;
        self.nodes.insert(id, Self::fresh_node(author, content));
        self.top_level.push_front(id);
        self.replies.insert(id, Vec::new());

        info!(post_id = id.value(), author_id = author.id, "Post added");
        self.post(id).ok_or(CoreError::DomainViolation(DomainError::PostNotFound(id)))
    }

    /// Appends a reply to the top-level post `post_id`.
    ///
    /// Only the reply list of that post changes. Replies cannot be replied
    /// to; their ids are reported as not found.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `author` is absent or the content is blank (`RejectedEmpty`)
    /// - `post_id` is not a top-level post (`PostNotFound`)
    /// - the last issued id is `u64::MAX` (`PostIdsExhausted`)
    pub fn add_reply(
        &mut self,
        post_id: PostId,
        author: Option<&User>,
        content: &str,
    ) -> Result<CommunityPost, CoreError> {
        let author: &User = validate_post_content(author, content)?;
        if !self.replies.contains_key(&post_id) {
            debug!(post_id = post_id.value(), "Reply target not found");
            return Err(CoreError::DomainViolation(DomainError::PostNotFound(
                post_id,
            )));
        }

        let id: PostId = self.ids.next()?;
        self.nodes.insert(id, Self::fresh_node(author, content));
        if let Some(reply_ids) = self.replies.get_mut(&post_id) {
            reply_ids.push(id);
        }

        info!(
            post_id = post_id.value(),
            reply_id = id.value(),
            author_id = author.id,
            "Reply added"
        );
        self.node_snapshot(id)
            .ok_or(CoreError::DomainViolation(DomainError::PostNotFound(id)))
    }

    /// The whole thread as an immutable tree, newest post first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CommunityPost> {
        self.top_level
            .iter()
            .filter_map(|id| self.post(*id))
            .collect()
    }

    /// A snapshot of one post with its replies.
    ///
    /// Reply ids resolve to the reply alone.
    #[must_use]
    pub fn post(&self, id: PostId) -> Option<CommunityPost> {
        let post: CommunityPost = self.node_snapshot(id)?;
        let Some(reply_ids) = self.replies.get(&id) else {
            return Some(post);
        };
        let replies: Vec<CommunityPost> = reply_ids
            .iter()
            .filter_map(|reply_id| self.node_snapshot(*reply_id))
            .collect();
        Some(post.with_replies(replies))
    }

    /// Number of top-level posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.top_level.len()
    }

    /// Returns true if the thread has no posts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top_level.is_empty()
    }

    fn fresh_node(author: &User, content: &str) -> PostNode {
        PostNode {
            author: author.clone(),
            content: content.to_string(),
            timestamp: JUST_NOW.to_string(),
        }
    }

    fn node_snapshot(&self, id: PostId) -> Option<CommunityPost> {
        self.nodes.get(&id).map(|node| {
            CommunityPost::new(id, node.author.clone(), &node.content, &node.timestamp)
        })
    }
}
