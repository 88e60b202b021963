// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Slot, User};
use std::collections::HashSet;

/// Validates that no two slots share a time label.
///
/// # Arguments
///
/// * `station_id` - The station the slots belong to (for error reporting)
/// * `slots` - The slot schedule to check
///
/// # Errors
///
/// Returns `DomainError::DuplicateSlotTime` naming the first repeated label.
pub fn validate_slot_times_unique(station_id: u32, slots: &[Slot]) -> Result<(), DomainError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for slot in slots {
        if !seen.insert(slot.time.as_str()) {
            return Err(DomainError::DuplicateSlotTime {
                station_id,
                time: slot.time.clone(),
            });
        }
    }
    Ok(())
}

/// Validates the inputs of a community post or reply.
///
/// Content is checked after trimming, but the original text is kept by the
/// caller as written.
///
/// # Arguments
///
/// * `author` - The signed-in author, if any
/// * `content` - The post body
///
/// # Returns
///
/// The author on success.
///
/// # Errors
///
/// Returns `DomainError::RejectedEmpty` if the author is absent or the
/// content is blank.
pub fn validate_post_content<'a>(
    author: Option<&'a User>,
    content: &str,
) -> Result<&'a User, DomainError> {
    let author: &User = author.ok_or(DomainError::RejectedEmpty)?;
    if content.trim().is_empty() {
        return Err(DomainError::RejectedEmpty);
    }
    Ok(author)
}
