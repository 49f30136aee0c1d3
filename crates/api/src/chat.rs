// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Direct-message topic naming.

const TOPIC_SEPARATOR: char = '_';

/// Returns the canonical topic shared by two users.
///
/// The ids are ordered lexicographically before joining, so both sides of a
/// conversation compute the same topic.
#[must_use]
pub fn chat_topic(user_a: &str, user_b: &str) -> String {
    let (first, second) = if user_a <= user_b {
        (user_a, user_b)
    } else {
        (user_b, user_a)
    };
    format!("{first}{TOPIC_SEPARATOR}{second}")
}
