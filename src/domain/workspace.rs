use super::{channel::Channel, message::ChatMessage};

const MINUTE_MS: i64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Workspace {
    pub title: String,
    pub channels: Vec<Channel>,
}

impl Workspace {
    pub fn new(title: impl Into<String>, channels: Vec<Channel>) -> Self {
        Self {
            title: title.into(),
            channels,
        }
    }

    /// Built-in demo workspace shown when no backend is attached.
    ///
    /// Message timestamps count back from `now_ms`.
    pub fn sample(title: impl Into<String>, user: &str, now_ms: i64) -> Self {
        let at = |minutes_ago: i64| now_ms - minutes_ago * MINUTE_MS;

        let general = Channel {
            name: "general".to_owned(),
            topic: "Company-wide announcements and work-based matters".to_owned(),
            is_private: false,
            starred: true,
            member_count: 42,
            messages: vec![
                ChatMessage::new("alice", "Good morning everyone!", at(95)),
                ChatMessage::new("bob", "Morning! Standup in 10?", at(90)),
                ChatMessage::new("alice", "Yes, same room as yesterday.", at(88)).edited(),
                ChatMessage::new(user, "On my way.", at(85)),
            ],
            typing: Some("carol".to_owned()),
        };

        let random = Channel {
            name: "random".to_owned(),
            topic: "Non-work banter and water cooler conversation".to_owned(),
            is_private: false,
            starred: false,
            member_count: 37,
            messages: vec![
                ChatMessage::new("carol", "Anyone up for lunch?", at(30)),
                ChatMessage::new("dave", "Tacos again?", at(28)),
            ],
            typing: None,
        };

        let ops = Channel {
            name: "ops".to_owned(),
            topic: "Deploys and incidents".to_owned(),
            is_private: true,
            starred: false,
            member_count: 5,
            messages: vec![ChatMessage::new(
                "erin",
                "Release 1.4 is rolling out to staging.",
                at(12),
            )],
            typing: None,
        };

        Self::new(title, vec![general, random, ops, Channel::new("empty")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_workspace_has_public_and_private_channels() {
        let workspace = Workspace::sample("demo", "me", 10_000_000);

        assert!(workspace.channels.iter().any(|c| c.is_private));
        assert!(workspace.channels.iter().any(|c| !c.is_private));
        assert_eq!(workspace.title, "demo");
    }

    #[test]
    fn sample_history_is_chronological_and_before_now() {
        let now_ms = 10_000_000;
        let workspace = Workspace::sample("demo", "me", now_ms);

        for channel in &workspace.channels {
            let stamps: Vec<i64> = channel.messages.iter().map(|m| m.timestamp_ms).collect();
            assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
            assert!(stamps.iter().all(|&ts| ts <= now_ms));
        }
    }

    #[test]
    fn sample_includes_messages_from_current_user() {
        let workspace = Workspace::sample("demo", "ferris", 10_000_000);

        assert!(workspace.channels[0]
            .messages
            .iter()
            .any(|message| message.user == "ferris"));
    }
}
