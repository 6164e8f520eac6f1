//! The three built-in preview formats.
//!
//! All counts, captions, and timestamps here are fixed sample content; only
//! the avatar slots and the name/handle slots are substituted at render
//! time.

use iced::Color;

use super::{AvatarSpec, Block, FormatDescriptor, LineSpec, Section, TextSlot};

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb8(r, g, b)
}

/// Instagram-style preview: a story ring plus a feed post.
pub fn instagram() -> FormatDescriptor {
    let accent = rgb(0xc1, 0x35, 0x84);

    FormatDescriptor {
        label: "Instagram",
        accent,
        sections: vec![
            Section {
                title: "Stories",
                fill: None,
                blocks: vec![Block::AvatarColumn {
                    avatar: AvatarSpec::ringed(60.0, accent),
                    lines: vec![LineSpec::plain(TextSlot::DisplayName, 12.0)],
                }],
            },
            Section {
                title: "Feed post",
                fill: None,
                blocks: vec![
                    Block::AvatarRow {
                        avatar: AvatarSpec::user(32.0),
                        rows: vec![
                            vec![LineSpec::bold(TextSlot::Handle, 14.0)],
                            vec![LineSpec::plain(TextSlot::Static("Tokyo, Japan"), 11.0)],
                        ],
                        trailing: Some(LineSpec::bold(TextSlot::Static("⋯"), 16.0)),
                        badge: None,
                    },
                    Block::Banner {
                        height: 180.0,
                        color: rgb(0xf0, 0xf0, 0xf0),
                    },
                    Block::IconRow(vec![
                        ("♥", None),
                        ("💬", None),
                        ("✈", None),
                        ("🔖", None),
                    ]),
                    Block::TextRow(vec![LineSpec::bold(TextSlot::Static("1,234 likes"), 14.0)]),
                    Block::TextRow(vec![
                        LineSpec::bold(TextSlot::Handle, 14.0),
                        LineSpec::plain(
                            TextSlot::Static("Tried a new icon! What do you think? #newicon #profile"),
                            14.0,
                        ),
                    ]),
                    Block::TextRow(vec![LineSpec::muted(
                        TextSlot::Static("View all 42 comments"),
                        14.0,
                    )]),
                    Block::TextRow(vec![LineSpec::muted(TextSlot::Static("2 HOURS AGO"), 10.0)]),
                ],
            },
        ],
    }
}

/// X-style preview: a profile header plus a timeline post.
pub fn x() -> FormatDescriptor {
    FormatDescriptor {
        label: "X",
        accent: rgb(0x1d, 0x9b, 0xf0),
        sections: vec![
            Section {
                title: "Profile",
                fill: None,
                blocks: vec![
                    Block::Banner {
                        height: 80.0,
                        color: rgb(0xcf, 0xd9, 0xde),
                    },
                    Block::AvatarColumn {
                        avatar: AvatarSpec::user(68.0),
                        lines: vec![
                            LineSpec::bold(TextSlot::DisplayName, 20.0),
                            LineSpec::muted(TextSlot::AtHandle, 15.0),
                            LineSpec::plain(
                                TextSlot::Static("Bio goes here. A few words about work and hobbies."),
                                14.0,
                            ),
                        ],
                    },
                    Block::TextRow(vec![
                        LineSpec::bold(TextSlot::Static("123"), 14.0),
                        LineSpec::muted(TextSlot::Static("Following"), 14.0),
                        LineSpec::bold(TextSlot::Static("456"), 14.0),
                        LineSpec::muted(TextSlot::Static("Followers"), 14.0),
                    ]),
                ],
            },
            Section {
                title: "Timeline",
                fill: None,
                blocks: vec![
                    Block::AvatarRow {
                        avatar: AvatarSpec::user(40.0),
                        rows: vec![
                            vec![
                                LineSpec::bold(TextSlot::DisplayName, 15.0),
                                LineSpec::muted(TextSlot::AtHandle, 15.0),
                                LineSpec::muted(TextSlot::Static("· 2h"), 15.0),
                            ],
                            vec![LineSpec::plain(
                                TextSlot::Static("Changed my profile picture! How does it look? 🎨"),
                                15.0,
                            )],
                        ],
                        trailing: None,
                        badge: None,
                    },
                    Block::IconRow(vec![
                        ("💬", Some("12")),
                        ("🔁", Some("34")),
                        ("♥", Some("128")),
                        ("📊", Some("1.2K")),
                        ("🔖", None),
                    ]),
                ],
            },
        ],
    }
}

/// LINE-style preview: chat list, chat room, and profile card.
pub fn line() -> FormatDescriptor {
    let accent = rgb(0x06, 0xc7, 0x55);

    FormatDescriptor {
        label: "LINE",
        accent,
        sections: vec![
            Section {
                title: "Chats",
                fill: None,
                blocks: vec![
                    Block::AvatarRow {
                        avatar: AvatarSpec::user(50.0),
                        rows: vec![
                            vec![LineSpec::bold(TextSlot::DisplayName, 16.0)],
                            vec![LineSpec::muted(
                                TextSlot::Static("The latest message shows up here"),
                                14.0,
                            )],
                        ],
                        trailing: Some(LineSpec::muted(TextSlot::Static("12:34"), 12.0)),
                        badge: Some("3"),
                    },
                    // A fixed contact row, for comparing against other icons.
                    Block::AvatarRow {
                        avatar: AvatarSpec::placeholder(50.0, "F"),
                        rows: vec![
                            vec![LineSpec::bold(TextSlot::Static("A friend"), 16.0)],
                            vec![LineSpec::muted(TextSlot::Static("Got it!"), 14.0)],
                        ],
                        trailing: Some(LineSpec::muted(TextSlot::Static("Yesterday"), 12.0)),
                        badge: None,
                    },
                ],
            },
            Section {
                title: "Chat room",
                fill: Some(rgb(0x7d, 0xa3, 0xaf)),
                blocks: vec![
                    Block::Pill("Dec 13, 2024"),
                    Block::Bubble {
                        mine: false,
                        avatar: true,
                        text: "Hi there!",
                        time: None,
                    },
                    Block::Bubble {
                        mine: false,
                        avatar: false,
                        text: "You changed your icon ✨ Looks great!",
                        time: Some("12:30"),
                    },
                    Block::Bubble {
                        mine: true,
                        avatar: false,
                        text: "Thanks!",
                        time: None,
                    },
                    Block::Bubble {
                        mine: true,
                        avatar: false,
                        text: "I was wondering how it would look",
                        time: Some("12:34"),
                    },
                ],
            },
            Section {
                title: "Profile",
                fill: None,
                blocks: vec![Block::AvatarColumn {
                    avatar: AvatarSpec::user(80.0),
                    lines: vec![
                        LineSpec::bold(TextSlot::DisplayName, 18.0),
                        LineSpec::muted(TextSlot::Static("Status message"), 14.0),
                    ],
                }],
            },
        ],
    }
}
