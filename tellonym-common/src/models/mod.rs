//! JSON wire models returned by the Tellonym API.
//!
//! Field names are camelCase on the wire. Most fields are optional or
//! defaulted: the API omits fields freely depending on who is asking, and
//! unknown fields are ignored.

#![allow(missing_docs, reason = "fields mirror the API's JSON one-to-one")]

mod account;
mod chat;
mod post;
mod social;
mod user;

pub use account::{Account, ChallengeEmoji, CheckUpdates, Emoji, UserConfig};
pub use chat::{Chat, ChatList, ChatUser, Message};
pub use post::{
    AnswerMedia, Answer, AppSlot, FeedElement, Likes, MaybeAd, SentTell, Sender, Tell, TellAd,
    TellMedia, TellUser,
};
pub use social::{
    BlockListElement, BlockedUser, Follower, SearchHistoryUser, SearchResultUser,
    SuggestedContact, SuggestedPerson,
};
pub use user::{Profile, User, UserAvatar, UserLink, UserProfile};
