use serenity::all::Message;

use crate::model::event::InboundMessage;

/// Converts a Serenity message, keeping the content untouched.
pub fn to_inbound_message(message: Message) -> InboundMessage {
    InboundMessage {
        id: message.id.get(),
        author_id: message.author.id.get(),
        guild_id: message.guild_id.map(|id| id.get()),
        channel_id: message.channel_id.get(),
        content: message.content,
    }
}
