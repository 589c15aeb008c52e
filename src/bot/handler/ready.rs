//! Ready event conversion.
//!
//! The ready event fires once per gateway connection after authentication and the
//! initial handshake. The orchestrator needs the bot's own account from it.

use serenity::all::Ready;

use crate::model::event::ReadyInfo;

pub fn to_ready_info(ready: &Ready) -> ReadyInfo {
    ReadyInfo {
        user_id: ready.user.id.get(),
        user_name: ready.user.name.clone(),
        session_id: ready.session_id.clone(),
        guild_count: ready.guilds.len(),
    }
}
