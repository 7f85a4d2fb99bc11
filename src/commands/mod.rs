pub mod conversation;
pub mod history;
pub mod input;

use std::sync::Mutex;

use crate::conversation::Session;

/// The session behind a lock, managed by Tauri and shared by all commands.
#[derive(Default)]
pub struct SessionState(pub Mutex<Session>);
