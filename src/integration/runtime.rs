use std::collections::VecDeque;

use crate::core::{
    cmd::Cmd,
    msg::Msg,
    raw_msg::RawMsg,
    state::AppState,
    translator::translate_raw_to_domain,
    update::update,
};

/// Message queues around the pure update function
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
}

impl Runtime {
    /// Create a new Runtime
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
        }
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    pub fn has_pending(&self) -> bool {
        !self.msg_queue.is_empty() || !self.raw_msg_queue.is_empty()
    }

    /// Run queued messages through `update`, then translate and apply each
    /// queued raw message in arrival order. Raw input is translated against
    /// the state left by everything before it, so a focus change applies to
    /// the keys that follow. Returns the collected commands.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut commands = self.drain_msg_queue();
        while let Some(raw) = self.raw_msg_queue.pop_front() {
            if !raw.is_frequent() {
                log::trace!("raw: {raw:?}");
            }
            let msgs = translate_raw_to_domain(raw, &self.state);
            self.msg_queue.extend(msgs);
            commands.extend(self.drain_msg_queue());
        }
        commands
    }

    fn drain_msg_queue(&mut self) -> Vec<Cmd> {
        let mut commands = Vec::new();
        while let Some(msg) = self.msg_queue.pop_front() {
            log::debug!("update: {msg:?}");
            let state = std::mem::take(&mut self.state);
            let (next, cmds) = update(msg, state);
            self.state = next;
            commands.extend(cmds);
        }
        commands
    }
}
