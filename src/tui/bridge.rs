//! Navigator and notifier implementations that post back into the event loop.
//!
//! The core calls these synchronously; they only enqueue an `Action`, so the
//! caller never waits on the destination screen.

use std::sync::mpsc::Sender;

use log::warn;

use crate::core::action::Action;
use crate::core::navigation::{NavigationIntent, Navigator, Notifier};

pub struct ChannelNavigator {
    tx: Sender<Action>,
}

impl ChannelNavigator {
    pub fn new(tx: Sender<Action>) -> Self {
        Self { tx }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, intent: NavigationIntent) {
        if self.tx.send(Action::Navigate(intent)).is_err() {
            warn!("Failed to send navigation intent: receiver dropped");
        }
    }
}

pub struct ChannelNotifier {
    tx: Sender<Action>,
}

impl ChannelNotifier {
    pub fn new(tx: Sender<Action>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn alert(&self, message: &str) {
        if self.tx.send(Action::ShowNotice(message.to_string())).is_err() {
            warn!("Failed to send notice: receiver dropped");
        }
    }
}
