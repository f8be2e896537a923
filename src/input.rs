//! Input edges and the per-tick funnel
//!
//! The host may deliver key edges from any thread. They are pushed through an
//! [`InputQueue`] and drained once per tick on the simulation thread, so the
//! simulation itself never needs a lock.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Confirm,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Pressed,
    Released,
}

/// A single key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEdge {
    pub key: Key,
    pub action: KeyAction,
}

impl InputEdge {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Pressed,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Released,
        }
    }
}

/// Cloneable producer handle for host callbacks
#[derive(Debug, Clone)]
pub struct InputSender(Sender<InputEdge>);

impl InputSender {
    /// Queue an edge. Returns false once the queue has been dropped.
    pub fn send(&self, edge: InputEdge) -> bool {
        self.0.send(edge).is_ok()
    }
}

/// Single-consumer edge queue owned by the simulation driver
#[derive(Debug)]
pub struct InputQueue {
    tx: Sender<InputEdge>,
    rx: Receiver<InputEdge>,
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl InputQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> InputSender {
        InputSender(self.tx.clone())
    }

    /// Everything queued since the last drain, in arrival order
    pub fn drain(&self) -> Vec<InputEdge> {
        self.rx.try_iter().collect()
    }
}
