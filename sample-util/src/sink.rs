//! Output and state-update sinks supplied by the host application.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for formatted text.
///
/// Any `Fn(&str) + Send + Sync` closure is a sink.
pub trait PrintSink: Send + Sync {
    fn print(&self, text: &str);
}

impl<F> PrintSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn print(&self, text: &str) {
        self(text)
    }
}

/// Kind of state change reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateEventKind {
    /// A state variable changed value
    StateUpdate = 0,
    /// A device was discovered and added
    DeviceAdded = 1,
    /// A device left the network
    DeviceRemoved = 2,
    /// A state variable query finished
    GetVarComplete = 3,
}

impl fmt::Display for StateEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StateEventKind::StateUpdate => "STATE_UPDATE",
            StateEventKind::DeviceAdded => "DEVICE_ADDED",
            StateEventKind::DeviceRemoved => "DEVICE_REMOVED",
            StateEventKind::GetVarComplete => "GET_VAR_COMPLETE",
        };
        f.write_str(name)
    }
}

/// One state change as handed to a [`StateUpdateSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateUpdate<'a> {
    pub var_name: &'a str,
    pub var_value: &'a str,
    /// UDN of the device the variable belongs to
    pub udn: &'a str,
    pub kind: StateEventKind,
}

/// Receiver of state changes, typically the sample's device table UI.
///
/// Any `Fn(&StateUpdate) + Send + Sync` closure is an update sink.
pub trait StateUpdateSink: Send + Sync {
    fn state_update(&self, update: &StateUpdate<'_>);
}

impl<F> StateUpdateSink for F
where
    F: Fn(&StateUpdate<'_>) + Send + Sync,
{
    fn state_update(&self, update: &StateUpdate<'_>) {
        self(update)
    }
}

/// Sink that keeps everything printed to it in memory.
///
/// Clones share the same buffer, so one clone can be installed while
/// another is used to read the output back.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Printed text split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(str::to_string).collect()
    }

    /// Take the contents, leaving the buffer empty.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock())
    }
}

impl PrintSink for MemorySink {
    fn print(&self, text: &str) {
        self.buffer.lock().push_str(text);
    }
}

/// Sink that writes to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl PrintSink for ConsoleSink {
    fn print(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout has nowhere to report to
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

/// Sink that forwards printed text to `tracing` at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl PrintSink for TracingSink {
    fn print(&self, text: &str) {
        let text = text.trim_end_matches('\n');
        if !text.is_empty() {
            tracing::info!(target: "sample_util::output", "{}", text);
        }
    }
}
