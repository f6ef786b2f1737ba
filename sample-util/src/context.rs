//! The helper context: sinks, the display lock and formatted printing.
//!
//! One [`SampleUtil`] replaces the process-wide print function, update
//! function and display mutex a sample application would otherwise keep in
//! globals. Share it behind an `Arc` between the UPnP callback threads and
//! the application's command loop.

use std::fmt;
use std::sync::Arc;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard, RwLock};
use tracing::{debug, trace};

use crate::config::SampleUtilConfig;
use crate::error::Result;
use crate::sink::{PrintSink, StateEventKind, StateUpdate, StateUpdateSink};

#[derive(Default)]
struct OutputSlot {
    initialized: bool,
    sink: Option<Arc<dyn PrintSink>>,
}

#[derive(Default)]
struct UpdateSlot {
    registered: bool,
    sink: Option<Arc<dyn StateUpdateSink>>,
}

/// Shared output and state-update context for a sample application.
pub struct SampleUtil {
    config: SampleUtilConfig,
    /// Serializes everything written to the sinks. Recursive so a multi-part
    /// dump can hold it while printing piece by piece.
    display: ReentrantMutex<()>,
    output: RwLock<OutputSlot>,
    update: RwLock<UpdateSlot>,
}

impl SampleUtil {
    /// Create a context with the default configuration and no sinks.
    pub fn new() -> Self {
        Self {
            config: SampleUtilConfig::default(),
            display: ReentrantMutex::new(()),
            output: RwLock::new(OutputSlot::default()),
            update: RwLock::new(UpdateSlot::default()),
        }
    }

    /// Create a context with a custom configuration.
    pub fn with_config(config: SampleUtilConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &SampleUtilConfig {
        &self.config
    }

    /// Install the print sink.
    ///
    /// Only the first call (or the first call after [`finish`](Self::finish))
    /// takes effect; later calls leave the installed sink alone. Returns
    /// whether this call installed `sink`.
    pub fn initialize<S>(&self, sink: S) -> bool
    where
        S: PrintSink + 'static,
    {
        let mut output = self.output.write();
        if output.initialized {
            return false;
        }
        output.sink = Some(Arc::new(sink));
        output.initialized = true;
        debug!("Print sink installed");
        true
    }

    pub fn is_initialized(&self) -> bool {
        self.output.read().initialized
    }

    /// Install the state-update sink. Only the first call ever takes effect,
    /// [`finish`](Self::finish) does not re-arm it.
    pub fn register_update_function<S>(&self, sink: S) -> bool
    where
        S: StateUpdateSink + 'static,
    {
        let mut update = self.update.write();
        if update.registered {
            return false;
        }
        update.sink = Some(Arc::new(sink));
        update.registered = true;
        debug!("State update sink registered");
        true
    }

    /// Drop the print sink and allow [`initialize`](Self::initialize) again.
    pub fn finish(&self) {
        let _display = self.display.lock();
        let mut output = self.output.write();
        output.sink = None;
        output.initialized = false;
        debug!("Print sink released");
    }

    /// Hold the display lock to keep several prints together.
    ///
    /// The lock is recursive; printing while holding it is fine.
    pub fn display_lock(&self) -> ReentrantMutexGuard<'_, ()> {
        self.display.lock()
    }

    /// Format and print, bounded by `max_print_len`.
    ///
    /// At most `max_print_len - 1` bytes reach the sink, cut back to a
    /// character boundary. Returns the length of the full formatted text.
    pub fn print(&self, args: fmt::Arguments<'_>) -> usize {
        let mut text = fmt::format(args);
        let full_len = text.len();
        truncate_at_char_boundary(&mut text, self.config.max_print_len.saturating_sub(1));
        self.emit(&text);
        full_len
    }

    /// Format and print without any length bound. Empty text is not emitted.
    pub fn print_unbounded(&self, args: fmt::Arguments<'_>) -> usize {
        let text = fmt::format(args);
        if !text.is_empty() {
            self.emit(&text);
        }
        text.len()
    }

    /// Forward a state change to the registered update sink, if any.
    pub fn state_update(&self, var_name: &str, var_value: &str, udn: &str, kind: StateEventKind) {
        let _display = self.display.lock();
        let sink = self.update.read().sink.clone();
        match sink {
            Some(sink) => sink.state_update(&StateUpdate {
                var_name,
                var_value,
                udn,
                kind,
            }),
            None => trace!(var_name, udn, "No update sink registered"),
        }
    }

    fn emit(&self, text: &str) {
        let _display = self.display.lock();
        // Clone out of the slot so a sink may call back into the context
        let sink = self.output.read().sink.clone();
        if let Some(sink) = sink {
            trace!(len = text.len(), "Printing");
            sink.print(text);
        }
    }
}

impl Default for SampleUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SampleUtil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SampleUtil")
            .field("config", &self.config)
            .field("initialized", &self.output.read().initialized)
            .field("update_registered", &self.update.read().registered)
            .finish()
    }
}

fn truncate_at_char_boundary(text: &mut String, max_len: usize) {
    if text.len() <= max_len {
        return;
    }
    let mut cut = max_len;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use parking_lot::Mutex;
    use std::thread;

    #[test]
    fn test_print_without_sink_returns_length() {
        let util = SampleUtil::new();
        assert!(!util.is_initialized());
        assert_eq!(util.print(format_args!("Found service: {}\n", "x")), 17);
    }

    #[test]
    fn test_initialize_only_once() {
        let util = SampleUtil::new();
        let first = MemorySink::new();
        let second = MemorySink::new();

        assert!(util.initialize(first.clone()));
        assert!(!util.initialize(second.clone()));

        util.print(format_args!("hello\n"));
        assert_eq!(first.contents(), "hello\n");
        assert!(second.contents().is_empty());
    }

    #[test]
    fn test_finish_rearms_initialize() {
        let util = SampleUtil::new();
        let first = MemorySink::new();
        let second = MemorySink::new();

        util.initialize(first.clone());
        util.finish();
        assert!(!util.is_initialized());

        util.print(format_args!("dropped\n"));
        assert!(first.contents().is_empty());

        assert!(util.initialize(second.clone()));
        util.print(format_args!("kept\n"));
        assert_eq!(second.contents(), "kept\n");
    }

    #[test]
    fn test_print_truncates_to_buffer() {
        let util = SampleUtil::with_config(SampleUtilConfig::new().with_max_print_len(8)).unwrap();
        let sink = MemorySink::new();
        util.initialize(sink.clone());

        let len = util.print(format_args!("{}", "0123456789"));
        assert_eq!(len, 10);
        assert_eq!(sink.contents(), "0123456");
    }

    #[test]
    fn test_print_truncates_on_char_boundary() {
        let util = SampleUtil::with_config(SampleUtilConfig::new().with_max_print_len(4)).unwrap();
        let sink = MemorySink::new();
        util.initialize(sink.clone());

        // "aé" is 3 bytes, "aéé" is 5
        util.print(format_args!("aéé"));
        assert_eq!(sink.contents(), "aé");
    }

    #[test]
    fn test_print_unbounded() {
        let util = SampleUtil::with_config(SampleUtilConfig::new().with_max_print_len(4)).unwrap();
        let sink = MemorySink::new();
        util.initialize(sink.clone());

        assert_eq!(util.print_unbounded(format_args!("{}", "long enough")), 11);
        assert_eq!(util.print_unbounded(format_args!("")), 0);
        assert_eq!(sink.contents(), "long enough");
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let result = SampleUtil::with_config(SampleUtilConfig::new().with_max_print_len(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_function_registered_once() {
        let util = SampleUtil::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let captured = Arc::clone(&seen);
        assert!(util.register_update_function(move |update: &StateUpdate<'_>| {
            captured.lock().push((
                update.var_name.to_string(),
                update.var_value.to_string(),
                update.kind,
            ));
        }));
        assert!(!util.register_update_function(|_: &StateUpdate<'_>| {}));

        util.finish();
        util.state_update("Volume", "7", "uuid:tv-1", StateEventKind::StateUpdate);
        util.state_update("", "", "uuid:tv-2", StateEventKind::DeviceAdded);

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("Volume".to_string(), "7".to_string(), StateEventKind::StateUpdate));
        assert_eq!(seen[1].2, StateEventKind::DeviceAdded);
    }

    #[test]
    fn test_state_update_without_sink_is_noop() {
        let util = SampleUtil::new();
        util.state_update("Power", "1", "uuid:tv-1", StateEventKind::StateUpdate);
    }

    #[test]
    fn test_sink_may_print_reentrantly() {
        let util = Arc::new(SampleUtil::new());
        let sink = MemorySink::new();
        let inner = sink.clone();
        let weak = Arc::downgrade(&util);

        util.initialize(move |text: &str| {
            inner.print(text);
            if text.starts_with("outer") {
                if let Some(util) = weak.upgrade() {
                    util.print(format_args!("inner\n"));
                }
            }
        });

        util.print(format_args!("outer\n"));
        assert_eq!(sink.lines(), vec!["outer", "inner"]);
    }

    #[test]
    fn test_update_sink_may_print_reentrantly() {
        let util = Arc::new(SampleUtil::new());
        let sink = MemorySink::new();
        util.initialize(sink.clone());

        let weak = Arc::downgrade(&util);
        util.register_update_function(move |update: &StateUpdate<'_>| {
            if let Some(util) = weak.upgrade() {
                util.print(format_args!("{} {}={}\n", update.kind, update.var_name, update.var_value));
            }
        });

        util.state_update("Volume", "7", "uuid:tv-1", StateEventKind::StateUpdate);
        assert_eq!(sink.lines(), vec!["STATE_UPDATE Volume=7"]);
    }

    #[test]
    fn test_state_update_waits_for_display_lock() {
        let util = Arc::new(SampleUtil::new());
        let sink = MemorySink::new();
        util.initialize(sink.clone());

        let updates = sink.clone();
        util.register_update_function(move |update: &StateUpdate<'_>| {
            updates.print(&format!("update {}\n", update.var_value));
        });

        let printer = {
            let util = Arc::clone(&util);
            thread::spawn(move || {
                for _ in 0..50 {
                    let _guard = util.display_lock();
                    util.print(format_args!("begin\n"));
                    thread::yield_now();
                    util.print(format_args!("end\n"));
                }
            })
        };
        let updater = {
            let util = Arc::clone(&util);
            thread::spawn(move || {
                for i in 0..50 {
                    util.state_update("Channel", &i.to_string(), "uuid:tv-1", StateEventKind::StateUpdate);
                }
            })
        };
        printer.join().unwrap();
        updater.join().unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 150);
        let mut in_block = false;
        for line in &lines {
            match line.as_str() {
                "begin" => {
                    assert!(!in_block);
                    in_block = true;
                }
                "end" => {
                    assert!(in_block);
                    in_block = false;
                }
                update => {
                    assert!(!in_block, "{} landed inside a block", update);
                    assert!(update.starts_with("update "));
                }
            }
        }
    }

    #[test]
    fn test_display_lock_keeps_blocks_together() {
        let util = Arc::new(SampleUtil::new());
        let sink = MemorySink::new();
        util.initialize(sink.clone());

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let util = Arc::clone(&util);
                thread::spawn(move || {
                    for _ in 0..25 {
                        let _guard = util.display_lock();
                        util.print(format_args!("begin {}\n", worker));
                        util.print(format_args!("end {}\n", worker));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 200);
        for pair in lines.chunks(2) {
            let begin = pair[0].strip_prefix("begin ").unwrap();
            let end = pair[1].strip_prefix("end ").unwrap();
            assert_eq!(begin, end);
        }
    }
}
