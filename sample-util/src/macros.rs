//! printf-style shorthands for [`SampleUtil::print`](crate::SampleUtil::print)
//! and [`SampleUtil::print_unbounded`](crate::SampleUtil::print_unbounded).

/// Print through a [`SampleUtil`](crate::SampleUtil), bounded by its buffer size.
///
/// # Example
/// ```
/// use sample_util::{sample_print, MemorySink, SampleUtil};
///
/// let util = SampleUtil::new();
/// let sink = MemorySink::new();
/// util.initialize(sink.clone());
///
/// let written = sample_print!(util, "Found service: {}\n", "urn:x:service:Test:1");
/// assert_eq!(written, 36);
/// assert_eq!(sink.contents(), "Found service: urn:x:service:Test:1\n");
/// ```
#[macro_export]
macro_rules! sample_print {
    ($util:expr, $($arg:tt)*) => {
        $util.print(::std::format_args!($($arg)*))
    };
}

/// Print through a [`SampleUtil`](crate::SampleUtil) without truncation.
///
/// # Example
/// ```
/// use sample_util::{sample_uprint, MemorySink, SampleUtil, SampleUtilConfig};
///
/// let util = SampleUtil::with_config(SampleUtilConfig::new().with_max_print_len(8))?;
/// let sink = MemorySink::new();
/// util.initialize(sink.clone());
///
/// let written = sample_uprint!(util, "serviceId: {}\n", "urn:upnp-org:serviceId:tvcontrol1");
/// assert_eq!(written, 45);
/// assert_eq!(sink.contents(), "serviceId: urn:upnp-org:serviceId:tvcontrol1\n");
/// assert_eq!(sample_uprint!(util, "{}", ""), 0);
/// # Ok::<(), sample_util::SampleUtilError>(())
/// ```
#[macro_export]
macro_rules! sample_uprint {
    ($util:expr, $($arg:tt)*) => {
        $util.print_unbounded(::std::format_args!($($arg)*))
    };
}
