//! Helpers shared by UPnP sample control points and devices.
//!
//! This crate is the thin layer between a UPnP library and a sample
//! application's console:
//!
//! - [`SampleUtil`]: the context holding the application's print sink and
//!   state-update sink behind a recursive display lock, with bounded
//!   printf-style output ([`sample_print!`]).
//! - [`CallbackEvent`] / [`EventType`]: the callback events a UPnP library
//!   delivers, and [`SampleUtil::print_event`] to dump them verbosely.
//! - [`SampleUtil::find_and_parse_service`]: locate a service in a device
//!   description document and resolve its control and event URLs.
//!
//! DOM access itself lives in the `upnp_dom` crate, re-exported here as
//! [`dom`].
//!
//! # Example
//!
//! ```
//! use sample_util::{MemorySink, SampleUtil};
//!
//! let util = SampleUtil::new();
//! let sink = MemorySink::new();
//! util.initialize(sink.clone());
//!
//! let xml = r#"<root><device><serviceList><service>
//!     <serviceType>urn:schemas-upnp-org:service:SwitchPower:1</serviceType>
//!     <serviceId>urn:upnp-org:serviceId:SwitchPower.1</serviceId>
//!     <controlURL>/switch/control</controlURL>
//!     <eventSubURL>/switch/event</eventSubURL>
//! </service></serviceList></device></root>"#;
//!
//! let endpoints = util
//!     .find_service_in_xml(xml, "http://192.168.1.7:49152/desc.xml",
//!                          "urn:schemas-upnp-org:service:SwitchPower:1")?
//!     .expect("service listed");
//! assert_eq!(endpoints.control_url.as_deref(),
//!            Some("http://192.168.1.7:49152/switch/control"));
//! # Ok::<(), sample_util::SampleUtilError>(())
//! ```

mod context;
mod error;
mod report;
mod service;

pub mod config;
pub mod event;
pub mod logging;
mod macros;
pub mod sink;

pub use config::SampleUtilConfig;
pub use context::SampleUtil;
pub use error::{Result, SampleUtilError};
pub use event::{
    ActionComplete, ActionRequest, CallbackEvent, Discovery, EventCategory, EventNotification,
    EventSubscribe, EventType, StateVarComplete, StateVarRequest, SubscriptionRequest,
};
pub use service::ServiceEndpoints;
pub use sink::{
    ConsoleSink, MemorySink, PrintSink, StateEventKind, StateUpdate, StateUpdateSink, TracingSink,
};

pub use upnp_dom as dom;
