//! Callback events delivered by a UPnP library to a sample application.
//!
//! The set of event kinds is closed: discovery (SSDP), control (SOAP) and
//! eventing (GENA). Each [`CallbackEvent`] variant carries the payload the
//! library hands to the callback for that kind.

use std::fmt;

use xmltree::Element;

/// Sub-protocol an event kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// SSDP discovery
    Discovery,
    /// SOAP control
    Control,
    /// GENA eventing
    Eventing,
}

/// Kind of callback event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    DiscoveryAdvertisementAlive,
    DiscoveryAdvertisementByebye,
    DiscoverySearchResult,
    DiscoverySearchTimeout,
    ControlActionRequest,
    ControlActionComplete,
    ControlGetVarRequest,
    ControlGetVarComplete,
    EventSubscriptionRequest,
    EventReceived,
    EventRenewalComplete,
    EventSubscribeComplete,
    EventUnsubscribeComplete,
    EventAutorenewalFailed,
    EventSubscriptionExpired,
}

impl EventType {
    /// Every event kind, in declaration order.
    pub const ALL: [EventType; 15] = [
        EventType::DiscoveryAdvertisementAlive,
        EventType::DiscoveryAdvertisementByebye,
        EventType::DiscoverySearchResult,
        EventType::DiscoverySearchTimeout,
        EventType::ControlActionRequest,
        EventType::ControlActionComplete,
        EventType::ControlGetVarRequest,
        EventType::ControlGetVarComplete,
        EventType::EventSubscriptionRequest,
        EventType::EventReceived,
        EventType::EventRenewalComplete,
        EventType::EventSubscribeComplete,
        EventType::EventUnsubscribeComplete,
        EventType::EventAutorenewalFailed,
        EventType::EventSubscriptionExpired,
    ];

    /// Canonical upper-case name, e.g. `UPNP_EVENT_RECEIVED`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::DiscoveryAdvertisementAlive => "UPNP_DISCOVERY_ADVERTISEMENT_ALIVE",
            EventType::DiscoveryAdvertisementByebye => "UPNP_DISCOVERY_ADVERTISEMENT_BYEBYE",
            EventType::DiscoverySearchResult => "UPNP_DISCOVERY_SEARCH_RESULT",
            EventType::DiscoverySearchTimeout => "UPNP_DISCOVERY_SEARCH_TIMEOUT",
            EventType::ControlActionRequest => "UPNP_CONTROL_ACTION_REQUEST",
            EventType::ControlActionComplete => "UPNP_CONTROL_ACTION_COMPLETE",
            EventType::ControlGetVarRequest => "UPNP_CONTROL_GET_VAR_REQUEST",
            EventType::ControlGetVarComplete => "UPNP_CONTROL_GET_VAR_COMPLETE",
            EventType::EventSubscriptionRequest => "UPNP_EVENT_SUBSCRIPTION_REQUEST",
            EventType::EventReceived => "UPNP_EVENT_RECEIVED",
            EventType::EventRenewalComplete => "UPNP_EVENT_RENEWAL_COMPLETE",
            EventType::EventSubscribeComplete => "UPNP_EVENT_SUBSCRIBE_COMPLETE",
            EventType::EventUnsubscribeComplete => "UPNP_EVENT_UNSUBSCRIBE_COMPLETE",
            EventType::EventAutorenewalFailed => "UPNP_EVENT_AUTORENEWAL_FAILED",
            EventType::EventSubscriptionExpired => "UPNP_EVENT_SUBSCRIPTION_EXPIRED",
        }
    }

    pub fn category(&self) -> EventCategory {
        match self {
            EventType::DiscoveryAdvertisementAlive
            | EventType::DiscoveryAdvertisementByebye
            | EventType::DiscoverySearchResult
            | EventType::DiscoverySearchTimeout => EventCategory::Discovery,
            EventType::ControlActionRequest
            | EventType::ControlActionComplete
            | EventType::ControlGetVarRequest
            | EventType::ControlGetVarComplete => EventCategory::Control,
            _ => EventCategory::Eventing,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SSDP advertisement or search result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Discovery {
    pub err_code: i32,
    /// Advertisement lifetime in seconds
    pub expires: i32,
    pub device_id: String,
    pub device_type: String,
    pub service_type: String,
    pub service_ver: String,
    /// URL of the device description document
    pub location: String,
    pub os: String,
    pub date: String,
    pub ext: String,
}

/// Incoming SOAP action on a device.
#[derive(Debug, Clone, Default)]
pub struct ActionRequest {
    pub err_code: i32,
    pub err_str: String,
    pub action_name: String,
    pub dev_udn: String,
    pub service_id: String,
    pub action_request: Option<Element>,
    pub action_result: Option<Element>,
}

/// Completion of an action sent by a control point.
#[derive(Debug, Clone, Default)]
pub struct ActionComplete {
    pub err_code: i32,
    pub ctrl_url: String,
    pub action_request: Option<Element>,
    pub action_result: Option<Element>,
}

/// Incoming state variable query on a device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateVarRequest {
    pub err_code: i32,
    pub err_str: String,
    pub dev_udn: String,
    pub service_id: String,
    pub state_var_name: String,
    pub current_val: Option<String>,
}

/// Completion of a state variable query sent by a control point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateVarComplete {
    pub err_code: i32,
    pub ctrl_url: String,
    pub state_var_name: String,
    pub current_val: Option<String>,
}

/// Incoming GENA subscription on a device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionRequest {
    pub service_id: String,
    pub udn: String,
    pub sid: String,
}

/// Event notification received by a control point.
#[derive(Debug, Clone, Default)]
pub struct EventNotification {
    pub sid: String,
    pub event_key: i32,
    /// The `propertyset` of changed variables
    pub changed_variables: Option<Element>,
}

/// Outcome of a subscribe, renew or unsubscribe call, or of its expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSubscribe {
    pub sid: String,
    pub err_code: i32,
    pub publisher_url: String,
    /// Granted subscription timeout in seconds
    pub timeout: i32,
}

/// A callback event together with its payload.
#[derive(Debug, Clone)]
pub enum CallbackEvent {
    AdvertisementAlive(Discovery),
    AdvertisementByebye(Discovery),
    SearchResult(Discovery),
    SearchTimeout,
    ActionRequest(ActionRequest),
    ActionComplete(ActionComplete),
    GetVarRequest(StateVarRequest),
    GetVarComplete(StateVarComplete),
    SubscriptionRequest(SubscriptionRequest),
    EventReceived(EventNotification),
    RenewalComplete(EventSubscribe),
    SubscribeComplete(EventSubscribe),
    UnsubscribeComplete(EventSubscribe),
    AutorenewalFailed(EventSubscribe),
    SubscriptionExpired(EventSubscribe),
}

impl CallbackEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            CallbackEvent::AdvertisementAlive(_) => EventType::DiscoveryAdvertisementAlive,
            CallbackEvent::AdvertisementByebye(_) => EventType::DiscoveryAdvertisementByebye,
            CallbackEvent::SearchResult(_) => EventType::DiscoverySearchResult,
            CallbackEvent::SearchTimeout => EventType::DiscoverySearchTimeout,
            CallbackEvent::ActionRequest(_) => EventType::ControlActionRequest,
            CallbackEvent::ActionComplete(_) => EventType::ControlActionComplete,
            CallbackEvent::GetVarRequest(_) => EventType::ControlGetVarRequest,
            CallbackEvent::GetVarComplete(_) => EventType::ControlGetVarComplete,
            CallbackEvent::SubscriptionRequest(_) => EventType::EventSubscriptionRequest,
            CallbackEvent::EventReceived(_) => EventType::EventReceived,
            CallbackEvent::RenewalComplete(_) => EventType::EventRenewalComplete,
            CallbackEvent::SubscribeComplete(_) => EventType::EventSubscribeComplete,
            CallbackEvent::UnsubscribeComplete(_) => EventType::EventUnsubscribeComplete,
            CallbackEvent::AutorenewalFailed(_) => EventType::EventAutorenewalFailed,
            CallbackEvent::SubscriptionExpired(_) => EventType::EventSubscriptionExpired,
        }
    }

    /// Discovery payload, for the three SSDP kinds that carry one.
    pub fn discovery(&self) -> Option<&Discovery> {
        match self {
            CallbackEvent::AdvertisementAlive(d)
            | CallbackEvent::AdvertisementByebye(d)
            | CallbackEvent::SearchResult(d) => Some(d),
            _ => None,
        }
    }
}
