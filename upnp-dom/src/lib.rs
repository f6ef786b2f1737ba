//! DOM helpers for UPnP sample applications
//!
//! This crate reads values out of already-parsed XML trees: the text of an
//! element such as `<Channel>11</Channel>`, the first element with a given
//! tag, and the service entries of a device description document. It has no
//! side effects; reporting failures to a user is left to the caller.
//!
//! # Example
//!
//! ```
//! use upnp_dom::{first_service_list, parse_document, ServiceEntry};
//!
//! let doc = parse_document(
//!     "<root><device><serviceList><service>\
//!      <serviceType>urn:schemas-upnp-org:service:SwitchPower:1</serviceType>\
//!      <controlURL>/ctl</controlURL>\
//!      </service></serviceList></device></root>",
//! )?;
//!
//! let services = first_service_list(&doc).unwrap_or_default();
//! let entry = ServiceEntry::from_element(services[0]);
//! assert_eq!(entry.control_url.as_deref(), Some("/ctl"));
//! # Ok::<(), upnp_dom::DomError>(())
//! ```

mod error;
pub mod description;
pub mod node;

pub use error::{DomError, Result};

pub use description::{
    base_url, first_document_item, first_element_item, first_service_list, resolve_url,
    ServiceEntry,
};
pub use node::{
    element_value, elements_by_tag_name, first_element, parse_document, print_node,
    qualified_name,
};

/// Re-exported so callers can name DOM types without depending on `xmltree` directly.
pub use xmltree::{Element, XMLNode};
